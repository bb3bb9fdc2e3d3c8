//! Tests for directory scans
//!
//! These tests verify:
//! - list_names sees exactly the `.dat` slots and never reads them
//! - load_all returns every valid record and quarantines the rest
//! - A failing directory listing is an error

#[path = "../common/mod.rs"]
mod common;

use common::*;
use slotstore::{QuarantineOutcome, StoreError};

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

fn sorted_ids(records: Vec<Player>) -> Vec<String> {
    sorted(records.into_iter().map(|p| p.id).collect())
}

// =============================================================================
// list_names Tests
// =============================================================================

#[test]
fn test_list_names_empty_store() {
    let (_temp, store) = setup_temp_store();

    assert!(store.list_names().unwrap().is_empty());
}

#[test]
fn test_list_names_ignores_other_files() {
    let (_temp, store) = setup_temp_store();
    store.save(&player("alice", 1)).unwrap();
    store.save(&player("bob", 2)).unwrap();

    let root = store.root();
    std::fs::write(root.join("carol.tmp"), b"x").unwrap();
    std::fs::write(root.join("dave.corrupted"), b"x").unwrap();
    std::fs::write(root.join("notes.txt"), b"x").unwrap();
    std::fs::write(root.join(".dat"), b"x").unwrap();
    std::fs::create_dir(root.join("folder.dat")).unwrap();

    assert_eq!(sorted(store.list_names().unwrap()), vec!["alice", "bob"]);
}

#[test]
fn test_directory_named_like_a_slot_is_not_a_slot() {
    let (_temp, store) = setup_temp_store();
    let dir = store.root().join("folder.dat");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join("keep.txt"), b"x").unwrap();

    assert!(store.list_names().unwrap().is_empty());
    assert!(!store.can_load("folder"));
    assert_eq!(store.load("folder").unwrap(), None);
    assert!(store.load_or_quarantine("folder").is_absent());
    assert!(!store.remove_by_name("folder").unwrap());
    assert!(matches!(
        store.quarantine("folder"),
        QuarantineOutcome::SourceMissing { .. }
    ));

    assert!(dir.join("keep.txt").exists());
    assert!(!store.root().join("folder.corrupted").exists());
}

#[test]
fn test_list_names_does_not_decode() {
    let (_temp, store) = setup_temp_store();
    corrupt_slot(store.root(), "bad", b"garbage");

    assert_eq!(store.list_names().unwrap(), vec!["bad"]);
    // Listing never quarantines
    assert_eq!(files_in(store.root()), vec!["bad.dat"]);
}

#[test]
fn test_list_names_memory_fs() {
    let (_fs, store) = setup_memory_store();
    store.save(&player("x", 1)).unwrap();
    store.save(&player("y", 2)).unwrap();

    assert_eq!(sorted(store.list_names().unwrap()), vec!["x", "y"]);
}

#[test]
fn test_list_names_missing_root_is_error() {
    let (_temp, store) = setup_temp_store();
    std::fs::remove_dir_all(store.root()).unwrap();

    assert!(matches!(store.list_names(), Err(StoreError::Io { .. })));
    assert!(matches!(store.load_all(), Err(StoreError::Io { .. })));
}

// =============================================================================
// load_all Tests
// =============================================================================

#[test]
fn test_load_all_empty_store() {
    let (_temp, store) = setup_temp_store();

    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn test_load_all_returns_every_record() {
    let (_temp, store) = setup_temp_store();
    for i in 0..10 {
        store.save(&player(&format!("p{}", i), i)).unwrap();
    }

    let records = store.load_all().unwrap();

    assert_eq!(records.len(), 10);
    assert!(records.contains(&player("p7", 7)));
}

#[test]
fn test_load_all_quarantines_corrupt_slots() {
    let (_temp, store) = setup_temp_store();
    for name in ["a", "b", "c"] {
        store.save(&player(name, 1)).unwrap();
    }
    corrupt_slot(store.root(), "x", b"garbage");
    corrupt_slot(store.root(), "y", b"");

    let records = store.load_all().unwrap();

    assert_eq!(sorted_ids(records), vec!["a", "b", "c"]);
    assert_eq!(
        files_in(store.root()),
        vec!["a.dat", "b.dat", "c.dat", "x.corrupted", "y.corrupted"]
    );
}

#[test]
fn test_load_all_quarantines_slot_whose_name_ends_in_dat() {
    let (_temp, store) = setup_temp_store();
    store.save(&player("bob", 1)).unwrap();
    corrupt_slot(store.root(), "bob.dat", b"garbage");

    let records = store.load_all().unwrap();

    assert_eq!(records, vec![player("bob", 1)]);
    assert_eq!(files_in(store.root()), vec!["bob.dat", "bob.dat.corrupted"]);
    assert_eq!(store.list_names().unwrap(), vec!["bob"]);
}

#[test]
fn test_load_all_second_scan_is_clean() {
    let (_temp, store) = setup_temp_store();
    store.save(&player("a", 1)).unwrap();
    corrupt_slot(store.root(), "x", b"garbage");

    assert_eq!(store.load_all().unwrap().len(), 1);
    let after_first = files_in(store.root());

    assert_eq!(store.load_all().unwrap().len(), 1);
    assert_eq!(files_in(store.root()), after_first);
}

#[test]
fn test_load_all_logs_each_corrupt_slot() {
    let (_temp, store) = setup_temp_store();
    let (dispatch, logs) = capture_dispatch();
    let store = store.with_dispatch(dispatch);
    corrupt_slot(store.root(), "x", b"garbage");
    corrupt_slot(store.root(), "y", b"garbage");

    store.load_all().unwrap();

    let output = logs.contents();
    assert!(output.contains("x.corrupted"));
    assert!(output.contains("y.corrupted"));
}
