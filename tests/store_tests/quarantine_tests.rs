//! Tests for explicit quarantine
//!
//! These tests verify:
//! - Default, subfolder and renamed quarantine targets
//! - Names given with their `.dat` suffix
//! - Missing sources and failed moves are reported, never raised

#[path = "../common/mod.rs"]
mod common;

use std::io;

use common::*;
use slotstore::fs::Fault;
use slotstore::QuarantineOutcome;

// =============================================================================
// Move Tests
// =============================================================================

#[test]
fn test_quarantine_moves_slot_beside_root() {
    let (_temp, store) = setup_temp_store();
    store.save(&player("alice", 1)).unwrap();
    let original = std::fs::read(slot_file(store.root(), "alice")).unwrap();

    let outcome = store.quarantine("alice");

    assert!(outcome.is_moved());
    assert_eq!(files_in(store.root()), vec!["alice.corrupted"]);
    assert_eq!(
        std::fs::read(store.root().join("alice.corrupted")).unwrap(),
        original
    );
}

#[test]
fn test_quarantine_into_creates_subfolder() {
    let (_temp, store) = setup_temp_store();
    store.save(&player("alice", 1)).unwrap();

    let outcome = store.quarantine_into("alice", "corrupted/2024");

    let expected = store.root().join("corrupted").join("2024").join("alice.corrupted");
    assert_eq!(outcome.destination(), Some(&expected));
    assert!(expected.exists());
    assert!(!store.can_load("alice"));
}

#[test]
fn test_quarantine_as_renames() {
    let (_temp, store) = setup_temp_store();
    store.save(&player("alice", 1)).unwrap();

    let outcome = store.quarantine_as("alice", "alice-old", None);

    assert!(outcome.is_moved());
    assert!(store.root().join("alice-old.corrupted").exists());
    assert!(!store.root().join("alice.corrupted").exists());
}

#[test]
fn test_quarantine_accepts_dat_suffix() {
    let (_temp, store) = setup_temp_store();
    store.save(&player("alice", 1)).unwrap();

    let outcome = store.quarantine("alice.dat");

    assert!(outcome.is_moved());
    assert_eq!(files_in(store.root()), vec!["alice.corrupted"]);
}

#[test]
fn test_quarantine_replaces_previous_artifact() {
    let (_temp, store) = setup_temp_store();
    std::fs::write(store.root().join("alice.corrupted"), b"older").unwrap();
    corrupt_slot(store.root(), "alice", b"newer");

    assert!(store.quarantine("alice").is_moved());

    assert_eq!(
        std::fs::read(store.root().join("alice.corrupted")).unwrap(),
        b"newer"
    );
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn test_quarantine_missing_slot_is_reported() {
    let (_temp, store) = setup_temp_store();

    let outcome = store.quarantine("nobody");

    assert!(matches!(outcome, QuarantineOutcome::SourceMissing { .. }));
    assert!(files_in(store.root()).is_empty());
}

#[test]
fn test_quarantine_failed_rename_leaves_slot() {
    let (fs, store) = setup_memory_store();
    let (dispatch, logs) = capture_dispatch();
    let store = store.with_dispatch(dispatch);
    store.save(&player("alice", 1)).unwrap();

    fs.inject(Fault::Rename);
    let outcome = store.quarantine("alice");

    assert!(matches!(outcome, QuarantineOutcome::Failed { .. }));
    assert!(store.can_load("alice"));
    assert!(logs.contents().contains("Couldn't move slot to quarantine"));
}

#[test]
fn test_quarantine_rejects_escaping_subfolder() {
    let (_temp, store) = setup_temp_store();
    store.save(&player("alice", 1)).unwrap();

    let outcome = store.quarantine_into("alice", "../outside");

    match outcome {
        QuarantineOutcome::Failed { error, .. } => {
            assert_eq!(error.kind(), io::ErrorKind::InvalidInput)
        }
        other => panic!("expected Failed, got {:?}", other),
    }
    assert!(store.can_load("alice"));
}

#[test]
fn test_quarantined_slot_is_not_listed() {
    let (_temp, store) = setup_temp_store();
    store.save(&player("alice", 1)).unwrap();
    store.save(&player("bob", 2)).unwrap();

    store.quarantine("alice");

    assert_eq!(store.list_names().unwrap(), vec!["bob"]);
    assert_eq!(store.load_all().unwrap(), vec![player("bob", 2)]);
}
