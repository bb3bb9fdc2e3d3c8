//! In-memory filesystem
//!
//! Keeps files and directories in ordered maps behind a RwLock. Faults can
//! be injected to exercise the store's degraded paths (failed renames,
//! failed writes, unreadable files) without touching a real disk.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, RwLock};

use super::FileSystem;

/// An operation a [`MemoryFs`] can be told to fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Every rename fails
    Rename,
    /// Every read fails
    Read,
    /// Writes to files with this extension fail (e.g. `"tmp"`)
    WriteExtension(String),
    /// Every remove fails
    Remove,
}

#[derive(Debug, Default)]
struct Tree {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
}

/// Filesystem that lives entirely in memory
///
/// ## Concurrency:
/// - `tree`: RwLock (concurrent reads, exclusive mutation)
/// - `faults`: Mutex, only touched by test setup and fault checks
#[derive(Debug, Default)]
pub struct MemoryFs {
    tree: RwLock<Tree>,
    faults: Mutex<Vec<Fault>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent operations of the given kind fail
    pub fn inject(&self, fault: Fault) {
        let mut faults = self.faults.lock();
        if !faults.contains(&fault) {
            faults.push(fault);
        }
    }

    /// Remove every injected fault
    pub fn clear_faults(&self) {
        self.faults.lock().clear();
    }

    /// Number of files currently stored
    pub fn file_count(&self) -> usize {
        self.tree.read().files.len()
    }

    fn has_fault(&self, fault: &Fault) -> bool {
        self.faults.lock().contains(fault)
    }

    fn write_faulted(&self, path: &Path) -> bool {
        let faults = self.faults.lock();
        faults.iter().any(|f| match f {
            Fault::WriteExtension(ext) => path.extension().is_some_and(|e| e == ext.as_str()),
            _ => false,
        })
    }

    fn injected(op: &str, path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::Other,
            format!("injected {} failure on '{}'", op, path.display()),
        )
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("'{}' not found", path.display()),
        )
    }

    fn parent_exists(tree: &Tree, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => tree.dirs.contains(parent),
            _ => true,
        }
    }
}

impl FileSystem for MemoryFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut tree = self.tree.write();

        if tree.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("'{}' is a file", path.display()),
            ));
        }

        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            tree.dirs.insert(ancestor.to_path_buf());
        }

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let tree = self.tree.read();
        tree.files.contains_key(path) || tree.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.tree.read().dirs.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.tree.read().files.contains_key(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        if self.has_fault(&Fault::Read) {
            return Err(Self::injected("read", path));
        }

        self.tree
            .read()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }

    fn write(&self, path: &Path, bytes: &[u8], _sync: bool) -> io::Result<()> {
        if self.write_faulted(path) {
            return Err(Self::injected("write", path));
        }

        let mut tree = self.tree.write();
        if !Self::parent_exists(&tree, path) {
            return Err(Self::not_found(path));
        }
        if tree.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("'{}' is a directory", path.display()),
            ));
        }

        tree.files.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        if self.has_fault(&Fault::Rename) {
            return Err(Self::injected("rename", from));
        }

        let mut tree = self.tree.write();
        if !tree.files.contains_key(from) {
            return Err(Self::not_found(from));
        }
        if !Self::parent_exists(&tree, to) || tree.dirs.contains(to) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("cannot rename onto '{}'", to.display()),
            ));
        }

        if let Some(bytes) = tree.files.remove(from) {
            tree.files.insert(to.to_path_buf(), bytes);
        }
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        if self.has_fault(&Fault::Remove) {
            return Err(Self::injected("remove", path));
        }

        self.tree
            .write()
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(path))
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        let tree = self.tree.read();
        if !tree.dirs.contains(dir) {
            return Err(Self::not_found(dir));
        }

        let names = tree
            .files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name())
            .filter_map(|name| name.to_str().map(str::to_string))
            .collect();

        Ok(names)
    }
}
