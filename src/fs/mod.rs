//! Filesystem Module
//!
//! The thin I/O layer the store is written against.
//!
//! ## Responsibilities
//! - Create directories, list regular files
//! - Whole-file read/write, rename, remove
//!
//! Everything above this layer speaks in slot names; everything below it
//! speaks in paths. [`LocalFs`] is the real thing. [`MemoryFs`] keeps the
//! whole tree in memory and can be told to fail specific operations.

mod local;
mod memory;

pub use local::LocalFs;
pub use memory::{Fault, MemoryFs};

use std::io;
use std::path::Path;

/// Filesystem primitives used by the store
///
/// Implementations must make `rename` replace an existing target file, and
/// must make it atomic wherever the platform allows.
pub trait FileSystem: Send + Sync {
    /// Create a directory and all missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Whether anything (file or directory) exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` is an existing regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read a whole file
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate a file and write `bytes` to it.
    /// With `sync`, the data is flushed to stable storage before returning.
    fn write(&self, path: &Path, bytes: &[u8], sync: bool) -> io::Result<()>;

    /// Move `from` to `to`, replacing `to` if it is a file
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Remove a file (not a directory)
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// File names of the regular files directly inside `dir`
    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Flush directory metadata (renames, creations) to stable storage
    fn sync_dir(&self, _dir: &Path) -> io::Result<()> {
        Ok(())
    }
}
