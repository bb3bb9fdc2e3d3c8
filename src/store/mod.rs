//! Store Module
//!
//! Persists records as one file per record ("slot") inside a directory.
//!
//! ## Responsibilities
//! - Atomic write-then-rename saves
//! - Strict loads, and loads that quarantine corrupted slots
//! - Whole-directory scans
//! - Removal of slots by record or by name
//!
//! ## Directory Layout
//! ```text
//! {root}/
//!   ├── <name>.dat        valid, loadable slot
//!   ├── <name>.tmp        in-flight save (never read as a slot)
//!   ├── <name>.corrupted  quarantined slot
//!   └── <subfolder>/
//!         └── <name>.corrupted
//! ```
//!
//! ## Concurrency
//! Every operation runs to completion on the caller's thread and holds no
//! file handle past its return. There is no locking: two saves of the same
//! name race at the rename and the last one wins. Hosts that need more
//! serialize calls per name themselves.

mod load;
mod outcome;
mod quarantine;
mod remove;
mod save;
mod scan;
mod slot;

pub use outcome::{LoadOutcome, QuarantineOutcome};
pub use slot::{DATA_EXT, QUARANTINE_EXT, TEMP_EXT};

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::Dispatch;

use crate::codec::{Codec, DefaultCodec};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::fs::{FileSystem, LocalFs};

/// Derives a record's name
pub type NamingFn<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// A directory of records, one file per record
///
/// ## Collaborators:
/// - `naming`: maps a record to the name of its slot
/// - `codec`: turns records into bytes and back
/// - `fs`: every byte goes through it
/// - `dispatch`: when set, all events the store emits go here instead of
///   the thread's default subscriber
pub struct Store<T, C> {
    /// Configuration the store was opened with
    config: StoreConfig,

    /// Directory holding the slots (created on open)
    root: PathBuf,

    naming: NamingFn<T>,
    codec: C,
    fs: Arc<dyn FileSystem>,
    dispatch: Option<Dispatch>,
}

impl<T, C: Codec<T>> Store<T, C> {
    /// Open or create a store on the local filesystem
    pub fn open<F>(config: StoreConfig, naming: F, codec: C) -> Result<Self>
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self::open_with_fs(config, naming, codec, Arc::new(LocalFs))
    }

    /// Open or create a store on the given filesystem
    ///
    /// On startup:
    /// 1. Resolve the root (`data_dir` or `data_dir/sub_dir`)
    /// 2. Refuse a root that exists but is not a directory
    /// 3. Create the root if it is missing
    pub fn open_with_fs<F>(
        config: StoreConfig,
        naming: F,
        codec: C,
        fs: Arc<dyn FileSystem>,
    ) -> Result<Self>
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let root = config.root();

        if fs.exists(&root) {
            if !fs.is_dir(&root) {
                return Err(StoreError::NotADirectory { path: root });
            }
        } else {
            fs.create_dir_all(&root)
                .map_err(|e| StoreError::io(&root, e))?;
        }

        Ok(Self {
            config,
            root,
            naming: Box::new(naming),
            codec,
            fs,
            dispatch: None,
        })
    }

    /// Route this store's events to `dispatch`
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }
}

impl<T> Store<T, DefaultCodec<T>>
where
    T: Serialize + DeserializeOwned,
{
    /// Open a store on the local filesystem using checksummed bincode
    pub fn open_default<F>(config: StoreConfig, naming: F) -> Result<Self>
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self::open(config, naming, DefaultCodec::default())
    }
}

impl<T, C> Store<T, C> {
    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the directory slots live in
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get the codec
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// The name a record would be saved under (unvalidated)
    pub fn name_of(&self, record: &T) -> String {
        (self.naming)(record)
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Run `f` with this store's dispatcher as the default, if it has one
    fn in_scope<R>(&self, f: impl FnOnce() -> R) -> R {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }

    /// Name a record, rejecting names that can't be a slot
    fn record_name(&self, record: &T) -> Result<String> {
        let name = (self.naming)(record);
        slot::validate_name(&name).map_err(|reason| StoreError::InvalidRecord {
            reason: format!("naming function produced '{}': {}", name, reason),
        })?;
        Ok(name)
    }

    fn check_name(&self, name: &str) -> Result<()> {
        slot::validate_name(name).map_err(|reason| StoreError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    }

    /// "{root}/{name}.dat"
    fn slot_path(&self, name: &str) -> PathBuf {
        slot::file_in(&self.root, name, DATA_EXT)
    }

    /// "{root}/{name}.tmp"
    fn temp_path(&self, name: &str) -> PathBuf {
        slot::file_in(&self.root, name, TEMP_EXT)
    }

    /// Read and decode a slot without touching anything else
    fn read_slot(&self, path: &Path) -> Result<T>
    where
        C: Codec<T>,
    {
        let bytes = self.fs.read(path).map_err(|e| StoreError::io(path, e))?;
        self.codec
            .decode(&bytes)
            .map_err(|source| StoreError::Decode {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl<T, C: fmt::Debug> fmt::Debug for Store<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("root", &self.root)
            .field("codec", &self.codec)
            .field("sync_strategy", &self.config.sync_strategy)
            .finish_non_exhaustive()
    }
}
