//! Configuration for SlotStore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a Store instance
#[derive(Debug, Clone)]
pub struct StoreConfig {
    // -------------------------------------------------------------------------
    // Layout Configuration
    // -------------------------------------------------------------------------
    /// Host data directory
    /// Internal structure:
    ///   {data_dir}/[{sub_dir}/]
    ///     ├── <name>.dat        (valid slots)
    ///     ├── <name>.tmp        (in-flight saves)
    ///     ├── <name>.corrupted  (quarantined slots)
    ///     └── <subfolder>/      (optional quarantine subfolders)
    pub data_dir: PathBuf,

    /// Optional directory under `data_dir` that becomes the store root
    pub sub_dir: Option<PathBuf>,

    // -------------------------------------------------------------------------
    // Durability Configuration
    // -------------------------------------------------------------------------
    /// Whether saves fsync before they rename
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Quarantine Configuration
    // -------------------------------------------------------------------------
    /// Subfolder (relative to the store root) that automatic quarantine
    /// moves corrupted slots into. `None` keeps them beside the slots.
    pub quarantine_dir: Option<String>,
}

/// Sync strategy: whether to fsync temp files on save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStrategy {
    /// Leave flushing to the OS (fastest)
    #[default]
    Never,

    /// fsync the temp file before the rename and the directory after it
    EverySave,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./slotstore_data"),
            sub_dir: None,
            sync_strategy: SyncStrategy::Never,
            quarantine_dir: None,
        }
    }
}

impl StoreConfig {
    /// Create a new config builder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    /// The directory slots live in: `data_dir`, or `data_dir/sub_dir`
    pub fn root(&self) -> PathBuf {
        match &self.sub_dir {
            Some(sub) => self.data_dir.join(sub),
            None => self.data_dir.clone(),
        }
    }
}

/// Builder for StoreConfig
#[derive(Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the sub directory used as the store root
    pub fn sub_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.sub_dir = Some(path.into());
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the default quarantine subfolder
    pub fn quarantine_dir(mut self, subfolder: impl Into<String>) -> Self {
        self.config.quarantine_dir = Some(subfolder.into());
        self
    }

    pub fn build(self) -> StoreConfig {
        self.config
    }
}
