//! # SlotStore
//!
//! A small on-disk object store with:
//! - One file ("slot") per record, named by a caller-supplied function
//! - Atomic write-then-rename saves
//! - Corruption detection with quarantine instead of deletion
//! - Whole-directory scans
//! - Pluggable codecs and filesystems
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Host Application                        │
//! │            (supplies naming fn, codec, directory)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Store<T, C>                           │
//! │   save · load · load_or_quarantine · load_all · remove      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Codec    │          │ FileSystem  │
//!   │ (T ⇄ bytes) │          │ (LocalFs /  │
//!   └─────────────┘          │  MemoryFs)  │
//!                            └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use serde::{Deserialize, Serialize};
//! use slotstore::{Store, StoreConfig};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Player {
//!     id: String,
//!     score: u32,
//! }
//!
//! let config = StoreConfig::builder().data_dir("./data").sub_dir("players").build();
//! let store = Store::open_default(config, |p: &Player| p.id.clone())?;
//!
//! store.save(&Player { id: "alice".into(), score: 10 })?;
//! let alice = store.load_or_quarantine("alice").into_record()?;
//! # Ok::<(), slotstore::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod fs;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DecodeError, EncodeError, Result, StoreError};
pub use config::{StoreConfig, SyncStrategy};
pub use codec::{BincodeCodec, ChecksumCodec, Codec, DefaultCodec};
pub use fs::{FileSystem, LocalFs, MemoryFs};
pub use store::{LoadOutcome, QuarantineOutcome, Store};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of SlotStore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
