//! Outcomes of recovering loads and of quarantine moves

use std::io;
use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Result of [`Store::load_or_quarantine`](super::Store::load_or_quarantine)
///
/// Absent and corrupted are different answers: callers must branch on the
/// variant rather than collapse both into "no record".
#[derive(Debug)]
pub enum LoadOutcome<T> {
    /// No slot exists under the name
    Absent,

    /// The slot decoded successfully
    Loaded(T),

    /// The slot could not be read or decoded and was sent to quarantine
    Corrupted {
        name: String,
        /// Why the slot was rejected
        cause: StoreError,
        /// What happened to the file
        quarantine: QuarantineOutcome,
    },
}

impl<T> LoadOutcome<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn is_corrupted(&self) -> bool {
        matches!(self, Self::Corrupted { .. })
    }

    /// Borrow the record
    ///
    /// Returns:
    /// - `Ok(Some(record))` — loaded
    /// - `Ok(None)` — absent
    /// - `Err(AlreadyCorrupted)` — the slot was corrupted
    pub fn record(&self) -> Result<Option<&T>> {
        match self {
            Self::Absent => Ok(None),
            Self::Loaded(record) => Ok(Some(record)),
            Self::Corrupted { name, .. } => Err(StoreError::AlreadyCorrupted { name: name.clone() }),
        }
    }

    /// Take the record, same rules as [`record`](Self::record)
    pub fn into_record(self) -> Result<Option<T>> {
        match self {
            Self::Absent => Ok(None),
            Self::Loaded(record) => Ok(Some(record)),
            Self::Corrupted { name, .. } => Err(StoreError::AlreadyCorrupted { name }),
        }
    }
}

/// What a quarantine attempt did on disk
#[derive(Debug)]
pub enum QuarantineOutcome {
    /// The slot now lives at `to`
    Moved { to: PathBuf },

    /// There was no slot to move; nothing changed
    SourceMissing { from: PathBuf },

    /// The move was attempted and failed; the slot (if any) is where it was
    Failed {
        from: PathBuf,
        to: PathBuf,
        error: io::Error,
    },
}

impl QuarantineOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    /// Where the slot ended up, if it moved
    pub fn destination(&self) -> Option<&PathBuf> {
        match self {
            Self::Moved { to } => Some(to),
            _ => None,
        }
    }
}
