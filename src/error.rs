//! Error types for SlotStore
//!
//! Provides a unified error type for store operations, plus the codec
//! errors that travel inside it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for SlotStore operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    #[error("Invalid record: {reason}")]
    InvalidRecord { reason: String },

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Slot '{name}' was corrupted and has no record to access")]
    AlreadyCorrupted { name: String },

    // -------------------------------------------------------------------------
    // Filesystem Errors
    // -------------------------------------------------------------------------
    #[error("'{}' exists and is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Failed to encode record '{name}': {source}")]
    Encode {
        name: String,
        #[source]
        source: EncodeError,
    },

    #[error("Failed to decode '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the bytes on disk are unusable (as opposed
    /// to the disk itself misbehaving)
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// A record could not be turned into bytes
#[derive(Debug, Error)]
#[error("{0}")]
pub struct EncodeError(pub String);

/// Bytes on disk do not parse into a valid record
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed encoding: {0}")]
    Malformed(String),

    /// The bytes parsed, but held no record
    #[error("no record present in encoding")]
    MissingRecord,

    #[error("bad magic bytes")]
    BadMagic,

    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u16),

    #[error("truncated data: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
}
