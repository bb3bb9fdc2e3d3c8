//! Codec Module
//!
//! Turns records into bytes and back. The store never looks inside the
//! bytes; everything it knows about a record's encoding goes through the
//! [`Codec`] trait.
//!
//! ## Provided Codecs
//! - [`BincodeCodec`]: serde + bincode, compact binary
//! - [`ChecksumCodec`]: wraps any codec in a CRC32-protected frame
//!
//! ## Checksum Frame Format
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Header (14 bytes)                                            │
//! │   Magic: "SLOT" (4) | Version: u16 (2) | Len: u32 (4)        │
//! │   CRC32 of payload: u32 (4)                                  │
//! ├──────────────────────────────────────────────────────────────┤
//! │ Payload (Len bytes, produced by the inner codec)             │
//! └──────────────────────────────────────────────────────────────┘
//! ```

mod binary;
mod checksum;

pub use binary::BincodeCodec;
pub use checksum::{ChecksumCodec, HEADER_SIZE, MAGIC, VERSION};

use crate::error::{DecodeError, EncodeError};

/// Encode/decode capability for a record type
///
/// Implementations must be deterministic enough that
/// `decode(encode(r)?)` yields a value equal to `r`.
pub trait Codec<T> {
    /// Encode a record to bytes
    fn encode(&self, record: &T) -> Result<Vec<u8>, EncodeError>;

    /// Decode bytes into a record
    ///
    /// Bytes that parse but carry no record must be reported as
    /// [`DecodeError::MissingRecord`], never as a default value.
    fn decode(&self, bytes: &[u8]) -> Result<T, DecodeError>;
}

/// The codec used when a caller has no preference: bincode inside a
/// checksum frame
pub type DefaultCodec<T> = ChecksumCodec<BincodeCodec<T>>;
