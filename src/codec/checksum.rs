//! Checksum codec
//!
//! Frames the output of an inner codec with magic bytes, a format version,
//! the payload length and a CRC32, so that bit rot and truncation surface
//! as decode failures instead of as wrong records.

use crate::error::{DecodeError, EncodeError};

use super::Codec;

/// Magic bytes identifying a SlotStore frame
pub const MAGIC: &[u8; 4] = b"SLOT";

/// Current frame format version
pub const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + Len (4) + CRC (4) = 14 bytes
pub const HEADER_SIZE: usize = 14;

/// Wraps an inner codec in a CRC-protected frame
#[derive(Debug, Clone, Default)]
pub struct ChecksumCodec<C> {
    inner: C,
}

impl<C> ChecksumCodec<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Get the wrapped codec
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<T, C: Codec<T>> Codec<T> for ChecksumCodec<C> {
    fn encode(&self, record: &T) -> Result<Vec<u8>, EncodeError> {
        let payload = self.inner.encode(record)?;
        let len = u32::try_from(payload.len())
            .map_err(|_| EncodeError(format!("payload too large: {} bytes", payload.len())))?;

        let mut frame = Vec::with_capacity(HEADER_SIZE + payload.len());
        frame.extend_from_slice(MAGIC);
        frame.extend_from_slice(&VERSION.to_le_bytes());
        frame.extend_from_slice(&len.to_le_bytes());
        frame.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
        frame.extend_from_slice(&payload);

        Ok(frame)
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        if bytes.len() < HEADER_SIZE {
            return Err(DecodeError::Truncated {
                expected: HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        if &bytes[0..4] != MAGIC {
            return Err(DecodeError::BadMagic);
        }

        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version != VERSION {
            return Err(DecodeError::UnsupportedVersion(version));
        }

        let len = u32::from_le_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]) as usize;
        let expected_crc = u32::from_le_bytes([bytes[10], bytes[11], bytes[12], bytes[13]]);

        let total = HEADER_SIZE.checked_add(len).ok_or(DecodeError::Truncated {
            expected: usize::MAX,
            actual: bytes.len(),
        })?;
        if bytes.len() < total {
            return Err(DecodeError::Truncated {
                expected: total,
                actual: bytes.len(),
            });
        }
        if bytes.len() > total {
            return Err(DecodeError::Malformed(format!(
                "{} trailing bytes after frame",
                bytes.len() - total
            )));
        }

        let payload = &bytes[HEADER_SIZE..total];
        let actual_crc = crc32fast::hash(payload);
        if actual_crc != expected_crc {
            return Err(DecodeError::ChecksumMismatch {
                expected: expected_crc,
                actual: actual_crc,
            });
        }

        self.inner.decode(payload)
    }
}
