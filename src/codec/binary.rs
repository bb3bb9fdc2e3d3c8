//! Bincode codec
//!
//! Serializes records with serde + bincode. The record is written as an
//! `Option` so that a file holding "nothing" is distinguishable from a
//! file holding a record.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DecodeError, EncodeError};

use super::Codec;

/// Compact binary codec for any serde type
pub struct BincodeCodec<T> {
    _record: PhantomData<fn() -> T>,
}

impl<T> BincodeCodec<T> {
    pub fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<T> Default for BincodeCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for BincodeCodec<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BincodeCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BincodeCodec").finish()
    }
}

impl<T> Codec<T> for BincodeCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, record: &T) -> Result<Vec<u8>, EncodeError> {
        ::bincode::serialize(&Some(record)).map_err(|e| EncodeError(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        let decoded: Option<T> = ::bincode::deserialize(bytes)
            .map_err(|e| DecodeError::Malformed(e.to_string()))?;
        decoded.ok_or(DecodeError::MissingRecord)
    }
}
