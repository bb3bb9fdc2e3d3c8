//! Slot removal. Quarantined and temp files are never touched.

use std::io;

use crate::codec::Codec;
use crate::error::{Result, StoreError};

use super::Store;

impl<T, C: Codec<T>> Store<T, C> {
    /// Remove the slot of a record; no-op if there is none
    pub fn remove(&self, record: &T) -> Result<()> {
        self.in_scope(|| {
            let name = self.record_name(record)?;
            self.delete_slot(&name).map(|_| ())
        })
    }

    /// Remove a slot by name
    ///
    /// Returns whether a file was actually deleted.
    pub fn remove_by_name(&self, name: &str) -> Result<bool> {
        self.in_scope(|| {
            self.check_name(name)?;
            self.delete_slot(name)
        })
    }

    fn delete_slot(&self, name: &str) -> Result<bool> {
        let path = self.slot_path(name);
        if !self.fs.is_file(&path) {
            return Ok(false);
        }

        match self.fs.remove_file(&path) {
            Ok(()) => {
                tracing::debug!(slot = %name, "Removed slot");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }
}
