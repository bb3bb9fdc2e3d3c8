//! Directory scans
//!
//! Listing order is whatever the filesystem returns; callers must not
//! depend on it.

use crate::codec::Codec;
use crate::error::{Result, StoreError};

use super::load::is_not_found;
use super::slot;
use super::Store;

impl<T, C: Codec<T>> Store<T, C> {
    /// Names of every current slot, without reading any of them
    pub fn list_names(&self) -> Result<Vec<String>> {
        self.in_scope(|| self.scan_names())
    }

    /// Load every slot in the store
    ///
    /// Slots that fail to load are quarantined and skipped, so one bad file
    /// never aborts the scan. Only failing to list the directory is an error.
    pub fn load_all(&self) -> Result<Vec<T>> {
        self.in_scope(|| {
            let names = self.scan_names()?;
            let mut records = Vec::with_capacity(names.len());
            let mut corrupted = 0usize;

            for name in names {
                match self.read_slot(&self.slot_path(&name)) {
                    Ok(record) => records.push(record),
                    Err(e) if is_not_found(&e) => continue, // Removed mid-scan
                    Err(cause) => {
                        corrupted += 1;
                        self.quarantine_corrupted(&name, cause);
                    }
                }
            }

            tracing::trace!(loaded = records.len(), corrupted, "Scanned store");
            Ok(records)
        })
    }

    fn scan_names(&self) -> Result<Vec<String>> {
        let files = self
            .fs
            .list_files(&self.root)
            .map_err(|e| StoreError::io(&self.root, e))?;

        Ok(files
            .iter()
            .filter_map(|file| slot::slot_name(file))
            .map(str::to_string)
            .collect())
    }
}
