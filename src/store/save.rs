//! Atomic save
//!
//! ## Protocol
//! 1. Encode the record
//! 2. Write the bytes to `<name>.tmp`
//! 3. Rename `<name>.tmp` over `<name>.dat`
//! 4. If the rename fails, write `<name>.dat` directly (degraded)
//! 5. Drop any leftover `<name>.tmp`
//!
//! A reader only ever opens `<name>.dat`, and that name only ever appears
//! through the rename, so it sees the old slot or the new one, never half
//! of either. The direct write in step 4 gives that up and is logged.

use std::path::Path;

use crate::codec::Codec;
use crate::config::SyncStrategy;
use crate::error::{Result, StoreError};

use super::Store;

impl<T, C: Codec<T>> Store<T, C> {
    /// Save a record, replacing any slot with the same name
    ///
    /// Every failure is logged before it is returned, so callers that
    /// treat saving as best-effort may drop the result.
    pub fn save(&self, record: &T) -> Result<()> {
        self.in_scope(|| self.save_record(record))
    }

    fn save_record(&self, record: &T) -> Result<()> {
        // Step 1: Name and encode
        let name = self.record_name(record).map_err(|e| {
            tracing::error!(error = %e, "Refusing to save record");
            e
        })?;

        let bytes = self.codec.encode(record).map_err(|source| {
            tracing::error!(slot = %name, error = %source, "Couldn't encode record");
            StoreError::Encode {
                name: name.clone(),
                source,
            }
        })?;

        let temp = self.temp_path(&name);
        let slot = self.slot_path(&name);
        let sync = self.config.sync_strategy == SyncStrategy::EverySave;

        // Step 2: Write the temp file; the slot is untouched if this fails
        if let Err(e) = self.fs.write(&temp, &bytes, sync) {
            tracing::error!(
                slot = %name,
                path = %temp.display(),
                error = %e,
                "Couldn't write temp file, previous slot left as is"
            );
            return Err(StoreError::io(temp, e));
        }

        // Step 3: Swap it in
        if let Err(rename_err) = self.fs.rename(&temp, &slot) {
            // Step 4: Degraded direct write
            tracing::warn!(
                slot = %name,
                path = %slot.display(),
                error = %rename_err,
                "Rename failed, trying to save directly"
            );

            if let Err(e) = self.fs.write(&slot, &bytes, sync) {
                tracing::error!(
                    slot = %name,
                    path = %slot.display(),
                    error = %e,
                    "Couldn't save directly"
                );
                return Err(StoreError::io(slot, e));
            }
        }

        // Step 5: Cleanup
        self.discard_temp(&temp);
        if sync {
            if let Err(e) = self.fs.sync_dir(&self.root) {
                tracing::debug!(path = %self.root.display(), error = %e, "Couldn't sync store directory");
            }
        }

        tracing::debug!(slot = %name, bytes = bytes.len(), "Saved slot");
        Ok(())
    }

    /// Remove a temp file if one is still there. Failure is harmless: the
    /// next save of the same name overwrites it.
    fn discard_temp(&self, temp: &Path) {
        if !self.fs.exists(temp) {
            return;
        }
        if let Err(e) = self.fs.remove_file(temp) {
            tracing::debug!(path = %temp.display(), error = %e, "Couldn't delete temp file");
        }
    }
}
