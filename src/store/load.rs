//! Strict and recovering loads

use std::io;

use crate::codec::Codec;
use crate::error::{Result, StoreError};

use super::{LoadOutcome, Store};

impl<T, C: Codec<T>> Store<T, C> {
    /// Load a record by name
    ///
    /// Returns:
    /// - `Ok(Some(record))` — slot found and decoded
    /// - `Ok(None)` — no slot under this name
    /// - `Err(Io | Decode)` — slot exists but is unusable; nothing on disk
    ///   is changed, handling it is up to the caller
    pub fn load(&self, name: &str) -> Result<Option<T>> {
        self.in_scope(|| {
            self.check_name(name)?;

            let path = self.slot_path(name);
            if !self.fs.is_file(&path) {
                return Ok(None);
            }

            match self.read_slot(&path) {
                Ok(record) => Ok(Some(record)),
                Err(e) if is_not_found(&e) => Ok(None), // Removed since the check
                Err(e) => Err(e),
            }
        })
    }

    /// Load a record by name, moving an unusable slot to quarantine
    ///
    /// Never fails: read and decode errors come back as
    /// [`LoadOutcome::Corrupted`] after the slot has been moved to the
    /// configured quarantine folder.
    pub fn load_or_quarantine(&self, name: &str) -> LoadOutcome<T> {
        self.in_scope(|| {
            if let Err(e) = self.check_name(name) {
                tracing::debug!(error = %e, "No slot can exist under this name");
                return LoadOutcome::Absent;
            }

            let path = self.slot_path(name);
            if !self.fs.is_file(&path) {
                return LoadOutcome::Absent;
            }

            match self.read_slot(&path) {
                Ok(record) => LoadOutcome::Loaded(record),
                Err(e) if is_not_found(&e) => LoadOutcome::Absent,
                Err(cause) => self.quarantine_corrupted(name, cause),
            }
        })
    }

    /// Whether a slot exists under `name` (does not decode it)
    pub fn can_load(&self, name: &str) -> bool {
        self.check_name(name).is_ok() && self.fs.is_file(&self.slot_path(name))
    }

    /// Log a rejected slot and move it to the default quarantine folder
    pub(super) fn quarantine_corrupted(&self, name: &str, cause: StoreError) -> LoadOutcome<T> {
        let subfolder = self.config.quarantine_dir.as_deref();

        tracing::error!(
            slot = %name,
            path = %self.slot_path(name).display(),
            to = %self.quarantine_target(name, subfolder).display(),
            error = %cause,
            "Couldn't load slot, moving it to quarantine"
        );

        let quarantine = self.quarantine_slot(name, name, subfolder);

        LoadOutcome::Corrupted {
            name: name.to_string(),
            cause,
            quarantine,
        }
    }
}

pub(super) fn is_not_found(err: &StoreError) -> bool {
    matches!(err, StoreError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
}
