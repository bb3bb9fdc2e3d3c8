//! Quarantine
//!
//! Moves an unusable slot out of the valid-slot set by renaming it to
//! `<new_name>.corrupted`, in the root or in a subfolder of it. The file
//! is kept, never deleted, so it can be inspected or repaired later.
//! Quarantining onto an existing `.corrupted` file replaces it.

use std::io;
use std::path::PathBuf;

use crate::codec::Codec;

use super::slot::{self, QUARANTINE_EXT};
use super::{QuarantineOutcome, Store};

impl<T, C: Codec<T>> Store<T, C> {
    /// Quarantine `<name>.dat` as `<name>.corrupted` in the root
    pub fn quarantine(&self, name: &str) -> QuarantineOutcome {
        self.quarantine_as(name, name, None)
    }

    /// Quarantine `<name>.dat` as `<subfolder>/<name>.corrupted`
    pub fn quarantine_into(&self, name: &str, subfolder: &str) -> QuarantineOutcome {
        self.quarantine_as(name, name, Some(subfolder))
    }

    /// Quarantine `<name>.dat` as `[<subfolder>/]<new_name>.corrupted`
    ///
    /// `name` may carry its `.dat` suffix. Failures are logged and reported
    /// in the outcome, never raised.
    pub fn quarantine_as(
        &self,
        name: &str,
        new_name: &str,
        subfolder: Option<&str>,
    ) -> QuarantineOutcome {
        let name = slot::bare_name(name);
        let new_name = slot::bare_name(new_name);
        self.in_scope(|| self.quarantine_slot(name, new_name, subfolder))
    }

    /// Move the slot of exactly `name`; no suffix handling
    pub(super) fn quarantine_slot(
        &self,
        name: &str,
        new_name: &str,
        subfolder: Option<&str>,
    ) -> QuarantineOutcome {
        let from = self.slot_path(name);
        let to = self.quarantine_target(new_name, subfolder);

        let invalid = slot::validate_name(name)
            .and(slot::validate_name(new_name))
            .and(subfolder.map_or(Ok(()), slot::validate_subfolder));
        if let Err(reason) = invalid {
            return self.quarantine_failed(from, to, io::Error::new(io::ErrorKind::InvalidInput, reason));
        }

        // Step 1: Make sure the destination folder exists
        let target_dir = self.quarantine_dir_path(subfolder);
        if let Err(e) = self.fs.create_dir_all(&target_dir) {
            return self.quarantine_failed(from, to, e);
        }

        // Step 2: Nothing to move is reported, not raised
        if !self.fs.is_file(&from) {
            tracing::warn!(path = %from.display(), "No slot to quarantine");
            return QuarantineOutcome::SourceMissing { from };
        }

        // Step 3: Move it
        match self.fs.rename(&from, &to) {
            Ok(()) => {
                tracing::info!(from = %from.display(), to = %to.display(), "Quarantined slot");
                QuarantineOutcome::Moved { to }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && !self.fs.is_file(&from) => {
                QuarantineOutcome::SourceMissing { from }
            }
            Err(e) => self.quarantine_failed(from, to, e),
        }
    }

    /// "{root}[/{subfolder}]/{new_name}.corrupted"
    pub(super) fn quarantine_target(&self, new_name: &str, subfolder: Option<&str>) -> PathBuf {
        slot::file_in(&self.quarantine_dir_path(subfolder), new_name, QUARANTINE_EXT)
    }

    fn quarantine_dir_path(&self, subfolder: Option<&str>) -> PathBuf {
        match subfolder {
            Some(sub) => self.root.join(sub),
            None => self.root.clone(),
        }
    }

    fn quarantine_failed(&self, from: PathBuf, to: PathBuf, error: io::Error) -> QuarantineOutcome {
        tracing::error!(
            from = %from.display(),
            to = %to.display(),
            error = %error,
            "Couldn't move slot to quarantine"
        );
        QuarantineOutcome::Failed { from, to, error }
    }
}
