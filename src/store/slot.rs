//! Slot naming and path utilities

use std::path::{Component, Path, PathBuf};

/// Extension of a valid slot
pub const DATA_EXT: &str = "dat";

/// Extension of an in-flight save
pub const TEMP_EXT: &str = "tmp";

/// Extension of a quarantined slot
pub const QUARANTINE_EXT: &str = "corrupted";

/// Check that `name` can be used as the stem of a file in the root
pub(crate) fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("name is empty");
    }
    if name == "." || name == ".." {
        return Err("name is a relative path component");
    }
    if name.contains(['/', '\\']) {
        return Err("name contains a path separator");
    }
    if name.contains('\0') {
        return Err("name contains a NUL byte");
    }
    Ok(())
}

/// Check that `subfolder` is a relative path that stays inside the root
pub(crate) fn validate_subfolder(subfolder: &str) -> Result<(), &'static str> {
    let path = Path::new(subfolder);
    if subfolder.is_empty() {
        return Err("subfolder is empty");
    }
    if !path.components().all(|c| matches!(c, Component::Normal(_))) {
        return Err("subfolder must be a plain relative path");
    }
    Ok(())
}

/// "{dir}/{name}.{ext}"
pub(crate) fn file_in(dir: &Path, name: &str, ext: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, ext))
}

/// "apple.dat" → Some("apple"), anything else → None
pub(crate) fn slot_name(file_name: &str) -> Option<&str> {
    let stem = file_name.strip_suffix(DATA_EXT)?.strip_suffix('.')?;
    validate_name(stem).ok().map(|_| stem)
}

/// Accept either "apple" or "apple.dat"
pub(crate) fn bare_name(name: &str) -> &str {
    slot_name(name).unwrap_or(name)
}
