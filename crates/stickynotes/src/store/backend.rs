use crate::error::{NotesError, Result};
use std::path::PathBuf;

/// Abstract interface for raw key-value I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while NoteStore and WidgetBridge handle the "what" (encoding, fallbacks).
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing was ever written there.
    /// Returns Err only on actual I/O errors (permissions, disk failure) or a bad key.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial reads
    /// from another process.
    fn write(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Where the value for `key` lives.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn location(&self, key: &str) -> Result<PathBuf>;
}

/// Keys double as file names, so they are limited to `[A-Za-z0-9_-]`.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(NotesError::Store("Storage key cannot be empty".to_string()));
    }
    if let Some(bad) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(NotesError::Store(format!(
            "Invalid character '{}' in storage key '{}'",
            bad, key
        )));
    }
    Ok(())
}
