use super::backend::{validate_key, StorageBackend};
use crate::error::{NotesError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem storage backend: one `<key>.json` file per key under `root`.
///
/// Cloning is cheap and every clone (or any other `FsBackend` pointed at the same
/// directory, e.g. from the widget process) sees the same values.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotesError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        match fs::read(self.value_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(NotesError::Io(e)),
        }
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        self.ensure_dir()?;

        let target_path = self.value_path(key);

        // Atomic Write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(NotesError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &target_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(NotesError::Io(e));
        }

        Ok(())
    }

    fn location(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.value_path(key))
    }
}
