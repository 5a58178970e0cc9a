use super::backend::{validate_key, StorageBackend};
use crate::error::{NotesError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

/// In-memory storage backend for testing.
///
/// Uses `Rc<RefCell<..>>` since stickynotes is single-threaded. Clones share the same
/// map, which lets a test hand one "container" to both a `NoteStore` and a
/// `WidgetBridge`, the way the app and the widget share one on-disk store.
#[derive(Clone, Default)]
pub struct MemBackend {
    values: Rc<RefCell<HashMap<String, Vec<u8>>>>,
    simulate_write_error: Rc<Cell<bool>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of keys currently holding a value.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        if self.simulate_write_error.get() {
            return Err(NotesError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn location(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(PathBuf::from(format!("memory://{}", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_key_is_none() {
        let backend = MemBackend::new();
        assert_eq!(backend.read("notes").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let backend = MemBackend::new();
        backend.write("notes", b"[]").unwrap();
        assert_eq!(backend.read("notes").unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_clones_share_values() {
        let app = MemBackend::new();
        let widget = app.clone();

        app.write("selectedNote", b"{}").unwrap();
        assert_eq!(widget.read("selectedNote").unwrap(), Some(b"{}".to_vec()));
        assert_eq!(widget.len(), 1);
    }

    #[test]
    fn test_simulated_write_error_keeps_previous_value() {
        let backend = MemBackend::new();
        backend.write("notes", b"old").unwrap();

        backend.set_simulate_write_error(true);
        assert!(backend.write("notes", b"new").is_err());
        assert_eq!(backend.read("notes").unwrap(), Some(b"old".to_vec()));
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        let backend = MemBackend::new();
        assert!(backend.write("../escape", b"x").is_err());
        assert!(backend.read("a/b").is_err());
        assert!(backend.is_empty());
    }

    #[test]
    fn test_location_is_virtual() {
        let backend = MemBackend::new();
        assert_eq!(
            backend.location("notes").unwrap(),
            PathBuf::from("memory://notes")
        );
    }
}
