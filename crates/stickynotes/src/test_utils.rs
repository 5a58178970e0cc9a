use crate::store::fs_backend::FsBackend;
use crate::store::NoteStore;
use crate::widget::WidgetBridge;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway data directory with the app side and the widget side opened on it.
pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub store: NoteStore<FsBackend>,
    pub widget: WidgetBridge<FsBackend>,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            store: NoteStore::open(FsBackend::new(root.clone())),
            widget: WidgetBridge::new(FsBackend::new(root.clone())),
            _temp_dir: temp_dir,
            root,
        }
    }

    /// A second, independent backend on the same directory, as another process would open it.
    pub fn other_process(&self) -> FsBackend {
        FsBackend::new(self.root.clone())
    }
}
