//! # Opening the Shared Store
//!
//! The main application and the widget are separate processes. For the widget to see
//! what the app publishes, both must resolve the **same** data directory and open a
//! [`FsBackend`] over it.
//!
//! ## Data Directory Resolution
//!
//! 1. `data_override`, when the caller passes one.
//! 2. The `STICKYNOTES_DATA` environment variable (primarily for testing).
//! 3. The OS-appropriate data directory (via the `directories` crate).
//!
//! ## What Gets Opened
//!
//! - [`initialize`]: the app side. Loads configuration, opens the [`NoteStore`] (which
//!   reads the persisted notes) and a [`WidgetBridge`] for publishing.
//! - [`open_widget`]: the widget side. Only the bridge, nothing else is needed to render.

use crate::config::{NotesConfig, CONFIG_FILENAME};
use crate::error::{NotesError, Result};
use crate::model::{Note, NoteId};
use crate::store::fs_backend::FsBackend;
use crate::store::NoteStore;
use crate::widget::WidgetBridge;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use log::info;
use std::path::{Path, PathBuf};

pub const DATA_ENV_VAR: &str = "STICKYNOTES_DATA";

pub struct NotesContext {
    pub store: NoteStore<FsBackend>,
    pub widget: WidgetBridge<FsBackend>,
    pub config: NotesConfig,
    pub data_dir: PathBuf,
}

impl NotesContext {
    /// Publish the stored note with `id` to the widget slot.
    pub fn publish_widget_note(&self, id: &NoteId) -> Result<Note> {
        let note = self
            .store
            .get(id)
            .cloned()
            .ok_or(NotesError::NoteNotFound(*id))?;
        self.widget.publish_selection(&note);
        Ok(note)
    }
}

/// Resolve the data directory shared by the app and the widget.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }

    if let Some(path) = std::env::var_os(DATA_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    ProjectDirs::from("com", "stickynotes", "stickynotes")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| NotesError::Config("Could not determine data directory".to_string()))
}

/// Load `stickynotes.toml` from `data_dir`, falling back to defaults.
pub fn load_config(data_dir: &Path) -> NotesConfig {
    Clapfig::builder()
        .app_name("stickynotes")
        .file_name(CONFIG_FILENAME)
        .search_paths(vec![SearchPath::Path(data_dir.to_path_buf())])
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default()
}

/// Open everything the main application needs.
///
/// # Examples
///
/// ```ignore
/// // OS data directory (or STICKYNOTES_DATA)
/// let ctx = initialize(None)?;
///
/// // Explicit directory, e.g. an app group container
/// let ctx = initialize(Some(PathBuf::from("/path/to/group/container")))?;
/// ```
pub fn initialize(data_override: Option<PathBuf>) -> Result<NotesContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = load_config(&data_dir);

    let backend = FsBackend::new(data_dir.clone());
    let store = NoteStore::open(backend.clone());
    let widget = WidgetBridge::new(backend);

    info!(
        "event=app_open module=init status=ok data_dir={} notes={}",
        data_dir.display(),
        store.len()
    );

    Ok(NotesContext {
        store,
        widget,
        config,
        data_dir,
    })
}

/// Open the read side used by the widget process.
pub fn open_widget(data_override: Option<PathBuf>) -> Result<WidgetBridge<FsBackend>> {
    let data_dir = resolve_data_dir(data_override)?;
    Ok(WidgetBridge::new(FsBackend::new(data_dir)))
}
