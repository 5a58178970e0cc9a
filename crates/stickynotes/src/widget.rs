//! # Widget Bridge
//!
//! The home-screen widget runs in its own process, on a schedule the OS controls (app
//! launch, periodic refresh, gallery snapshots). It cannot see the [`NoteStore`]'s
//! memory, so the main application copies one note into a dedicated slot of the shared
//! key-value store and the widget reads it back from there.
//!
//! ## Slot States
//!
//! ```text
//!            publish_selection            publish_selection
//!   Empty ─────────────────────► Populated ─────────────────┐
//!                                    ▲                      │
//!                                    └──────────────────────┘
//! ```
//!
//! There is no way back to `Empty`. While the slot is empty (or holds something that
//! does not decode), [`WidgetBridge::fetch_selection`] returns the default note so the
//! widget always has something to render.
//!
//! ## Snapshots, Not References
//!
//! The slot holds a copy of the note's fields at publish time. Editing or deleting the
//! note afterwards leaves the widget showing the old copy until the app publishes again.
//!
//! [`NoteStore`]: crate::store::NoteStore

use crate::error::{NotesError, Result};
use crate::model::Note;
use crate::store::StorageBackend;
use chrono::{DateTime, Utc};
use log::{debug, warn};

/// Key under which the selected note snapshot is stored.
pub const SELECTION_KEY: &str = "selectedNote";

pub const DEFAULT_NOTE_TITLE: &str = "Default Note";
pub const DEFAULT_NOTE_CONTENT: &str = "This note is displayed by default.";

pub const PLACEHOLDER_NOTE_TITLE: &str = "Placeholder";
pub const PLACEHOLDER_NOTE_CONTENT: &str = "This is a placeholder note.";

/// Note shown when nothing has been published yet.
pub fn default_note() -> Note {
    Note::new(DEFAULT_NOTE_TITLE, DEFAULT_NOTE_CONTENT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Empty,
    Populated,
}

/// One renderable widget frame.
#[derive(Debug, Clone)]
pub struct WidgetEntry {
    pub date: DateTime<Utc>,
    pub note: Note,
}

impl WidgetEntry {
    pub fn title(&self) -> &str {
        self.note.display_title()
    }

    pub fn preview(&self, max_lines: usize) -> String {
        self.note.preview(max_lines)
    }
}

/// When the widget host should ask for the next timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadPolicy {
    /// Request a new timeline once the last entry has been shown.
    AtEnd,
}

#[derive(Debug, Clone)]
pub struct WidgetTimeline {
    pub entries: Vec<WidgetEntry>,
    pub policy: ReloadPolicy,
}

/// Reads and writes the selected-note slot.
///
/// The app side calls [`publish_selection`](Self::publish_selection); the widget side
/// only reads. Both sides construct their own bridge over a backend pointing at the
/// same storage.
pub struct WidgetBridge<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> WidgetBridge<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Copy `note` into the slot, replacing any previous selection.
    /// Failures are logged, not returned.
    pub fn publish_selection(&self, note: &Note) {
        match self.write_selection(note) {
            Ok(()) => debug!(
                "event=widget_publish module=widget status=ok key={} note_id={}",
                SELECTION_KEY,
                note.id()
            ),
            Err(e) => warn!(
                "event=widget_publish module=widget status=error key={} note_id={} err={}",
                SELECTION_KEY,
                note.id(),
                e
            ),
        }
    }

    /// The published note, or the default note if there is none.
    pub fn fetch_selection(&self) -> Note {
        self.current_selection().unwrap_or_else(default_note)
    }

    /// The published note, if the slot holds one that decodes.
    pub fn current_selection(&self) -> Option<Note> {
        let bytes = match self.backend.read(SELECTION_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                warn!(
                    "event=widget_fetch module=widget status=fallback key={} reason=read err={}",
                    SELECTION_KEY, e
                );
                return None;
            }
        };

        match serde_json::from_slice::<Note>(&bytes) {
            Ok(note) => Some(note),
            Err(e) => {
                warn!(
                    "event=widget_fetch module=widget status=fallback key={} reason=decode err={}",
                    SELECTION_KEY, e
                );
                None
            }
        }
    }

    pub fn slot_state(&self) -> SlotState {
        match self.current_selection() {
            Some(_) => SlotState::Populated,
            None => SlotState::Empty,
        }
    }

    /// Entry shown in the widget gallery before any real data is available.
    pub fn placeholder_entry(&self) -> WidgetEntry {
        WidgetEntry {
            date: Utc::now(),
            note: Note::new(PLACEHOLDER_NOTE_TITLE, PLACEHOLDER_NOTE_CONTENT),
        }
    }

    pub fn snapshot(&self) -> WidgetEntry {
        WidgetEntry {
            date: Utc::now(),
            note: self.fetch_selection(),
        }
    }

    pub fn timeline(&self) -> WidgetTimeline {
        WidgetTimeline {
            entries: vec![self.snapshot()],
            policy: ReloadPolicy::AtEnd,
        }
    }

    fn write_selection(&self, note: &Note) -> Result<()> {
        let encoded = serde_json::to_vec(note).map_err(NotesError::Serialization)?;
        self.backend.write(SELECTION_KEY, &encoded)
    }
}
