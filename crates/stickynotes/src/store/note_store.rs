use super::backend::StorageBackend;
use crate::error::{NotesError, Result};
use crate::model::{derive_title, Note, NoteId, SortKey};
use log::{debug, warn};

/// Key under which the whole note collection is persisted.
pub const NOTES_KEY: &str = "notes";

/// Handle returned by [`NoteStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Change notification delivered to subscribers after the collection has been
/// mutated and persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteEvent {
    Added(Note),
    Updated(Note),
    Deleted(Note),
    /// The collection was replaced by what the backend holds.
    Reloaded { count: usize },
}

type Listener = Box<dyn FnMut(&NoteEvent)>;

/// Owns the ordered note collection and keeps the backend in step with it.
///
/// Every mutation re-serializes the full collection under [`NOTES_KEY`] before
/// returning. Persistence failures never reach the caller: the in-memory change
/// stands and a warning is logged. Call [`NoteStore::save`] directly to observe them.
pub struct NoteStore<B: StorageBackend> {
    backend: B,
    notes: Vec<Note>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<B: StorageBackend> NoteStore<B> {
    /// Open a store over `backend`, starting from whatever it has persisted.
    pub fn open(backend: B) -> Self {
        let notes = load_all(&backend);
        Self {
            backend,
            notes,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == *id)
    }

    /// The most recently added note.
    pub fn last(&self) -> Option<&Note> {
        self.notes.last()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn add_note(&mut self, title: impl Into<String>, content: impl Into<String>) -> Note {
        let note = Note::new(title, content);
        self.notes.push(note.clone());
        self.persist();
        self.notify(&NoteEvent::Added(note.clone()));
        note
    }

    /// Remove the note with `id`. Returns the removed note, or `None` if it was not
    /// in the collection.
    pub fn delete_note(&mut self, id: &NoteId) -> Option<Note> {
        let removed = self
            .notes
            .iter()
            .position(|n| n.id() == *id)
            .map(|index| self.notes.remove(index));
        self.persist();
        if let Some(note) = &removed {
            self.notify(&NoteEvent::Deleted(note.clone()));
        }
        removed
    }

    /// Replace title and content of the note with `id`, keeping its identity.
    ///
    /// An empty `title` is replaced by the derived title (see [`derive_title`]).
    /// Returns the updated note, or `None` if it was not in the collection.
    pub fn update_note(
        &mut self,
        id: &NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Option<Note> {
        let content = content.into();
        let title = derive_title(&title.into(), &content);

        let updated = self.notes.iter_mut().find(|n| n.id() == *id).map(|note| {
            note.set_title(title);
            note.set_content(content);
            note.clone()
        });
        self.persist();
        if let Some(note) = &updated {
            self.notify(&NoteEvent::Updated(note.clone()));
        }
        updated
    }

    /// The editor's save action.
    ///
    /// With a selected note this is [`NoteStore::update_note`]. Without one, a new note
    /// is added under the derived title, but only if there is content to save.
    pub fn save_draft(
        &mut self,
        selected: Option<&NoteId>,
        title: &str,
        content: &str,
    ) -> Option<Note> {
        match selected {
            Some(id) => self.update_note(id, title, content),
            None if !content.is_empty() => {
                Some(self.add_note(derive_title(title, content), content))
            }
            None => None,
        }
    }

    /// Notes matching `query`, ordered by `sort`. The stored order is untouched.
    ///
    /// An empty query matches everything. Otherwise a note matches when its title or
    /// content contains the query, ignoring case. Ties keep insertion order.
    pub fn filter_and_sort(&self, query: &str, sort: SortKey) -> Vec<Note> {
        let query = query.to_lowercase();
        let mut matches: Vec<Note> = self
            .notes
            .iter()
            .filter(|n| {
                query.is_empty()
                    || n.title().to_lowercase().contains(&query)
                    || n.content().to_lowercase().contains(&query)
            })
            .cloned()
            .collect();

        match sort {
            SortKey::DateCreated => {}
            SortKey::Title => matches.sort_by(|a, b| a.title().cmp(b.title())),
        }
        matches
    }

    /// Discard the in-memory collection and load it again from the backend.
    pub fn reload(&mut self) {
        self.notes = load_all(&self.backend);
        let count = self.notes.len();
        self.notify(&NoteEvent::Reloaded { count });
    }

    /// Serialize the full collection to the backend, reporting any failure.
    pub fn save(&self) -> Result<()> {
        let encoded = serde_json::to_vec(&self.notes).map_err(NotesError::Serialization)?;
        self.backend.write(NOTES_KEY, &encoded)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&NoteEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn persist(&self) {
        match self.save() {
            Ok(()) => debug!(
                "event=notes_persist module=store status=ok key={} count={}",
                NOTES_KEY,
                self.notes.len()
            ),
            Err(e) => warn!(
                "event=notes_persist module=store status=error key={} count={} err={}",
                NOTES_KEY,
                self.notes.len(),
                e
            ),
        }
    }

    fn notify(&mut self, event: &NoteEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

/// Decode the persisted collection from `backend`.
///
/// A missing key, an unreadable backend and a corrupt value all yield an empty
/// collection; the last two are logged.
pub fn load_all<B: StorageBackend>(backend: &B) -> Vec<Note> {
    let bytes = match backend.read(NOTES_KEY) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            debug!(
                "event=notes_load module=store status=empty key={}",
                NOTES_KEY
            );
            return Vec::new();
        }
        Err(e) => {
            warn!(
                "event=notes_load module=store status=fallback key={} reason=read err={}",
                NOTES_KEY, e
            );
            return Vec::new();
        }
    };

    match serde_json::from_slice::<Vec<Note>>(&bytes) {
        Ok(notes) => notes,
        Err(e) => {
            warn!(
                "event=notes_load module=store status=fallback key={} reason=decode err={}",
                NOTES_KEY, e
            );
            Vec::new()
        }
    }
}
