//! # Domain Model: Notes, Identity and Titles
//!
//! This module defines the core data structures for stickynotes: [`Note`], [`NoteId`]
//! and [`SortKey`]. It also owns the title rules shared by the store and the widget.
//!
//! ## Identity
//!
//! A note is identified by a [`NoteId`] generated once, at construction. Equality and
//! hashing look at the id only, so two snapshots of the same note taken at different
//! times compare equal even when their titles differ:
//!
//! ```text
//! Note { id: A, title: "Groceries" }  ==  Note { id: A, title: "Shopping" }
//! Note { id: A, title: "Groceries" }  !=  Note { id: B, title: "Groceries" }
//! ```
//!
//! `id` and `date_created` have no setters. Only `title` and `content` change over a
//! note's life, and only through the store.
//!
//! ## Derived Titles
//!
//! Users often type straight into the body and leave the title field blank. When a note
//! is saved with an empty title, [`derive_title`] picks the effective title:
//!
//! 1. The title itself, if non-empty.
//! 2. Otherwise the first non-empty line of the content.
//! 3. Otherwise the literal [`UNTITLED_TITLE`].
//!
//! ## Wire Format
//!
//! Notes serialize as field-named JSON records. Timestamps use RFC 3339:
//!
//! ```text
//! {"id":"6f1c…","title":"","content":"Milk","dateCreated":"2024-10-09T12:00:00Z"}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Title shown (and derived) for notes with neither title nor content.
pub const UNTITLED_TITLE: &str = "Untitled Note";

/// Opaque, immutable note identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(Uuid);

impl NoteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for NoteId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    date_created: DateTime<Utc>,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            title: title.into(),
            content: content.into(),
            date_created: Utc::now(),
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn date_created(&self) -> DateTime<Utc> {
        self.date_created
    }

    /// Title as rendered in lists and on the widget.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_TITLE
        } else {
            &self.title
        }
    }

    /// The first `max_lines` lines of the content, joined back with newlines.
    pub fn preview(&self, max_lines: usize) -> String {
        self.content
            .lines()
            .take(max_lines)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Ordering applied to the note list for presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Insertion order, oldest first.
    #[default]
    DateCreated,
    /// Byte-wise lexicographic title order.
    Title,
}

/// Picks the effective title for a note saved with `title` and `content`.
pub fn derive_title(title: &str, content: &str) -> String {
    if !title.is_empty() {
        return title.to_string();
    }
    content
        .lines()
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNTITLED_TITLE.to_string())
}
