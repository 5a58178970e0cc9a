//! # Storage Layer
//!
//! Everything stickynotes persists lives in a small durable key-value store. Two keys
//! are in use:
//!
//! | Key | Writer | Value |
//! |-----|--------|-------|
//! | [`NOTES_KEY`] (`notes`) | [`NoteStore`] | JSON array of every note, in insertion order |
//! | [`crate::widget::SELECTION_KEY`] (`selectedNote`) | [`crate::widget::WidgetBridge`] | JSON object of one note |
//!
//! ## Two Processes, One Store
//!
//! The main application and the home-screen widget run in separate address spaces and
//! never share memory. They coordinate only through the key-value store:
//!
//! ```text
//! app ──(NoteStore)──► notes
//! app ──(WidgetBridge::publish_selection)──► selectedNote ◄──(fetch_selection)── widget
//! ```
//!
//! There is no locking. The last writer wins on each key, and every
//! [`StorageBackend`] must make a single-key write atomic so a reader sees either the
//! previous value or the new one, never a partial write.
//!
//! ## Failure Policy
//!
//! Backends report every I/O and key error. The components above them decide what to
//! do with it: the note store and the widget bridge fall back (empty collection, default
//! note) and log a warning instead of failing the caller.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production storage, one `<key>.json` file per key.
//! - [`mem_backend::MemBackend`]: For testing logic without filesystem I/O.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;

pub use backend::StorageBackend;
pub use note_store::{NoteEvent, NoteStore, SubscriptionId, NOTES_KEY};
