//! # Stickynotes Architecture
//!
//! Stickynotes is the **UI-agnostic core** of a sticky notes app: a list of notes that
//! can be created, edited, deleted, searched and sorted, persisted locally, plus a
//! home-screen widget that mirrors one selected note.
//!
//! Views, text fields and pickers live in the host application. They call into this
//! crate and re-render when it tells them something changed.
//!
//! ## Components
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (host app views, widget renderer)             │
//! └─────────────────────────────────────────────────────────────┘
//!          │ mutate / query                 │ fetch_selection
//!          ▼                                ▼
//! ┌──────────────────────────┐   ┌──────────────────────────────┐
//! │  NoteStore (store/)      │   │  WidgetBridge (widget.rs)    │
//! │  - ordered collection    │   │  - one "selected note" slot  │
//! │  - add/update/delete     │   │  - default note fallback     │
//! │  - filter & sort         │   │                              │
//! │  - change notifications  │   │                              │
//! └──────────────────────────┘   └──────────────────────────────┘
//!          │ "notes"                        │ "selectedNote"
//!          ▼                                ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  StorageBackend (store/backend.rs)                          │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Reads Never Fail
//!
//! A missing or corrupt value is not an error for the components: the store starts
//! empty and the widget shows its default note. Write failures during automatic
//! persistence are logged through `log` and otherwise swallowed, so a mutation can
//! succeed in memory without reaching disk. [`store::NoteStore::save`] is the one
//! place that surfaces them.
//!
//! ## Threading
//!
//! Everything is synchronous and single-threaded. The app and the widget are separate
//! processes that share nothing but the storage directory.
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Note`, `NoteId`, `SortKey`) and title rules
//! - [`store`]: Storage abstraction, backends and the note store
//! - [`widget`]: The widget bridge
//! - [`init`]: Data directory resolution and opening the app/widget sides
//! - [`config`]: Configuration management
//! - [`logging`]: Rolling file logger bootstrap
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod widget;
