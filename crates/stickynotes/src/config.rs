//! # Configuration
//!
//! Stickynotes configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `STICKYNOTES__LOG_LEVEL`, `STICKYNOTES__PREVIEW_LINES`, etc.
//! 2. **Data directory config**: `<data dir>/stickynotes.toml`, shared by the app and the widget.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `log_level` | `info` | Level passed to [`crate::logging::init_logging`] |
//! | `preview_lines` | `3` | Content lines the widget renders under the title |
//! | `default_sort` | `date_created` | Initial list ordering (`date_created` or `title`) |

use crate::model::SortKey;
use confique::Config;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "stickynotes.toml";

/// Configuration for stickynotes, stored in `stickynotes.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    /// Log level for the rolling file logger (trace, debug, info, warn, error)
    #[config(default = "info")]
    pub log_level: String,

    /// Number of content lines shown on the widget
    #[config(default = 3)]
    pub preview_lines: usize,

    /// Initial sort order for the note list.
    /// When absent, notes are listed in creation order.
    pub default_sort: Option<SortKey>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            preview_lines: 3,
            default_sort: None,
        }
    }
}

impl NotesConfig {
    /// Get the sort order, using creation order if not configured.
    pub fn default_sort(&self) -> SortKey {
        self.default_sort.unwrap_or_default()
    }

    /// Preview line count, never below one.
    pub fn preview_lines(&self) -> usize {
        self.preview_lines.max(1)
    }
}
