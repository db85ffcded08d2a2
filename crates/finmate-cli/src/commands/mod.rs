//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `chat` - Assistant commands (one-shot message, interactive session)
//! - `profile` - Profile commands (init, loading helper, health summary)
//! - `project` - Projection commands (summary, timeline table)
//! - `theme` - Theme preference commands (show, set, toggle)

pub mod chat;
pub mod profile;
pub mod project;
pub mod theme;

// Re-export command functions for main.rs
pub use chat::*;
pub use profile::*;
pub use project::*;
pub use theme::*;

use std::path::Path;

use anyhow::Result;
use finmate_core::FileThemeStore;

/// Open the theme store at the given path, or the platform default location
pub fn open_theme_store(path: Option<&Path>) -> Result<FileThemeStore> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => FileThemeStore::default_path()?,
    };
    Ok(FileThemeStore::new(path))
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
