//! Theme preference storage with pluggable backends
//!
//! The chat assistant's only side effect is reading and writing the display
//! theme, so the store is an injected capability rather than ambient global
//! state:
//!
//! - `ThemeStore` trait defines the interface
//! - `InMemoryThemeStore` backs tests and embedded hosts
//! - `FileThemeStore` persists a single `light`/`dark` line under the
//!   platform data directory (`~/.local/share/finmate/theme` on Linux/Mac)
//!
//! Reads and writes go through a Mutex; concurrent toggles resolve to
//! last-writer-wins, which is acceptable for a UI preference.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use crate::error::{Error, Result};
use crate::models::Theme;

/// Interface for theme preference storage
pub trait ThemeStore: Send + Sync {
    /// Current theme, defaulting to light when nothing is stored
    fn get(&self) -> Theme;

    /// Persist a new theme
    fn set(&self, theme: Theme) -> Result<()>;
}

/// Volatile store for tests and hosts that own their persistence
pub struct InMemoryThemeStore {
    current: Mutex<Theme>,
}

impl InMemoryThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: Mutex::new(initial),
        }
    }
}

impl Default for InMemoryThemeStore {
    fn default() -> Self {
        Self::new(Theme::Light)
    }
}

impl ThemeStore for InMemoryThemeStore {
    fn get(&self) -> Theme {
        *self.current.lock().unwrap()
    }

    fn set(&self, theme: Theme) -> Result<()> {
        *self.current.lock().unwrap() = theme;
        Ok(())
    }
}

/// Store backed by a single small file containing `light` or `dark`
pub struct FileThemeStore {
    path: PathBuf,
    // Guards the read-modify-write cycle, not the file itself
    lock: Mutex<()>,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Default location under the platform data directory
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| Error::Theme("No data directory available".to_string()))?;
        Ok(base.join("finmate").join("theme"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn get(&self) -> Theme {
        let _guard = self.lock.lock().unwrap();
        match std::fs::read_to_string(&self.path) {
            Ok(data) => data.parse().unwrap_or_else(|_| {
                warn!("Unreadable theme value in {}, using light", self.path.display());
                Theme::Light
            }),
            // Missing file means nothing stored yet
            Err(_) => Theme::Light,
        }
    }

    fn set(&self, theme: Theme) -> Result<()> {
        let _guard = self.lock.lock().unwrap();
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, theme.as_str())?;
        Ok(())
    }
}
