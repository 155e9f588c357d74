//! Preferences Persistence
//!
//! Locates the preferences file in the platform configuration directory and
//! loads or saves [`EditorPreferences`] there. A missing or unreadable file
//! never blocks the editor: `load_or_default` falls back to defaults.

use crate::config::EditorPreferences;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "roomkit";
const PREFERENCES_FILE: &str = "preferences.json";

/// Preferences persistence layer
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    /// Store backed by `<config_dir>/roomkit/preferences.json`.
    pub fn new() -> SettingsResult<Self> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(Self {
            path: base.join(APP_DIR).join(PREFERENCES_FILE),
        })
    }

    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences from the backing file.
    pub fn load(&self) -> SettingsResult<EditorPreferences> {
        EditorPreferences::load_from_file(&self.path)
    }

    /// Load preferences, falling back to defaults when the file is absent or invalid.
    pub fn load_or_default(&self) -> EditorPreferences {
        if !self.path.exists() {
            return EditorPreferences::default();
        }
        match self.load() {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(
                    "Ignoring preferences at {}: {}",
                    self.path.display(),
                    e
                );
                EditorPreferences::default()
            }
        }
    }

    /// Save preferences, creating the parent directory when needed.
    pub fn save(&self, prefs: &EditorPreferences) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        prefs.save_to_file(&self.path)?;
        tracing::debug!("Saved preferences to {}", self.path.display());
        Ok(())
    }
}
