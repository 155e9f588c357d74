//! Editor preferences for RoomKit
//!
//! Preferences are the per-user editing defaults that travel alongside a
//! project but are never part of undo/redo history:
//! - Grid size and snapping
//! - Grid and measurement visibility
//! - Default dimensions for newly drawn walls
//!
//! Supports JSON and TOML file formats, chosen by file extension.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_grid_size() -> f64 {
    0.1
}
fn default_true() -> bool {
    true
}
fn default_wall_height() -> f64 {
    2.7
}
fn default_wall_thickness() -> f64 {
    0.2
}

/// Editor preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorPreferences {
    /// Grid spacing in meters
    #[serde(default = "default_grid_size")]
    pub grid_size: f64,
    /// Round pointer coordinates to the grid
    #[serde(default = "default_true")]
    pub snap_to_grid: bool,
    /// Draw the grid (host rendering hint)
    #[serde(default = "default_true")]
    pub show_grid: bool,
    /// Height assigned to walls created by the wall tool
    #[serde(default = "default_wall_height")]
    pub default_wall_height: f64,
    /// Thickness assigned to walls created by the wall tool
    #[serde(default = "default_wall_thickness")]
    pub default_wall_thickness: f64,
    /// Draw committed measurements (host rendering hint)
    #[serde(default = "default_true")]
    pub show_measurements: bool,
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            snap_to_grid: true,
            show_grid: true,
            default_wall_height: default_wall_height(),
            default_wall_thickness: default_wall_thickness(),
            show_measurements: true,
        }
    }
}

impl EditorPreferences {
    /// Load preferences from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let prefs: Self = match extension(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        prefs.validate()?;
        Ok(prefs)
    }

    /// Save preferences to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate preferences
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            return Err(SettingsError::invalid("grid_size", "must be positive"));
        }

        if !(self.default_wall_height.is_finite() && self.default_wall_height > 0.0) {
            return Err(SettingsError::invalid(
                "default_wall_height",
                "must be positive",
            ));
        }

        if !(self.default_wall_thickness.is_finite() && self.default_wall_thickness > 0.0) {
            return Err(SettingsError::invalid(
                "default_wall_thickness",
                "must be positive",
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

fn extension(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}
