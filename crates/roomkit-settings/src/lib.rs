//! RoomKit Settings Crate
//!
//! Handles editor preferences, their validation, and persistence to the
//! platform configuration directory.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::EditorPreferences;
pub use error::{SettingsError, SettingsResult};
pub use persistence::PreferencesStore;
