//! Builder state for host integration.
//! Owns the current room and every piece of editor state around it.
//!
//! This module is split into submodules:
//! - `elements`: Room lifecycle, element add/update/remove, derived geometry
//! - `history`: Undo/redo checkpoints
//! - `selection`: Primary and multi-selection, locks, groups, layers
//! - `tools`: Tool switching, drafts and pointer input
//! - `clipboard`: Copy, paste, duplicate
//! - `file_io`: Project document import/export

mod clipboard;
mod elements;
mod file_io;
mod history;
mod selection;
mod tools;

use crate::clipboard::Clipboard;
use crate::history::HistoryManager;
use crate::model::{Material, Measurement, Room};
use crate::organization::Organization;
use crate::selection_manager::SelectionManager;
use crate::serialization::ProjectMetadata;
use crate::tools::{Tool, ToolState, ViewMode};
use roomkit_settings::EditorPreferences;

/// The room builder engine.
///
/// A single owned value; the host drives it with method calls and reads
/// back state for rendering.
#[derive(Debug, Clone)]
pub struct BuilderState {
    /// Editing defaults; not part of history
    pub preferences: EditorPreferences,
    /// Host presentation mode
    pub view_mode: ViewMode,
    pub floor_texture: Option<String>,
    pub wall_texture: Option<String>,
    /// Material applied by the material tool on click
    pub default_material: Option<Material>,
    pub metadata: ProjectMetadata,
    pub(crate) current_room: Option<Room>,
    pub(crate) history: HistoryManager,
    pub(crate) selection: SelectionManager,
    pub(crate) organization: Organization,
    pub(crate) tool: Tool,
    pub(crate) tool_state: ToolState,
    pub(crate) clipboard: Clipboard,
    pub(crate) measurements: Vec<Measurement>,
    pub(crate) zoom: f64,
}

impl Default for BuilderState {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderState {
    /// Creates an engine with no room and default preferences.
    pub fn new() -> Self {
        Self::with_preferences(EditorPreferences::default())
    }

    /// Creates an engine with no room and the given preferences.
    pub fn with_preferences(preferences: EditorPreferences) -> Self {
        Self {
            preferences,
            view_mode: ViewMode::default(),
            floor_texture: None,
            wall_texture: None,
            default_material: None,
            metadata: ProjectMetadata::default(),
            current_room: None,
            history: HistoryManager::default(),
            selection: SelectionManager::new(),
            organization: Organization::default(),
            tool: Tool::Select,
            tool_state: ToolState::Idle,
            clipboard: Clipboard::new(),
            measurements: Vec::new(),
            zoom: 1.0,
        }
    }

    /// Returns to the initial state, keeping preferences.
    pub fn reset(&mut self) {
        let preferences = std::mem::take(&mut self.preferences);
        *self = Self::with_preferences(preferences);
        tracing::debug!("Builder state reset");
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.current_room.as_ref()
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn organization(&self) -> &Organization {
        &self.organization
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tool_state
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the host zoom factor, clamped to the supported range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = crate::tools::clamp_zoom(zoom);
    }

    pub fn set_grid_size(&mut self, grid_size: f64) {
        if grid_size.is_finite() && grid_size > 0.0 {
            self.preferences.grid_size = grid_size;
        } else {
            tracing::trace!("Ignoring grid size {}", grid_size);
        }
    }

    pub fn set_snap_to_grid(&mut self, enabled: bool) {
        self.preferences.snap_to_grid = enabled;
    }

    pub fn set_show_measurements(&mut self, show: bool) {
        self.preferences.show_measurements = show;
    }

    /// Records the current room as a history entry, if there is one.
    pub(crate) fn checkpoint(&mut self) {
        if let Some(room) = &self.current_room {
            self.history.save(room);
        }
    }
}
