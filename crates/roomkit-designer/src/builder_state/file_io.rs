//! Project document import/export for builder state.

use super::BuilderState;
use crate::serialization::ProjectDocument;
use crate::tools::ToolState;
use anyhow::Context;
use chrono::Utc;
use std::path::Path;

impl BuilderState {
    /// Snapshot of the current state as a project document.
    ///
    /// An empty project name is filled from the room name.
    pub fn to_document(&self) -> ProjectDocument {
        let mut metadata = self.metadata.clone();
        if metadata.name.is_empty() {
            if let Some(room) = &self.current_room {
                metadata.name = room.name.clone();
            }
        }
        metadata.modified = Utc::now();

        ProjectDocument {
            version: crate::serialization::DOCUMENT_VERSION.to_string(),
            metadata,
            room: self.current_room.clone(),
            floor_texture: self.floor_texture.clone(),
            wall_texture: self.wall_texture.clone(),
            measurements: self.measurements.clone(),
            preferences: self.preferences.clone(),
            organization: self.organization.clone(),
            view_mode: self.view_mode,
        }
    }

    /// Replaces editor state with the document's.
    ///
    /// History restarts from the imported room; selection and drafts are
    /// cleared. The clipboard is kept.
    pub fn apply_document(&mut self, doc: ProjectDocument) {
        self.metadata = doc.metadata;
        self.floor_texture = doc.floor_texture;
        self.wall_texture = doc.wall_texture;
        self.measurements = doc.measurements;
        self.preferences = doc.preferences;
        self.organization = doc.organization;
        self.organization.normalize();
        self.view_mode = doc.view_mode;
        self.set_current_room(doc.room);
        self.tool_state = ToolState::Idle;
    }

    /// Serializes the current state as project JSON.
    pub fn to_json(&self) -> roomkit_core::Result<String> {
        Ok(self.to_document().to_json()?)
    }

    /// Imports project JSON into this state.
    pub fn import_json(&mut self, text: &str) -> roomkit_core::Result<()> {
        let doc = ProjectDocument::from_json(text)?;
        self.apply_document(doc);
        Ok(())
    }

    /// Builds a fresh state from project JSON.
    pub fn from_json(text: &str) -> roomkit_core::Result<Self> {
        let mut state = Self::new();
        state.import_json(text)?;
        Ok(state)
    }

    /// Save project to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = self.to_json().context("Failed to serialize project")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write project file {}", path.display()))?;
        self.metadata.modified = Utc::now();
        tracing::info!("Saved project to {}", path.display());
        Ok(())
    }

    /// Load project from file.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read project file {}", path.display()))?;
        self.import_json(&text)
            .with_context(|| format!("Failed to parse project file {}", path.display()))?;
        tracing::info!("Loaded project from {}", path.display());
        Ok(())
    }
}
