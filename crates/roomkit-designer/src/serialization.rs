//! Project document format.
//!
//! A project is saved as one JSON object holding the room, committed
//! measurements, texture choices, editor preferences and organization state.
//!
//! Import is deliberately forgiving. The text must be well-formed JSON with
//! an object at the root; beyond that every section that is missing or fails
//! to decode falls back to its default, and individual list entries that fail
//! to decode are dropped. Each fallback is logged at `warn`.

use crate::geometry::distance_3d;
use crate::model::{Door, Measurement, PlacedObject, Room, Wall, Window};
use crate::organization::Organization;
use crate::tools::ViewMode;
use chrono::{DateTime, Utc};
use roomkit_core::DocumentError;
use roomkit_settings::EditorPreferences;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Project document format version
pub const DOCUMENT_VERSION: &str = "1.0";

const ROOM_LISTS: [&str; 4] = ["walls", "doors", "windows", "objects"];

fn default_version() -> String {
    DOCUMENT_VERSION.to_string()
}

fn default_project_name() -> String {
    "Untitled".to_string()
}

/// Project metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Id of the owning project in the host application
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default = "default_project_name")]
    pub name: String,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub modified: DateTime<Utc>,
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            project_id: None,
            name: default_project_name(),
            created: now,
            modified: now,
        }
    }
}

/// Complete project document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub metadata: ProjectMetadata,
    #[serde(default)]
    pub room: Option<Room>,
    #[serde(default)]
    pub floor_texture: Option<String>,
    #[serde(default)]
    pub wall_texture: Option<String>,
    #[serde(default)]
    pub measurements: Vec<Measurement>,
    #[serde(default)]
    pub preferences: EditorPreferences,
    #[serde(default)]
    pub organization: Organization,
    #[serde(default)]
    pub view_mode: ViewMode,
}

impl Default for ProjectDocument {
    fn default() -> Self {
        Self {
            version: default_version(),
            metadata: ProjectMetadata::default(),
            room: None,
            floor_texture: None,
            wall_texture: None,
            measurements: Vec::new(),
            preferences: EditorPreferences::default(),
            organization: Organization::default(),
            view_mode: ViewMode::default(),
        }
    }
}

impl ProjectDocument {
    /// Encodes the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::Encode {
            reason: e.to_string(),
        })
    }

    /// Decodes a document, replacing unusable sections with defaults.
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Object(root) = value else {
            return Err(DocumentError::NotAnObject {
                found: json_type(&value).to_string(),
            });
        };

        let mut doc = ProjectDocument {
            version: section(&root, "version").unwrap_or_else(default_version),
            metadata: section(&root, "metadata").unwrap_or_default(),
            room: root.get("room").and_then(decode_room),
            floor_texture: section(&root, "floor_texture").unwrap_or_default(),
            wall_texture: section(&root, "wall_texture").unwrap_or_default(),
            measurements: root
                .get("measurements")
                .map(|v| decode_list(v, "measurements"))
                .unwrap_or_default(),
            preferences: section(&root, "preferences").unwrap_or_default(),
            organization: section(&root, "organization").unwrap_or_default(),
            view_mode: section(&root, "view_mode").unwrap_or_default(),
        };

        if let Err(e) = doc.preferences.validate() {
            tracing::warn!("Replacing invalid preferences with defaults: {}", e);
            doc.preferences = EditorPreferences::default();
        }
        doc.organization.normalize();
        for measurement in &mut doc.measurements {
            measurement.distance = distance_3d(measurement.start, measurement.end);
        }

        if doc.version != DOCUMENT_VERSION {
            tracing::warn!(
                "Document version {} differs from {}; importing leniently",
                doc.version,
                DOCUMENT_VERSION
            );
        }

        Ok(doc)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decodes `root[key]`, or `None` when the key is absent or unusable.
fn section<T: DeserializeOwned>(root: &Map<String, Value>, key: &str) -> Option<T> {
    let value = root.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::warn!("Ignoring malformed '{}' section: {}", key, e);
            None
        }
    }
}

/// Decodes each array entry on its own, dropping the ones that fail.
fn decode_list<T: DeserializeOwned>(value: &Value, what: &str) -> Vec<T> {
    let Value::Array(items) = value else {
        if !value.is_null() {
            tracing::warn!("Ignoring '{}': expected an array, found {}", what, json_type(value));
        }
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value(item.clone()) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!("Skipping {} entry {}: {}", what, i, e);
                None
            }
        })
        .collect()
}

fn decode_room(value: &Value) -> Option<Room> {
    let Value::Object(fields) = value else {
        if !value.is_null() {
            tracing::warn!("Ignoring 'room': expected an object, found {}", json_type(value));
        }
        return None;
    };

    let mut rest = fields.clone();
    for key in ROOM_LISTS {
        rest.remove(key);
    }
    let mut room: Room = match serde_json::from_value(Value::Object(rest)) {
        Ok(room) => room,
        Err(e) => {
            tracing::warn!("Room fields malformed, using defaults: {}", e);
            Room::new("")
        }
    };

    let list = |key: &str| fields.get(key).cloned().unwrap_or(Value::Null);
    room.walls = decode_list::<Wall>(&list("walls"), "walls");
    room.doors = decode_list::<Door>(&list("doors"), "doors");
    room.windows = decode_list::<Window>(&list("windows"), "windows");
    room.objects = decode_list::<PlacedObject>(&list("objects"), "objects");
    Some(room)
}
