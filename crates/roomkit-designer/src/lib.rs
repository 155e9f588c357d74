//! # RoomKit Designer
//!
//! The interactive spatial editing engine behind the room builder. A host
//! application feeds pointer events and commands into a [`BuilderState`] and
//! renders whatever state it reads back.
//!
//! ## Core Components
//!
//! - **Geometry**: Distance, grid snapping, wall angles, room area/perimeter
//! - **Model**: Walls, doors, windows, placed objects and the room holding them
//! - **History**: Linear undo/redo of whole-room snapshots
//! - **Selection & Organization**: Primary/multi selection, locks, groups, layers
//! - **Tools**: Wall drawing, opening placement, object placement, measuring
//! - **Hit Testing**: Priority-ordered picking on the floor plan
//! - **Clipboard**: One-slot copy, paste and duplicate
//! - **Serialization**: Lenient project document import/export
//!
//! ## Architecture
//!
//! ```text
//! BuilderState
//!   ├── Room (walls, doors, windows, objects)
//!   ├── HistoryManager (snapshots + cursor)
//!   ├── SelectionManager / Organization
//!   ├── Tool + ToolState (drafts)
//!   └── Clipboard, measurements, preferences
//! ```
//!
//! All coordinates are meters. Floor-plan points are [`Point2D`]; 3D
//! positions are [`Point3D`] with `y` as elevation.

pub mod builder_state;
pub mod clipboard;
pub mod geometry;
pub mod history;
pub mod model;
pub mod organization;
pub mod selection_manager;
pub mod serialization;
pub mod tools;

pub use builder_state::BuilderState;
pub use clipboard::{Clipboard, ClipboardItem, PASTE_OFFSET};
pub use history::{HistoryEntry, HistoryManager, DEFAULT_MAX_ENTRIES};
pub use hit_test::Hit;
pub use model::{
    Ceiling, Door, DoorType, DoorUpdate, Floor, Glazing, Material, Measurement, ObjectCategory,
    ObjectUpdate, OpeningKind, PlacedObject, Room, Wall, WallOpening, WallUpdate, Window,
    WindowType, WindowUpdate,
};
pub use organization::{Group, Layer, Organization};
pub use selection_manager::{SelectedElement, SelectionManager};
pub use serialization::{ProjectDocument, ProjectMetadata, DOCUMENT_VERSION};
pub use tools::{Tool, ToolState, ViewMode, MIN_WALL_LENGTH};

pub use roomkit_core::{ElementId, ElementKind, Point2D, Point3D};
pub use roomkit_settings::EditorPreferences;
