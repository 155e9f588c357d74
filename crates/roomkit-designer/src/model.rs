//! Scene model: architectural elements and the room that owns them.
//!
//! A [`Room`] is the unit of editing, undo/redo snapshotting and
//! serialization. Element lists keep insertion order; that order is also
//! the hit-test order within a kind.
//!
//! Every field carries a serde default so that partially written documents
//! still decode; a missing id becomes a fresh random identity.

use roomkit_core::{new_element_id, ElementId, ElementKind, Point2D, Point3D};
use serde::{Deserialize, Serialize};

fn default_wall_height() -> f64 {
    2.7
}
fn default_wall_thickness() -> f64 {
    0.2
}
fn default_door_width() -> f64 {
    Door::DEFAULT_WIDTH
}
fn default_door_height() -> f64 {
    Door::DEFAULT_HEIGHT
}
fn default_window_width() -> f64 {
    Window::DEFAULT_WIDTH
}
fn default_window_height() -> f64 {
    Window::DEFAULT_HEIGHT
}
fn default_ceiling_height() -> f64 {
    2.7
}
fn default_scale() -> Point3D {
    Point3D::splat(1.0)
}
fn default_roughness() -> f64 {
    0.8
}
fn default_color() -> String {
    "#f5f5f5".to_string()
}

/// Surface material applied to an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    #[serde(default = "new_element_id")]
    pub id: ElementId,
    #[serde(default)]
    pub name: String,
    /// CSS hex color
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub texture_url: Option<String>,
    #[serde(default = "default_roughness")]
    pub roughness: f64,
    #[serde(default)]
    pub metalness: f64,
}

impl Material {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: new_element_id(),
            name: name.into(),
            color: color.into(),
            texture_url: None,
            roughness: default_roughness(),
            metalness: 0.0,
        }
    }
}

/// Kind of opening cached on a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
}

/// Cached reference to a door or window hosted on a wall.
///
/// Informational only; the door/window list is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallOpening {
    /// Id of the hosted door or window
    pub id: ElementId,
    pub kind: OpeningKind,
    /// Distance along the wall from its start point
    #[serde(default)]
    pub position: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    /// Elevation of the opening's bottom edge
    #[serde(default)]
    pub from_floor: f64,
}

/// A straight wall segment on the floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    #[serde(default = "new_element_id")]
    pub id: ElementId,
    #[serde(default)]
    pub start: Point2D,
    #[serde(default)]
    pub end: Point2D,
    #[serde(default = "default_wall_height")]
    pub height: f64,
    #[serde(default = "default_wall_thickness")]
    pub thickness: f64,
    #[serde(default)]
    pub material: Option<Material>,
    #[serde(default)]
    pub openings: Vec<WallOpening>,
}

impl Wall {
    /// Creates a wall with a fresh id and no material or openings.
    pub fn new(start: Point2D, end: Point2D, height: f64, thickness: f64) -> Self {
        Self {
            id: new_element_id(),
            start,
            end,
            height,
            thickness,
            material: None,
            openings: Vec::new(),
        }
    }
}

/// Door variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorType {
    #[default]
    Standard,
    Sliding,
    Pivot,
    Security,
    Barn,
    Folding,
}

/// A door, usually placed against a wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    #[serde(default = "new_element_id")]
    pub id: ElementId,
    #[serde(default)]
    pub door_type: DoorType,
    #[serde(default = "default_door_width")]
    pub width: f64,
    #[serde(default = "default_door_height")]
    pub height: f64,
    #[serde(default)]
    pub position: Point3D,
    /// Wall-facing angle in degrees
    #[serde(default)]
    pub rotation: f64,
    /// Wall this door was created against; not enforced
    #[serde(default)]
    pub wall_id: Option<ElementId>,
    #[serde(default)]
    pub material: Option<Material>,
}

impl Door {
    pub const DEFAULT_WIDTH: f64 = 0.9;
    pub const DEFAULT_HEIGHT: f64 = 2.1;

    /// A standard door at `position` with default dimensions.
    pub fn new(position: Point3D, rotation: f64) -> Self {
        Self {
            id: new_element_id(),
            door_type: DoorType::Standard,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            position,
            rotation,
            wall_id: None,
            material: None,
        }
    }
}

/// Window variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowType {
    Single,
    #[default]
    Double,
    Sliding,
    Skylight,
    TiltTurn,
}

/// Number of glass panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glazing {
    Single,
    #[default]
    Double,
    Triple,
}

/// A window, usually placed against a wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    #[serde(default = "new_element_id")]
    pub id: ElementId,
    #[serde(default)]
    pub window_type: WindowType,
    #[serde(default = "default_window_width")]
    pub width: f64,
    #[serde(default = "default_window_height")]
    pub height: f64,
    /// Position; `y` is the sill elevation
    #[serde(default)]
    pub position: Point3D,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub glazing: Glazing,
    #[serde(default)]
    pub wall_id: Option<ElementId>,
    #[serde(default)]
    pub material: Option<Material>,
}

impl Window {
    pub const DEFAULT_WIDTH: f64 = 1.2;
    pub const DEFAULT_HEIGHT: f64 = 1.0;
    pub const DEFAULT_SILL_HEIGHT: f64 = 1.2;

    /// A double-glazed window at `position` with default dimensions.
    pub fn new(position: Point3D, rotation: f64) -> Self {
        Self {
            id: new_element_id(),
            window_type: WindowType::Double,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            position,
            rotation,
            glazing: Glazing::Double,
            wall_id: None,
            material: None,
        }
    }
}

/// Catalog category of a placed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectCategory {
    #[default]
    Furniture,
    Fixture,
    Electrical,
    Hvac,
    Decoration,
}

/// A furniture item, fixture or other catalog object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    #[serde(default = "new_element_id")]
    pub id: ElementId,
    /// Key into the host's object catalog
    #[serde(default)]
    pub object_type: String,
    #[serde(default)]
    pub category: ObjectCategory,
    #[serde(default)]
    pub position: Point3D,
    /// Per-axis rotation in degrees
    #[serde(default)]
    pub rotation: Point3D,
    #[serde(default = "default_scale")]
    pub scale: Point3D,
    #[serde(default)]
    pub model_url: Option<String>,
    #[serde(default)]
    pub material: Option<Material>,
}

impl PlacedObject {
    /// Creates an object with zero rotation and unit scale.
    pub fn new(object_type: impl Into<String>, category: ObjectCategory, position: Point3D) -> Self {
        Self {
            id: new_element_id(),
            object_type: object_type.into(),
            category,
            position,
            rotation: Point3D::default(),
            scale: default_scale(),
            model_url: None,
            material: None,
        }
    }
}

/// Floor surface of a room.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Floor {
    #[serde(default)]
    pub material: Option<Material>,
}

/// Ceiling of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ceiling {
    #[serde(default = "default_ceiling_height")]
    pub height: f64,
    #[serde(default)]
    pub material: Option<Material>,
}

impl Default for Ceiling {
    fn default() -> Self {
        Self {
            height: default_ceiling_height(),
            material: None,
        }
    }
}

/// One editable space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default = "new_element_id")]
    pub id: ElementId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub doors: Vec<Door>,
    #[serde(default)]
    pub windows: Vec<Window>,
    #[serde(default)]
    pub objects: Vec<PlacedObject>,
    #[serde(default)]
    pub floor: Floor,
    #[serde(default)]
    pub ceiling: Ceiling,
}

impl Room {
    /// Creates an empty room with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_element_id(),
            name: name.into(),
            walls: Vec::new(),
            doors: Vec::new(),
            windows: Vec::new(),
            objects: Vec::new(),
            floor: Floor::default(),
            ceiling: Ceiling::default(),
        }
    }

    pub fn wall(&self, id: ElementId) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == id)
    }

    pub fn wall_mut(&mut self, id: ElementId) -> Option<&mut Wall> {
        self.walls.iter_mut().find(|w| w.id == id)
    }

    pub fn door(&self, id: ElementId) -> Option<&Door> {
        self.doors.iter().find(|d| d.id == id)
    }

    pub fn door_mut(&mut self, id: ElementId) -> Option<&mut Door> {
        self.doors.iter_mut().find(|d| d.id == id)
    }

    pub fn window(&self, id: ElementId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn window_mut(&mut self, id: ElementId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    pub fn object(&self, id: ElementId) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn object_mut(&mut self, id: ElementId) -> Option<&mut PlacedObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Which kind of element, if any, carries this id.
    pub fn kind_of(&self, id: ElementId) -> Option<ElementKind> {
        if self.wall(id).is_some() {
            Some(ElementKind::Wall)
        } else if self.door(id).is_some() {
            Some(ElementKind::Door)
        } else if self.window(id).is_some() {
            Some(ElementKind::Window)
        } else if self.object(id).is_some() {
            Some(ElementKind::Object)
        } else {
            None
        }
    }

    /// Ids of every element, walls first then doors, windows and objects.
    pub fn element_ids(&self) -> Vec<ElementId> {
        self.walls
            .iter()
            .map(|w| w.id)
            .chain(self.doors.iter().map(|d| d.id))
            .chain(self.windows.iter().map(|w| w.id))
            .chain(self.objects.iter().map(|o| o.id))
            .collect()
    }

    pub fn element_count(&self) -> usize {
        self.walls.len() + self.doors.len() + self.windows.len() + self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }

    /// Drops the cached opening for `opening_id` from whichever wall hosts it.
    pub(crate) fn forget_opening(&mut self, opening_id: ElementId) {
        for wall in &mut self.walls {
            wall.openings.retain(|o| o.id != opening_id);
        }
    }
}

/// Sparse update for a wall. Only present fields are applied.
#[derive(Debug, Clone, Default)]
pub struct WallUpdate {
    pub start: Option<Point2D>,
    pub end: Option<Point2D>,
    pub height: Option<f64>,
    pub thickness: Option<f64>,
    pub material: Option<Material>,
}

impl WallUpdate {
    pub(crate) fn apply_to(self, wall: &mut Wall) {
        if let Some(start) = self.start {
            wall.start = start;
        }
        if let Some(end) = self.end {
            wall.end = end;
        }
        if let Some(height) = self.height {
            wall.height = height;
        }
        if let Some(thickness) = self.thickness {
            wall.thickness = thickness;
        }
        if let Some(material) = self.material {
            wall.material = Some(material);
        }
    }
}

/// Sparse update for a door.
#[derive(Debug, Clone, Default)]
pub struct DoorUpdate {
    pub door_type: Option<DoorType>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub position: Option<Point3D>,
    pub rotation: Option<f64>,
    pub material: Option<Material>,
}

impl DoorUpdate {
    pub(crate) fn apply_to(self, door: &mut Door) {
        if let Some(door_type) = self.door_type {
            door.door_type = door_type;
        }
        if let Some(width) = self.width {
            door.width = width;
        }
        if let Some(height) = self.height {
            door.height = height;
        }
        if let Some(position) = self.position {
            door.position = position;
        }
        if let Some(rotation) = self.rotation {
            door.rotation = rotation;
        }
        if let Some(material) = self.material {
            door.material = Some(material);
        }
    }
}

/// Sparse update for a window.
#[derive(Debug, Clone, Default)]
pub struct WindowUpdate {
    pub window_type: Option<WindowType>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub position: Option<Point3D>,
    pub rotation: Option<f64>,
    pub glazing: Option<Glazing>,
    pub material: Option<Material>,
}

impl WindowUpdate {
    pub(crate) fn apply_to(self, window: &mut Window) {
        if let Some(window_type) = self.window_type {
            window.window_type = window_type;
        }
        if let Some(width) = self.width {
            window.width = width;
        }
        if let Some(height) = self.height {
            window.height = height;
        }
        if let Some(position) = self.position {
            window.position = position;
        }
        if let Some(rotation) = self.rotation {
            window.rotation = rotation;
        }
        if let Some(glazing) = self.glazing {
            window.glazing = glazing;
        }
        if let Some(material) = self.material {
            window.material = Some(material);
        }
    }
}

/// Sparse update for a placed object.
#[derive(Debug, Clone, Default)]
pub struct ObjectUpdate {
    pub object_type: Option<String>,
    pub category: Option<ObjectCategory>,
    pub position: Option<Point3D>,
    pub rotation: Option<Point3D>,
    pub scale: Option<Point3D>,
    pub material: Option<Material>,
}

impl ObjectUpdate {
    pub(crate) fn apply_to(self, object: &mut PlacedObject) {
        if let Some(object_type) = self.object_type {
            object.object_type = object_type;
        }
        if let Some(category) = self.category {
            object.category = category;
        }
        if let Some(position) = self.position {
            object.position = position;
        }
        if let Some(rotation) = self.rotation {
            object.rotation = rotation;
        }
        if let Some(scale) = self.scale {
            object.scale = scale;
        }
        if let Some(material) = self.material {
            object.material = Some(material);
        }
    }
}

/// A committed distance measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(default = "new_element_id")]
    pub id: ElementId,
    #[serde(default)]
    pub start: Point3D,
    #[serde(default)]
    pub end: Point3D,
    /// Derived from the endpoints; recomputed on import
    #[serde(default)]
    pub distance: f64,
}

impl Measurement {
    /// Creates a measurement with its distance derived from the endpoints.
    pub fn new(start: Point3D, end: Point3D) -> Self {
        Self {
            id: new_element_id(),
            start,
            end,
            distance: crate::geometry::distance_3d(start, end),
        }
    }
}
