//! Coordinate and identity types.
//!
//! All coordinates are meters. A [`Point2D`] is a floor-plan coordinate; a
//! [`Point3D`] uses `y` as vertical elevation, so the floor-plan point
//! `(px, py)` corresponds to the 3D point `(px, elevation, py)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a scene element, group, layer or measurement.
pub type ElementId = Uuid;

/// Generates a fresh random element identity.
pub fn new_element_id() -> ElementId {
    Uuid::new_v4()
}

/// A point on the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// Creates a new floor-plan point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Lifts this floor-plan point into 3D at the given elevation.
    pub fn to_3d(self, elevation: f64) -> Point3D {
        Point3D::new(self.x, elevation, self.y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// A point in 3D space; `y` is elevation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    /// Creates a new 3D point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Uniform point, used for default scale factors.
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Projects this point onto the floor plan, dropping elevation.
    pub fn plan(self) -> Point2D {
        Point2D::new(self.x, self.z)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

/// The kind of an editable scene element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Wall,
    Door,
    Window,
    Object,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wall => write!(f, "wall"),
            Self::Door => write!(f, "door"),
            Self::Window => write!(f, "window"),
            Self::Object => write!(f, "object"),
        }
    }
}
