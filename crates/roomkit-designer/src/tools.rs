//! Editing tools and their in-progress draft states.

use crate::model::ObjectCategory;
use roomkit_core::{Point2D, Point3D};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Walls shorter than this are discarded by the wall tool (meters).
pub const MIN_WALL_LENGTH: f64 = 0.1;

/// Floor-plan pixels per meter at zoom 1.
pub const PIXELS_PER_METER: f64 = 50.0;

/// Extra pick tolerance around walls, in screen pixels.
pub const WALL_PICK_TOLERANCE_PX: f64 = 5.0;

pub const MIN_ZOOM: f64 = 0.2;
pub const MAX_ZOOM: f64 = 5.0;

/// The active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Wall,
    Door,
    Window,
    Object,
    Measure,
    Material,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tool::Select => "select",
            Tool::Wall => "wall",
            Tool::Door => "door",
            Tool::Window => "window",
            Tool::Object => "object",
            Tool::Measure => "measure",
            Tool::Material => "material",
        };
        write!(f, "{}", name)
    }
}

/// Draft state of the active tool.
///
/// Switching tools always returns to [`ToolState::Idle`], discarding any draft.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToolState {
    #[default]
    Idle,
    /// A wall being drawn; `end` follows the pointer
    DrawingWall { start: Point2D, end: Point2D },
    /// An object waiting to be dropped; `ghost` follows the pointer
    PlacingObject {
        object_type: String,
        category: ObjectCategory,
        ghost: Option<Point3D>,
    },
    /// A measurement in progress; `end` follows the pointer
    Measuring { start: Point3D, end: Point3D },
}

impl ToolState {
    pub fn is_idle(&self) -> bool {
        matches!(self, ToolState::Idle)
    }

    /// The draft wall, if one is being drawn.
    pub fn temp_wall(&self) -> Option<(Point2D, Point2D)> {
        match self {
            ToolState::DrawingWall { start, end } => Some((*start, *end)),
            _ => None,
        }
    }

    /// The draft measurement endpoints, if measuring.
    pub fn temp_measurement(&self) -> Option<(Point3D, Point3D)> {
        match self {
            ToolState::Measuring { start, end } => Some((*start, *end)),
            _ => None,
        }
    }
}

/// How the host presents the scene. Not part of history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Plan2d,
    #[default]
    Perspective3d,
    Walk,
}

/// Clamps a host zoom factor to the supported range.
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return 1.0;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}
