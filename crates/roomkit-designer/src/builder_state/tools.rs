//! Tool switching, draft states and pointer input.

use super::BuilderState;
use crate::geometry::{self, distance_2d, distance_3d, opening_rotation, project_onto_segment};
use crate::hit_test::{hit_test, Hit};
use crate::model::{
    Door, Material, Measurement, ObjectCategory, OpeningKind, PlacedObject, Wall, WallOpening,
    Window,
};
use crate::tools::{Tool, ToolState, MIN_WALL_LENGTH};
use roomkit_core::{ElementId, ElementKind, Point2D};

/// Absorbs float error when a snapped wall lands exactly on the minimum.
/// Unsnapped drafts are compared exactly.
const LENGTH_EPSILON: f64 = 1e-9;

impl BuilderState {
    /// Switches tool. Any draft in progress is discarded.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool_state = ToolState::Idle;
        self.tool = tool;
        tracing::debug!("Tool set to {}", tool);
    }

    /// Snaps to the grid when snapping is enabled.
    pub fn snap_point(&self, point: Point2D) -> Point2D {
        if self.preferences.snap_to_grid {
            geometry::snap(point, self.preferences.grid_size)
        } else {
            point
        }
    }

    /// Element under `point`, honoring hidden flags and the current zoom.
    pub fn hit_test(&self, point: Point2D) -> Option<Hit> {
        let room = self.current_room.as_ref()?;
        hit_test(room, point, self.zoom, &self.organization.hidden)
    }

    /// Escape: abandons the current draft, or clears selection when idle.
    pub fn cancel_current_action(&mut self) {
        match self.tool_state {
            ToolState::Idle => self.clear_selection(),
            ToolState::DrawingWall { .. } => self.cancel_drawing_wall(),
            ToolState::PlacingObject { .. } => self.cancel_placement(),
            ToolState::Measuring { .. } => self.cancel_measurement(),
        }
    }

    // Wall tool

    pub fn start_drawing_wall(&mut self, point: Point2D) {
        if self.current_room.is_none() {
            tracing::trace!("No room to draw in");
            return;
        }
        let start = self.snap_point(point);
        self.tool = Tool::Wall;
        self.tool_state = ToolState::DrawingWall { start, end: start };
    }

    pub fn update_temp_wall(&mut self, point: Point2D) {
        let snapped = self.snap_point(point);
        if let ToolState::DrawingWall { end, .. } = &mut self.tool_state {
            *end = snapped;
        }
    }

    /// Commits the draft wall and continues drawing from its end.
    ///
    /// A draft shorter than [`MIN_WALL_LENGTH`] is discarded and the tool
    /// returns to idle.
    pub fn finish_drawing_wall(&mut self) -> Option<ElementId> {
        let ToolState::DrawingWall { start, end } = self.tool_state else {
            return None;
        };
        let slack = if self.preferences.snap_to_grid {
            LENGTH_EPSILON
        } else {
            0.0
        };
        if distance_2d(start, end) + slack < MIN_WALL_LENGTH {
            tracing::trace!("Discarding wall shorter than {} m", MIN_WALL_LENGTH);
            self.tool_state = ToolState::Idle;
            return None;
        }
        let wall = Wall::new(
            start,
            end,
            self.preferences.default_wall_height,
            self.preferences.default_wall_thickness,
        );
        match self.add_wall(wall) {
            Some(id) => {
                self.tool_state = ToolState::DrawingWall { start: end, end };
                Some(id)
            }
            None => {
                self.tool_state = ToolState::Idle;
                None
            }
        }
    }

    pub fn cancel_drawing_wall(&mut self) {
        if matches!(self.tool_state, ToolState::DrawingWall { .. }) {
            self.tool_state = ToolState::Idle;
        }
    }

    // Door and window tools

    /// Places a default door where `point` hits a wall.
    pub fn place_door(&mut self, point: Point2D) -> Option<ElementId> {
        self.place_opening(OpeningKind::Door, point)
    }

    /// Places a default window where `point` hits a wall.
    pub fn place_window(&mut self, point: Point2D) -> Option<ElementId> {
        self.place_opening(OpeningKind::Window, point)
    }

    fn place_opening(&mut self, kind: OpeningKind, point: Point2D) -> Option<ElementId> {
        let hit = self.hit_test(point)?;
        if hit.kind != ElementKind::Wall {
            tracing::trace!("Openings can only be placed on walls");
            return None;
        }
        if self.organization.is_locked(hit.id) {
            tracing::trace!("Wall {} is locked", hit.id);
            return None;
        }
        let room = self.current_room.as_mut()?;
        let wall = room.wall_mut(hit.id)?;
        let rotation = opening_rotation(wall);
        let along = project_onto_segment(point, wall.start, wall.end) * geometry::wall_length(wall);

        let id = match kind {
            OpeningKind::Door => {
                let mut door = Door::new(point.to_3d(0.0), rotation);
                door.wall_id = Some(wall.id);
                let opening = WallOpening {
                    id: door.id,
                    kind,
                    position: along,
                    width: door.width,
                    height: door.height,
                    from_floor: 0.0,
                };
                let id = door.id;
                wall.openings.push(opening);
                room.doors.push(door);
                id
            }
            OpeningKind::Window => {
                let mut window =
                    Window::new(point.to_3d(Window::DEFAULT_SILL_HEIGHT), rotation);
                window.wall_id = Some(wall.id);
                let opening = WallOpening {
                    id: window.id,
                    kind,
                    position: along,
                    width: window.width,
                    height: window.height,
                    from_floor: Window::DEFAULT_SILL_HEIGHT,
                };
                let id = window.id;
                wall.openings.push(opening);
                room.windows.push(window);
                id
            }
        };
        tracing::debug!("Placed {:?} {} on wall {}", kind, id, hit.id);
        self.checkpoint();
        Some(id)
    }

    // Object tool

    /// Enters placement mode for a catalog object.
    pub fn start_placing_object(&mut self, object_type: impl Into<String>, category: ObjectCategory) {
        self.tool = Tool::Object;
        self.tool_state = ToolState::PlacingObject {
            object_type: object_type.into(),
            category,
            ghost: None,
        };
    }

    pub fn update_placement(&mut self, point: Point2D) {
        let snapped = self.snap_point(point).to_3d(0.0);
        if let ToolState::PlacingObject { ghost, .. } = &mut self.tool_state {
            *ghost = Some(snapped);
        }
    }

    /// Drops an object at the ghost position. Placement mode stays active.
    pub fn finish_placement(&mut self) -> Option<ElementId> {
        let ToolState::PlacingObject {
            object_type,
            category,
            ghost: Some(position),
        } = &self.tool_state
        else {
            return None;
        };
        let object = PlacedObject::new(object_type.clone(), *category, *position);
        self.add_object(object)
    }

    /// Leaves placement mode and returns to the select tool.
    pub fn cancel_placement(&mut self) {
        self.tool_state = ToolState::Idle;
        self.tool = Tool::Select;
    }

    // Measure tool

    pub fn start_measurement(&mut self, point: Point2D) {
        let start = self.snap_point(point).to_3d(0.0);
        self.tool = Tool::Measure;
        self.tool_state = ToolState::Measuring { start, end: start };
    }

    pub fn update_measurement(&mut self, point: Point2D) {
        let snapped = self.snap_point(point).to_3d(0.0);
        if let ToolState::Measuring { end, .. } = &mut self.tool_state {
            *end = snapped;
        }
    }

    /// Commits the draft measurement when it has a length, then goes idle.
    pub fn finish_measurement(&mut self) -> Option<ElementId> {
        let ToolState::Measuring { start, end } = self.tool_state else {
            return None;
        };
        self.tool_state = ToolState::Idle;
        if distance_3d(start, end) <= 0.0 {
            return None;
        }
        let measurement = Measurement::new(start, end);
        let id = measurement.id;
        tracing::debug!("Measured {:.3} m", measurement.distance);
        self.measurements.push(measurement);
        Some(id)
    }

    pub fn cancel_measurement(&mut self) {
        if matches!(self.tool_state, ToolState::Measuring { .. }) {
            self.tool_state = ToolState::Idle;
        }
    }

    pub fn remove_measurement(&mut self, id: ElementId) -> bool {
        let before = self.measurements.len();
        self.measurements.retain(|m| m.id != id);
        self.measurements.len() != before
    }

    pub fn clear_measurements(&mut self) {
        self.measurements.clear();
    }

    // Material tool

    /// Applies `material` to the primary selection and checkpoints.
    pub fn apply_material_to_selected(&mut self, material: Material) -> bool {
        let Some((kind, id)) = self.selection.primary() else {
            return false;
        };
        if self.organization.is_locked(id) {
            tracing::trace!("Element {} is locked", id);
            return false;
        }
        let Some(room) = self.current_room.as_mut() else {
            return false;
        };
        let slot = match kind {
            ElementKind::Wall => room.wall_mut(id).map(|w| &mut w.material),
            ElementKind::Door => room.door_mut(id).map(|d| &mut d.material),
            ElementKind::Window => room.window_mut(id).map(|w| &mut w.material),
            ElementKind::Object => room.object_mut(id).map(|o| &mut o.material),
        };
        let Some(slot) = slot else {
            return false;
        };
        *slot = Some(material);
        self.checkpoint();
        true
    }

    // Pointer input

    /// Routes a click on the floor plan to the active tool.
    pub fn pointer_down(&mut self, point: Point2D) {
        match self.tool {
            Tool::Select => match self.hit_test(point) {
                Some(hit) => self.selection.select(hit.kind, Some(hit.id)),
                None => self.clear_selection(),
            },
            Tool::Wall => {
                if matches!(self.tool_state, ToolState::DrawingWall { .. }) {
                    self.update_temp_wall(point);
                    self.finish_drawing_wall();
                } else {
                    self.start_drawing_wall(point);
                }
            }
            Tool::Door => {
                self.place_door(point);
            }
            Tool::Window => {
                self.place_window(point);
            }
            Tool::Object => {
                if matches!(self.tool_state, ToolState::PlacingObject { .. }) {
                    self.update_placement(point);
                    self.finish_placement();
                } else {
                    tracing::trace!("No object chosen for placement");
                }
            }
            Tool::Measure => {
                if matches!(self.tool_state, ToolState::Measuring { .. }) {
                    self.update_measurement(point);
                    self.finish_measurement();
                } else {
                    self.start_measurement(point);
                }
            }
            Tool::Material => {
                if let Some(hit) = self.hit_test(point) {
                    self.selection.select(hit.kind, Some(hit.id));
                    if let Some(material) = self.default_material.clone() {
                        self.apply_material_to_selected(material);
                    }
                }
            }
        }
    }

    /// Updates whichever draft follows the pointer.
    pub fn pointer_move(&mut self, point: Point2D) {
        match self.tool_state {
            ToolState::DrawingWall { .. } => self.update_temp_wall(point),
            ToolState::PlacingObject { .. } => self.update_placement(point),
            ToolState::Measuring { .. } => self.update_measurement(point),
            ToolState::Idle => {}
        }
    }
}
