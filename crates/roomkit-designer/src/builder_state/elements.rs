//! Room lifecycle, element mutation and derived geometry.

use super::BuilderState;
use crate::geometry;
use crate::model::{
    Door, DoorUpdate, Material, ObjectUpdate, PlacedObject, Room, Wall, WallUpdate, Window,
    WindowUpdate,
};
use crate::tools::ToolState;
use roomkit_core::{ElementId, ElementKind};

impl BuilderState {
    /// Starts a fresh, empty room and resets history to it.
    pub fn create_new_room(&mut self, name: impl Into<String>) -> ElementId {
        let room = Room::new(name);
        let id = room.id;
        tracing::info!("Created room '{}'", room.name);
        self.set_current_room(Some(room));
        id
    }

    /// Replaces the current room. History restarts from it.
    pub fn set_current_room(&mut self, room: Option<Room>) {
        match &room {
            Some(room) => self.history.reset_with(room),
            None => self.history.clear(),
        }
        self.current_room = room;
        self.selection.clear();
        self.tool_state = ToolState::Idle;
    }

    fn can_edit(&self, id: ElementId) -> bool {
        if self.organization.is_locked(id) {
            tracing::trace!("Element {} is locked", id);
            return false;
        }
        true
    }

    // Walls

    /// Appends a wall and checkpoints. Returns `None` without a room.
    pub fn add_wall(&mut self, wall: Wall) -> Option<ElementId> {
        let room = self.current_room.as_mut()?;
        let id = wall.id;
        room.walls.push(wall);
        tracing::debug!("Added wall {}", id);
        self.checkpoint();
        Some(id)
    }

    /// Applies a sparse update. Does not checkpoint.
    pub fn update_wall(&mut self, id: ElementId, update: WallUpdate) -> bool {
        if !self.can_edit(id) {
            return false;
        }
        match self.current_room.as_mut().and_then(|r| r.wall_mut(id)) {
            Some(wall) => {
                update.apply_to(wall);
                true
            }
            None => false,
        }
    }

    /// Removes a wall. Doors and windows referencing it are left alone.
    pub fn remove_wall(&mut self, id: ElementId) -> bool {
        self.remove_checked(id, ElementKind::Wall)
    }

    // Doors

    pub fn add_door(&mut self, door: Door) -> Option<ElementId> {
        let room = self.current_room.as_mut()?;
        let id = door.id;
        room.doors.push(door);
        tracing::debug!("Added door {}", id);
        self.checkpoint();
        Some(id)
    }

    pub fn update_door(&mut self, id: ElementId, update: DoorUpdate) -> bool {
        if !self.can_edit(id) {
            return false;
        }
        match self.current_room.as_mut().and_then(|r| r.door_mut(id)) {
            Some(door) => {
                update.apply_to(door);
                true
            }
            None => false,
        }
    }

    pub fn remove_door(&mut self, id: ElementId) -> bool {
        self.remove_checked(id, ElementKind::Door)
    }

    // Windows

    pub fn add_window(&mut self, window: Window) -> Option<ElementId> {
        let room = self.current_room.as_mut()?;
        let id = window.id;
        room.windows.push(window);
        tracing::debug!("Added window {}", id);
        self.checkpoint();
        Some(id)
    }

    pub fn update_window(&mut self, id: ElementId, update: WindowUpdate) -> bool {
        if !self.can_edit(id) {
            return false;
        }
        match self.current_room.as_mut().and_then(|r| r.window_mut(id)) {
            Some(window) => {
                update.apply_to(window);
                true
            }
            None => false,
        }
    }

    pub fn remove_window(&mut self, id: ElementId) -> bool {
        self.remove_checked(id, ElementKind::Window)
    }

    // Objects

    pub fn add_object(&mut self, object: PlacedObject) -> Option<ElementId> {
        let room = self.current_room.as_mut()?;
        let id = object.id;
        room.objects.push(object);
        tracing::debug!("Added object {}", id);
        self.checkpoint();
        Some(id)
    }

    pub fn update_object(&mut self, id: ElementId, update: ObjectUpdate) -> bool {
        if !self.can_edit(id) {
            return false;
        }
        match self.current_room.as_mut().and_then(|r| r.object_mut(id)) {
            Some(object) => {
                update.apply_to(object);
                true
            }
            None => false,
        }
    }

    pub fn remove_object(&mut self, id: ElementId) -> bool {
        self.remove_checked(id, ElementKind::Object)
    }

    fn remove_checked(&mut self, id: ElementId, kind: ElementKind) -> bool {
        if !self.can_edit(id) {
            return false;
        }
        let removed = self.current_room.as_ref().and_then(|r| r.kind_of(id)) == Some(kind)
            && self.remove_element(id);
        if removed {
            self.checkpoint();
        }
        removed
    }

    /// Removes any element with `id` and drops selection references to it.
    /// Does not check locks or checkpoint.
    pub(crate) fn remove_element(&mut self, id: ElementId) -> bool {
        let Some(room) = self.current_room.as_mut() else {
            return false;
        };
        let Some(kind) = room.kind_of(id) else {
            return false;
        };
        match kind {
            ElementKind::Wall => room.walls.retain(|w| w.id != id),
            ElementKind::Door => {
                room.doors.retain(|d| d.id != id);
                room.forget_opening(id);
            }
            ElementKind::Window => {
                room.windows.retain(|w| w.id != id);
                room.forget_opening(id);
            }
            ElementKind::Object => room.objects.retain(|o| o.id != id),
        }
        self.selection.forget(id);
        tracing::debug!("Removed {} {}", kind, id);
        true
    }

    // Room surfaces

    pub fn set_ceiling_height(&mut self, height: f64) -> bool {
        if !(height.is_finite() && height > 0.0) {
            tracing::trace!("Ignoring ceiling height {}", height);
            return false;
        }
        let Some(room) = self.current_room.as_mut() else {
            return false;
        };
        room.ceiling.height = height;
        self.checkpoint();
        true
    }

    pub fn set_floor_material(&mut self, material: Option<Material>) -> bool {
        let Some(room) = self.current_room.as_mut() else {
            return false;
        };
        room.floor.material = material;
        self.checkpoint();
        true
    }

    pub fn set_ceiling_material(&mut self, material: Option<Material>) -> bool {
        let Some(room) = self.current_room.as_mut() else {
            return false;
        };
        room.ceiling.material = material;
        self.checkpoint();
        true
    }

    // Derived geometry

    /// Floor area enclosed by the wall endpoints, 0 without a room.
    pub fn calculate_room_area(&self) -> f64 {
        self.current_room
            .as_ref()
            .map(|r| geometry::polygon_area(&geometry::room_outline(&r.walls)))
            .unwrap_or(0.0)
    }

    /// Total wall length, 0 without a room.
    pub fn calculate_room_perimeter(&self) -> f64 {
        self.current_room
            .as_ref()
            .map(|r| geometry::polygon_perimeter(&r.walls))
            .unwrap_or(0.0)
    }

    pub fn wall_length(&self, id: ElementId) -> Option<f64> {
        self.current_room
            .as_ref()
            .and_then(|r| r.wall(id))
            .map(geometry::wall_length)
    }
}
