//! Copy, paste and duplicate for the builder state.

use super::BuilderState;
use crate::clipboard::ClipboardItem;
use crate::selection_manager::SelectedElement;
use roomkit_core::ElementId;

impl BuilderState {
    /// Copies the primary selection into the clipboard slot.
    pub fn copy(&mut self) -> bool {
        let item = match self.selected_element() {
            Some(SelectedElement::Wall(wall)) => ClipboardItem::Wall(wall.clone()),
            Some(SelectedElement::Door(door)) => ClipboardItem::Door(door.clone()),
            Some(SelectedElement::Window(window)) => ClipboardItem::Window(window.clone()),
            Some(SelectedElement::Object(object)) => ClipboardItem::Object(object.clone()),
            None => return false,
        };
        tracing::debug!("Copied {} {}", item.kind(), item.id());
        self.clipboard.set(item);
        true
    }

    /// Inserts an offset copy of the clipboard item, selects it and checkpoints.
    pub fn paste(&mut self) -> Option<ElementId> {
        let item = self.clipboard.get()?.offset_copy();
        let room = self.current_room.as_mut()?;
        let kind = item.kind();
        let id = item.id();
        match item {
            ClipboardItem::Wall(wall) => room.walls.push(wall),
            ClipboardItem::Door(door) => room.doors.push(door),
            ClipboardItem::Window(window) => room.windows.push(window),
            ClipboardItem::Object(object) => room.objects.push(object),
        }
        self.selection.select(kind, Some(id));
        self.checkpoint();
        tracing::debug!("Pasted {} {}", kind, id);
        Some(id)
    }

    /// Copy followed by paste.
    pub fn duplicate(&mut self) -> Option<ElementId> {
        if !self.copy() {
            return None;
        }
        self.paste()
    }
}
