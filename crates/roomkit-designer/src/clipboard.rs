//! Single-slot element clipboard.

use crate::model::{Door, PlacedObject, Wall, Window};
use roomkit_core::{new_element_id, ElementId, ElementKind};

/// Offset applied on both plan axes when pasting (meters).
pub const PASTE_OFFSET: f64 = 0.5;

/// A copied element.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardItem {
    Wall(Wall),
    Door(Door),
    Window(Window),
    Object(PlacedObject),
}

impl ClipboardItem {
    pub fn kind(&self) -> ElementKind {
        match self {
            ClipboardItem::Wall(_) => ElementKind::Wall,
            ClipboardItem::Door(_) => ElementKind::Door,
            ClipboardItem::Window(_) => ElementKind::Window,
            ClipboardItem::Object(_) => ElementKind::Object,
        }
    }

    pub fn id(&self) -> ElementId {
        match self {
            ClipboardItem::Wall(w) => w.id,
            ClipboardItem::Door(d) => d.id,
            ClipboardItem::Window(w) => w.id,
            ClipboardItem::Object(o) => o.id,
        }
    }

    /// A fresh copy with a new id, shifted by [`PASTE_OFFSET`] on the plan.
    ///
    /// Pasted walls carry no openings.
    pub fn offset_copy(&self) -> ClipboardItem {
        match self {
            ClipboardItem::Wall(wall) => {
                let mut wall = wall.clone();
                wall.id = new_element_id();
                wall.start.x += PASTE_OFFSET;
                wall.start.y += PASTE_OFFSET;
                wall.end.x += PASTE_OFFSET;
                wall.end.y += PASTE_OFFSET;
                wall.openings.clear();
                ClipboardItem::Wall(wall)
            }
            ClipboardItem::Door(door) => {
                let mut door = door.clone();
                door.id = new_element_id();
                door.position.x += PASTE_OFFSET;
                door.position.z += PASTE_OFFSET;
                ClipboardItem::Door(door)
            }
            ClipboardItem::Window(window) => {
                let mut window = window.clone();
                window.id = new_element_id();
                window.position.x += PASTE_OFFSET;
                window.position.z += PASTE_OFFSET;
                ClipboardItem::Window(window)
            }
            ClipboardItem::Object(object) => {
                let mut object = object.clone();
                object.id = new_element_id();
                object.position.x += PASTE_OFFSET;
                object.position.z += PASTE_OFFSET;
                ClipboardItem::Object(object)
            }
        }
    }
}

/// Holds at most one copied element; the last copy wins.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    item: Option<ClipboardItem>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, item: ClipboardItem) {
        self.item = Some(item);
    }

    pub fn get(&self) -> Option<&ClipboardItem> {
        self.item.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    pub fn clear(&mut self) {
        self.item = None;
    }
}
