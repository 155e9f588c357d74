use crate::model::{Door, PlacedObject, Room, Wall, Window};
use roomkit_core::{ElementId, ElementKind};

/// Borrowed view of the primarily selected element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectedElement<'a> {
    Wall(&'a Wall),
    Door(&'a Door),
    Window(&'a Window),
    Object(&'a PlacedObject),
}

impl SelectedElement<'_> {
    pub fn id(&self) -> ElementId {
        match self {
            SelectedElement::Wall(w) => w.id,
            SelectedElement::Door(d) => d.id,
            SelectedElement::Window(w) => w.id,
            SelectedElement::Object(o) => o.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            SelectedElement::Wall(_) => ElementKind::Wall,
            SelectedElement::Door(_) => ElementKind::Door,
            SelectedElement::Window(_) => ElementKind::Window,
            SelectedElement::Object(_) => ElementKind::Object,
        }
    }
}

/// Tracks the primary selection and the multi-select list.
///
/// # Selection Model
///
/// - **Primary Selection**: at most one `(kind, id)`; selecting any kind
///   replaces whatever kind was primary before.
/// - **Multiple Selection**: an ordered id list without duplicates, kept
///   independently of the primary selection.
///
/// Neither part is validated against the room here; lookups that resolve
/// the primary selection simply yield nothing for stale ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    primary: Option<(ElementKind, ElementId)>,
    selected_elements: Vec<ElementId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kind and id of the primary selection.
    pub fn primary(&self) -> Option<(ElementKind, ElementId)> {
        self.primary
    }

    /// Id of the primary selection when it is of `kind`.
    pub fn primary_of(&self, kind: ElementKind) -> Option<ElementId> {
        self.primary.filter(|(k, _)| *k == kind).map(|(_, id)| id)
    }

    /// Sets or clears the primary selection for `kind`.
    ///
    /// `None` clears the primary only when it currently holds that kind.
    pub fn select(&mut self, kind: ElementKind, id: Option<ElementId>) {
        match id {
            Some(id) => self.primary = Some((kind, id)),
            None => {
                if self.primary_of(kind).is_some() {
                    self.primary = None;
                }
            }
        }
    }

    pub fn clear_primary(&mut self) {
        self.primary = None;
    }

    /// Clears primary and multi-selection.
    pub fn clear(&mut self) {
        self.primary = None;
        self.selected_elements.clear();
    }

    pub fn selected_elements(&self) -> &[ElementId] {
        &self.selected_elements
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected_elements.contains(&id)
            || self.primary.is_some_and(|(_, primary)| primary == id)
    }

    pub fn add(&mut self, id: ElementId) {
        if !self.selected_elements.contains(&id) {
            self.selected_elements.push(id);
        }
    }

    pub fn remove(&mut self, id: ElementId) {
        self.selected_elements.retain(|s| *s != id);
    }

    pub fn toggle(&mut self, id: ElementId) {
        if self.selected_elements.contains(&id) {
            self.remove(id);
        } else {
            self.selected_elements.push(id);
        }
    }

    /// Replaces the multi-selection with `ids`, dropping duplicates.
    pub fn set_multi(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        self.selected_elements.clear();
        for id in ids {
            self.add(id);
        }
    }

    pub fn clear_multi(&mut self) {
        self.selected_elements.clear();
    }

    /// Removes every reference to `id`, primary and multi.
    pub fn forget(&mut self, id: ElementId) {
        if self.primary.is_some_and(|(_, primary)| primary == id) {
            self.primary = None;
        }
        self.remove(id);
    }

    /// Resolves the primary selection against `room`.
    pub fn resolve<'a>(&self, room: &'a Room) -> Option<SelectedElement<'a>> {
        let (kind, id) = self.primary?;
        match kind {
            ElementKind::Wall => room.wall(id).map(SelectedElement::Wall),
            ElementKind::Door => room.door(id).map(SelectedElement::Door),
            ElementKind::Window => room.window(id).map(SelectedElement::Window),
            ElementKind::Object => room.object(id).map(SelectedElement::Object),
        }
    }
}
