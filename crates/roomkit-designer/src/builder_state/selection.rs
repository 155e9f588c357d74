//! Selection, locking, grouping and layer operations for the builder state.

use super::BuilderState;
use crate::model::{Door, PlacedObject, Wall, Window};
use crate::selection_manager::SelectedElement;
use roomkit_core::{ElementId, ElementKind};

impl BuilderState {
    pub fn select(&mut self, kind: ElementKind, id: Option<ElementId>) {
        self.selection.select(kind, id);
    }

    pub fn select_wall(&mut self, id: Option<ElementId>) {
        self.selection.select(ElementKind::Wall, id);
    }

    pub fn select_door(&mut self, id: Option<ElementId>) {
        self.selection.select(ElementKind::Door, id);
    }

    pub fn select_window(&mut self, id: Option<ElementId>) {
        self.selection.select(ElementKind::Window, id);
    }

    pub fn select_object(&mut self, id: Option<ElementId>) {
        self.selection.select(ElementKind::Object, id);
    }

    /// Clears the primary selection and the multi-select list.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The primary selection resolved against the current room.
    pub fn selected_element(&self) -> Option<SelectedElement<'_>> {
        self.selection.resolve(self.current_room.as_ref()?)
    }

    pub fn selected_wall(&self) -> Option<&Wall> {
        match self.selected_element()? {
            SelectedElement::Wall(wall) => Some(wall),
            _ => None,
        }
    }

    pub fn selected_door(&self) -> Option<&Door> {
        match self.selected_element()? {
            SelectedElement::Door(door) => Some(door),
            _ => None,
        }
    }

    pub fn selected_window(&self) -> Option<&Window> {
        match self.selected_element()? {
            SelectedElement::Window(window) => Some(window),
            _ => None,
        }
    }

    pub fn selected_object(&self) -> Option<&PlacedObject> {
        match self.selected_element()? {
            SelectedElement::Object(object) => Some(object),
            _ => None,
        }
    }

    // Multi-select

    pub fn selected_elements(&self) -> &[ElementId] {
        self.selection.selected_elements()
    }

    pub fn add_to_selection(&mut self, id: ElementId) {
        self.selection.add(id);
    }

    pub fn remove_from_selection(&mut self, id: ElementId) {
        self.selection.remove(id);
    }

    pub fn toggle_in_selection(&mut self, id: ElementId) {
        self.selection.toggle(id);
    }

    /// Puts every element of the current room in the multi-select list.
    pub fn select_all(&mut self) {
        let ids = self
            .current_room
            .as_ref()
            .map(|r| r.element_ids())
            .unwrap_or_default();
        self.selection.set_multi(ids);
    }

    pub fn clear_multi_selection(&mut self) {
        self.selection.clear_multi();
    }

    /// Removes the primary and every multi-selected element in one checkpoint.
    ///
    /// Locked elements are skipped and stay selected.
    pub fn delete_selected(&mut self) -> usize {
        let mut targets: Vec<ElementId> = Vec::new();
        if let Some((_, id)) = self.selection.primary() {
            targets.push(id);
        }
        for id in self.selection.selected_elements() {
            if !targets.contains(id) {
                targets.push(*id);
            }
        }

        let mut removed = 0;
        for id in targets {
            if self.organization.is_locked(id) {
                tracing::trace!("Skipping locked element {}", id);
                continue;
            }
            if self.remove_element(id) {
                removed += 1;
            }
        }
        if removed > 0 {
            self.checkpoint();
            tracing::debug!("Deleted {} selected elements", removed);
        }
        removed
    }

    // Locks and visibility

    pub fn is_locked(&self, id: ElementId) -> bool {
        self.organization.is_locked(id)
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.organization.is_hidden(id)
    }

    /// Flips the lock flag, returning the new state.
    pub fn toggle_lock(&mut self, id: ElementId) -> bool {
        self.organization.toggle_lock(id)
    }

    pub fn set_locked(&mut self, id: ElementId, locked: bool) {
        self.organization.set_locked(id, locked);
    }

    /// Flips the hidden flag, returning whether the element is now hidden.
    pub fn toggle_visibility(&mut self, id: ElementId) -> bool {
        self.organization.toggle_visibility(id)
    }

    // Groups

    pub fn create_group(
        &mut self,
        name: impl Into<String>,
        element_ids: &[ElementId],
    ) -> Option<ElementId> {
        let id = self.organization.create_group(name, element_ids)?;
        tracing::debug!("Created group {}", id);
        Some(id)
    }

    /// Groups the multi-selected elements. Needs at least two.
    pub fn group_selected(&mut self, name: impl Into<String>) -> Option<ElementId> {
        let ids = self.selection.selected_elements().to_vec();
        if ids.len() < 2 {
            tracing::trace!("Grouping needs at least two selected elements");
            return None;
        }
        self.create_group(name, &ids)
    }

    pub fn ungroup(&mut self, group_id: ElementId) -> bool {
        self.organization.ungroup(group_id)
    }

    pub fn rename_group(&mut self, group_id: ElementId, name: impl Into<String>) -> bool {
        self.organization.rename_group(group_id, name)
    }

    pub fn toggle_group_visibility(&mut self, group_id: ElementId) -> bool {
        self.organization.toggle_group_visibility(group_id)
    }

    pub fn toggle_group_lock(&mut self, group_id: ElementId) -> bool {
        self.organization.toggle_group_lock(group_id)
    }

    /// Replaces the multi-selection with the group's members.
    pub fn select_group(&mut self, group_id: ElementId) -> bool {
        let Some(group) = self.organization.group(group_id) else {
            return false;
        };
        let members = group.element_ids.clone();
        self.selection.set_multi(members);
        true
    }

    // Layers

    pub fn add_layer(&mut self, name: impl Into<String>) -> ElementId {
        self.organization.add_layer(name)
    }

    pub fn remove_layer(&mut self, layer_id: ElementId) -> bool {
        self.organization.remove_layer(layer_id)
    }

    pub fn rename_layer(&mut self, layer_id: ElementId, name: impl Into<String>) -> bool {
        self.organization.rename_layer(layer_id, name)
    }

    pub fn set_active_layer(&mut self, layer_id: ElementId) -> bool {
        self.organization.set_active_layer(layer_id)
    }

    pub fn toggle_layer_visibility(&mut self, layer_id: ElementId) -> bool {
        self.organization.toggle_layer_visibility(layer_id)
    }

    pub fn toggle_layer_lock(&mut self, layer_id: ElementId) -> bool {
        self.organization.toggle_layer_lock(layer_id)
    }

    pub fn set_layer_color(&mut self, layer_id: ElementId, color: impl Into<String>) -> bool {
        self.organization.set_layer_color(layer_id, color)
    }
}
