//! Groups, layers and the lock/hidden sets.
//!
//! Organization state lives beside the room rather than inside it, so undo
//! and redo never touch it. It is serialized with the project document.

use roomkit_core::{new_element_id, ElementId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const DEFAULT_LAYER_NAME: &str = "Layer 1";
const DEFAULT_LAYER_COLOR: &str = "#3b82f6";

fn default_true() -> bool {
    true
}

fn default_layer_color() -> String {
    DEFAULT_LAYER_COLOR.to_string()
}

/// A named set of elements that can be hidden, locked or selected together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default = "new_element_id")]
    pub id: ElementId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub element_ids: Vec<ElementId>,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default)]
    pub is_locked: bool,
}

/// A named drawing layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    #[serde(default = "new_element_id")]
    pub id: ElementId,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default = "default_layer_color")]
    pub color: String,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_element_id(),
            name: name.into(),
            is_visible: true,
            is_locked: false,
            color: default_layer_color(),
        }
    }
}

/// Group, layer and per-element flag state.
///
/// At least one layer always exists and `active_layer` names one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub active_layer: Option<ElementId>,
    #[serde(default)]
    pub locked: BTreeSet<ElementId>,
    #[serde(default)]
    pub hidden: BTreeSet<ElementId>,
}

impl Default for Organization {
    fn default() -> Self {
        let layer = Layer::new(DEFAULT_LAYER_NAME);
        Self {
            groups: Vec::new(),
            active_layer: Some(layer.id),
            layers: vec![layer],
            locked: BTreeSet::new(),
            hidden: BTreeSet::new(),
        }
    }
}

impl Organization {
    /// Restores the layer invariants after decoding foreign data.
    pub fn normalize(&mut self) {
        if self.layers.is_empty() {
            self.layers.push(Layer::new(DEFAULT_LAYER_NAME));
        }
        let active_ok = self
            .active_layer
            .is_some_and(|id| self.layers.iter().any(|l| l.id == id));
        if !active_ok {
            self.active_layer = self.layers.first().map(|l| l.id);
        }
    }

    pub fn is_locked(&self, id: ElementId) -> bool {
        self.locked.contains(&id)
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.hidden.contains(&id)
    }

    /// Flips the lock flag and returns the new state.
    pub fn toggle_lock(&mut self, id: ElementId) -> bool {
        if !self.locked.remove(&id) {
            self.locked.insert(id);
            return true;
        }
        false
    }

    pub fn set_locked(&mut self, id: ElementId, locked: bool) {
        if locked {
            self.locked.insert(id);
        } else {
            self.locked.remove(&id);
        }
    }

    /// Flips the hidden flag and returns whether the element is now hidden.
    pub fn toggle_visibility(&mut self, id: ElementId) -> bool {
        if !self.hidden.remove(&id) {
            self.hidden.insert(id);
            return true;
        }
        false
    }

    // Groups

    pub fn group(&self, id: ElementId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    fn group_mut(&mut self, id: ElementId) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    /// Creates a visible, unlocked group. Duplicate ids are collapsed.
    ///
    /// Returns `None` when `element_ids` is empty.
    pub fn create_group(
        &mut self,
        name: impl Into<String>,
        element_ids: &[ElementId],
    ) -> Option<ElementId> {
        let mut members: Vec<ElementId> = Vec::with_capacity(element_ids.len());
        for id in element_ids {
            if !members.contains(id) {
                members.push(*id);
            }
        }
        if members.is_empty() {
            return None;
        }
        let group = Group {
            id: new_element_id(),
            name: name.into(),
            element_ids: members,
            is_visible: true,
            is_locked: false,
        };
        let id = group.id;
        self.groups.push(group);
        Some(id)
    }

    /// Removes the group record. Member lock/hidden flags stay as they are.
    pub fn ungroup(&mut self, id: ElementId) -> bool {
        let before = self.groups.len();
        self.groups.retain(|g| g.id != id);
        self.groups.len() != before
    }

    pub fn rename_group(&mut self, id: ElementId, name: impl Into<String>) -> bool {
        match self.group_mut(id) {
            Some(group) => {
                group.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Flips the group's visibility and applies it to every member.
    pub fn toggle_group_visibility(&mut self, id: ElementId) -> bool {
        let Some(group) = self.group_mut(id) else {
            return false;
        };
        group.is_visible = !group.is_visible;
        let visible = group.is_visible;
        let members = group.element_ids.clone();
        for member in members {
            if visible {
                self.hidden.remove(&member);
            } else {
                self.hidden.insert(member);
            }
        }
        true
    }

    /// Flips the group's lock and applies it to every member.
    pub fn toggle_group_lock(&mut self, id: ElementId) -> bool {
        let Some(group) = self.group_mut(id) else {
            return false;
        };
        group.is_locked = !group.is_locked;
        let locked = group.is_locked;
        let members = group.element_ids.clone();
        for member in members {
            self.set_locked(member, locked);
        }
        true
    }

    // Layers

    pub fn layer(&self, id: ElementId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    fn layer_mut(&mut self, id: ElementId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    pub fn add_layer(&mut self, name: impl Into<String>) -> ElementId {
        let layer = Layer::new(name);
        let id = layer.id;
        self.layers.push(layer);
        id
    }

    /// Removes a layer unless it is the last one.
    ///
    /// When the active layer is removed the first remaining layer becomes active.
    pub fn remove_layer(&mut self, id: ElementId) -> bool {
        if self.layers.len() <= 1 || self.layer(id).is_none() {
            return false;
        }
        self.layers.retain(|l| l.id != id);
        if self.active_layer == Some(id) {
            self.active_layer = self.layers.first().map(|l| l.id);
        }
        true
    }

    pub fn rename_layer(&mut self, id: ElementId, name: impl Into<String>) -> bool {
        match self.layer_mut(id) {
            Some(layer) => {
                layer.name = name.into();
                true
            }
            None => false,
        }
    }

    pub fn set_active_layer(&mut self, id: ElementId) -> bool {
        if self.layer(id).is_none() {
            return false;
        }
        self.active_layer = Some(id);
        true
    }

    pub fn toggle_layer_visibility(&mut self, id: ElementId) -> bool {
        match self.layer_mut(id) {
            Some(layer) => {
                layer.is_visible = !layer.is_visible;
                true
            }
            None => false,
        }
    }

    pub fn toggle_layer_lock(&mut self, id: ElementId) -> bool {
        match self.layer_mut(id) {
            Some(layer) => {
                layer.is_locked = !layer.is_locked;
                true
            }
            None => false,
        }
    }

    pub fn set_layer_color(&mut self, id: ElementId, color: impl Into<String>) -> bool {
        match self.layer_mut(id) {
            Some(layer) => {
                layer.color = color.into();
                true
            }
            None => false,
        }
    }
}
