//! Undo/redo for the builder state.

use super::BuilderState;

impl BuilderState {
    /// Checkpoints the current room, closing a gesture of uncommitted updates.
    pub fn save_to_history(&mut self) {
        self.checkpoint();
    }

    /// Alias of [`BuilderState::save_to_history`] for drag completion.
    pub fn end_gesture(&mut self) {
        self.checkpoint();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restores the previous snapshot and clears all selection.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(room) => {
                self.current_room = Some(room);
                self.selection.clear();
                tracing::debug!("Undo to entry {:?}", self.history.cursor());
                true
            }
            None => false,
        }
    }

    /// Restores the next snapshot and clears all selection.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(room) => {
                self.current_room = Some(room);
                self.selection.clear();
                tracing::debug!("Redo to entry {:?}", self.history.cursor());
                true
            }
            None => false,
        }
    }
}
