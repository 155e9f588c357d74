//! Undo/redo history of whole-room snapshots.
//!
//! The manager keeps a linear list of [`HistoryEntry`] values and a cursor.
//! The entry under the cursor always equals the room the editor currently
//! shows after an undo or redo. Saving while the cursor is not at the tail
//! discards the redo branch.

use crate::model::Room;
use chrono::{DateTime, Utc};

/// Default number of snapshots retained.
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// A timestamped deep copy of the room.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub room: Room,
}

impl HistoryEntry {
    fn capture(room: &Room) -> Self {
        Self {
            timestamp: Utc::now(),
            room: room.clone(),
        }
    }
}

/// Linear snapshot history with bounded length.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    entries: Vec<HistoryEntry>,
    /// Index of the entry matching the current room; meaningless when empty
    cursor: usize,
    max_entries: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl HistoryManager {
    /// Creates an empty history retaining at most `max_entries` snapshots.
    ///
    /// A limit of zero is treated as one.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// Records a snapshot of `room` as the newest entry.
    ///
    /// Any entries after the cursor are dropped first. When the list grows
    /// past the limit the oldest entry is evicted.
    pub fn save(&mut self, room: &Room) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(HistoryEntry::capture(room));
        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len() - 1;
        tracing::trace!("History saved: {} entries, cursor {}", self.entries.len(), self.cursor);
    }

    /// Steps back one entry and returns its room.
    pub fn undo(&mut self) -> Option<Room> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].room.clone())
    }

    /// Steps forward one entry and returns its room.
    pub fn redo(&mut self) -> Option<Room> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].room.clone())
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.cursor + 1 < self.entries.len()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// Replaces the history with a single baseline snapshot of `room`.
    pub fn reset_with(&mut self, room: &Room) {
        self.clear();
        self.save(room);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry, `None` when empty.
    pub fn cursor(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.cursor)
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// The entry matching the current room.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
