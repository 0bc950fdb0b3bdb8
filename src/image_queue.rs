// SPDX-License-Identifier: MPL-2.0
//! Queue of images still waiting to be sorted.
//!
//! The queue owns the file names of the active source folder and a cursor.
//! The cursor is always a valid index, except when the queue is empty, where
//! it stays at 0 and the queue counts as exhausted. Navigation does not wrap:
//! moving past either end is a no-op.

/// Ordered, mutable list of pending image file names with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageQueue {
    names: Vec<String>,
    cursor: usize,
}

impl ImageQueue {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the queue contents and resets the cursor to the first entry.
    pub fn load(&mut self, names: Vec<String>) {
        self.names = names;
        self.cursor = 0;
    }

    /// Returns the file name under the cursor, or `None` when exhausted.
    pub fn current(&self) -> Option<&str> {
        self.names.get(self.cursor).map(String::as_str)
    }

    /// Moves the cursor forward unless it is on the last entry.
    ///
    /// Returns `true` if the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Moves the cursor backward unless it is on the first entry.
    ///
    /// Returns `true` if the cursor moved.
    pub fn retreat(&mut self) -> bool {
        if self.has_previous() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Removes the entry under the cursor and returns it.
    ///
    /// The cursor then points at the entry that followed the removed one, or
    /// at the new last entry when the removed one was last.
    pub fn remove_current(&mut self) -> Option<String> {
        if !self.is_valid_position() {
            return None;
        }
        let removed = self.names.remove(self.cursor);
        if self.cursor == self.names.len() && !self.names.is_empty() {
            self.cursor -= 1;
        }
        Some(removed)
    }

    /// Checks whether the cursor points at an entry.
    pub fn is_valid_position(&self) -> bool {
        self.cursor < self.names.len()
    }

    /// Returns the cursor position (0 when empty).
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Checks if the cursor can move forward.
    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.names.len()
    }

    /// Checks if the cursor can move backward.
    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    /// Returns the number of pending images.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Checks if every image has been sorted or skipped.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the pending names in queue order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
