// SPDX-License-Identifier: MPL-2.0
//! Destination folders chosen during a session.
//!
//! Entries keep the order in which they were added; entry `i` answers to the
//! numeric shortcut `i + 1`. Entries are never removed.

use crate::config::MAX_DESTINATIONS;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// A destination folder and the name shown on its button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationEntry {
    path: PathBuf,
    display_name: String,
}

impl DestinationEntry {
    pub fn new(path: PathBuf) -> Self {
        // Roots such as `/` have no base name; show the whole path instead.
        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, display_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Up to [`MAX_DESTINATIONS`] unique destination folders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationSet {
    entries: Vec<DestinationEntry>,
}

impl DestinationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a folder and returns its index.
    ///
    /// # Errors
    ///
    /// - [`Error::TooManyDestinations`] when the set is full
    /// - [`Error::DuplicateDestination`] when the folder was already added
    ///
    /// The set is unchanged on error.
    pub fn add(&mut self, path: PathBuf) -> Result<usize> {
        if self.is_full() {
            return Err(Error::TooManyDestinations {
                max: MAX_DESTINATIONS,
            });
        }
        if self.contains(&path) {
            return Err(Error::DuplicateDestination(path));
        }

        self.entries.push(DestinationEntry::new(path));
        Ok(self.entries.len() - 1)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry.path == path)
    }

    /// Returns the entry at `index` (0-based).
    pub fn get(&self, index: usize) -> Option<&DestinationEntry> {
        self.entries.get(index)
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_DESTINATIONS
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DestinationEntry> {
        self.entries.iter()
    }
}
