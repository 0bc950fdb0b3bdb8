// SPDX-License-Identifier: MPL-2.0
//! Sorting session: everything the user has chosen since launch.
//!
//! `Session` owns the source folder and its queue, the destination folders,
//! the routing mode and the display cache. Each user action is one method
//! here; the iced layer only forwards messages and renders the result, so
//! the whole workflow can be driven headless in tests.

use crate::config::Config;
use crate::destinations::DestinationSet;
use crate::directory_scanner;
use crate::error::{Error, Result};
use crate::image_queue::ImageQueue;
use crate::media::{self, ImageCache, ImageData};
use crate::routing::{self, RoutingMode};
use std::path::{Path, PathBuf};

/// The loaded source folder and the images left to sort in it.
#[derive(Debug, Clone)]
struct SourceFolder {
    dir: PathBuf,
    queue: ImageQueue,
    /// Number of images found when the folder was loaded.
    found: usize,
    /// Number of images routed out of the queue.
    routed: usize,
    /// Images dropped because they could not be decoded.
    skipped: Vec<String>,
}

/// What the image area should show.
#[derive(Debug, Clone, Copy)]
pub enum Showing<'a> {
    /// No source folder has been chosen yet.
    NoSource,
    /// The current image, with its decoded form when available.
    Image {
        name: &'a str,
        image: Option<&'a ImageData>,
    },
    /// The source folder contains no recognized images.
    NoImages,
    /// Every image of the folder failed to decode.
    NoValidImages,
    /// Every image has been routed (some may have been skipped).
    Finished,
}

/// Position shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress<'a> {
    /// 1-based position of the current image.
    pub position: usize,
    pub total: usize,
    pub name: &'a str,
}

/// A successful routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routed {
    pub filename: String,
    pub target: PathBuf,
    pub destination_name: String,
    pub mode: RoutingMode,
}

/// Result of loading a source folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub found: usize,
    /// Images left out of the queue because their name is not valid UTF-8.
    pub unlisted: usize,
}

#[derive(Debug)]
pub struct Session {
    source: Option<SourceFolder>,
    destinations: DestinationSet,
    mode: RoutingMode,
    cache: ImageCache,
    display_max: (u32, u32),
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            source: None,
            destinations: DestinationSet::new(),
            mode: RoutingMode::default(),
            cache: ImageCache::new(config.cache_capacity),
            display_max: config.display_max,
        }
    }

    // ------------------------------------------------------------------
    // Source folder
    // ------------------------------------------------------------------

    /// Lists `dir` and makes it the active source folder.
    ///
    /// Replaces any previous queue and clears the display cache. On error
    /// the previous source folder stays active.
    pub fn load_source(&mut self, dir: PathBuf) -> Result<LoadSummary> {
        let listing = directory_scanner::scan_images(&dir)?;
        let found = listing.names.len();
        let unlisted = listing.unlisted;

        let mut queue = ImageQueue::new();
        queue.load(listing.names);
        tracing::info!(dir = %dir.display(), found, unlisted, "loaded source folder");

        self.cache.clear();
        self.source = Some(SourceFolder {
            dir,
            queue,
            found,
            routed: 0,
            skipped: Vec::new(),
        });
        Ok(LoadSummary { found, unlisted })
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    pub fn source_dir(&self) -> Option<&Path> {
        self.source.as_ref().map(|s| s.dir.as_path())
    }

    pub fn queue(&self) -> Option<&ImageQueue> {
        self.source.as_ref().map(|s| &s.queue)
    }

    /// Names of the images dropped because they could not be decoded.
    pub fn skipped(&self) -> &[String] {
        self.source
            .as_ref()
            .map(|s| s.skipped.as_slice())
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Destinations and mode
    // ------------------------------------------------------------------

    /// Adds a destination folder, returning its 0-based index.
    pub fn add_destination(&mut self, dir: PathBuf) -> Result<usize> {
        let index = self.destinations.add(dir)?;
        tracing::info!(index, "added destination folder");
        Ok(index)
    }

    pub fn destinations(&self) -> &DestinationSet {
        &self.destinations
    }

    pub fn mode(&self) -> RoutingMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RoutingMode) {
        self.mode = mode;
    }

    /// Flips between copy and move and returns the new mode.
    pub fn toggle_mode(&mut self) -> RoutingMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Moves to the next image. Returns `true` if the cursor moved.
    pub fn next(&mut self) -> bool {
        self.source.as_mut().is_some_and(|s| s.queue.advance())
    }

    /// Moves to the previous image. Returns `true` if the cursor moved.
    pub fn previous(&mut self) -> bool {
        self.source.as_mut().is_some_and(|s| s.queue.retreat())
    }

    pub fn has_next(&self) -> bool {
        self.queue().is_some_and(ImageQueue::has_next)
    }

    pub fn has_previous(&self) -> bool {
        self.queue().is_some_and(ImageQueue::has_previous)
    }

    /// Checks whether an image is ready to be routed.
    pub fn has_current(&self) -> bool {
        self.queue().is_some_and(ImageQueue::is_valid_position)
    }

    // ------------------------------------------------------------------
    // Display
    // ------------------------------------------------------------------

    /// Makes sure the current image is decoded and cached.
    ///
    /// Images that fail to decode are dropped from the queue, exactly like a
    /// routed image, and the next one is tried. Returns one
    /// [`Error::ImageDecode`] per dropped image.
    pub fn prepare_current(&mut self) -> Vec<Error> {
        let mut skipped = Vec::new();
        let Some(source) = self.source.as_mut() else {
            return skipped;
        };

        while let Some(name) = source.queue.current() {
            let path = source.dir.join(name);
            if self.cache.get(&path).is_some() {
                break;
            }

            match media::load_display_image(&path, self.display_max) {
                Ok(image) => {
                    self.cache.insert(path, image);
                    break;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable image");
                    if let Some(name) = source.queue.remove_current() {
                        source.skipped.push(name);
                    }
                    skipped.push(err);
                }
            }
        }

        skipped
    }

    /// Describes what the image area should show.
    pub fn showing(&self) -> Showing<'_> {
        let Some(source) = self.source.as_ref() else {
            return Showing::NoSource;
        };

        match source.queue.current() {
            Some(name) => Showing::Image {
                name,
                image: self.cache.peek(&source.dir.join(name)),
            },
            None if source.found == 0 => Showing::NoImages,
            None if source.routed == 0 => Showing::NoValidImages,
            None => Showing::Finished,
        }
    }

    /// Position of the current image, if any.
    pub fn progress(&self) -> Option<Progress<'_>> {
        let queue = self.queue()?;
        let name = queue.current()?;
        Some(Progress {
            position: queue.position() + 1,
            total: queue.len(),
            name,
        })
    }

    // ------------------------------------------------------------------
    // Routing
    // ------------------------------------------------------------------

    /// Sends the current image to the destination at `dest_index` (0-based).
    ///
    /// Returns `Ok(None)` when there is no current image or no destination
    /// at that index. On error the queue is unchanged.
    pub fn route_current(&mut self, dest_index: usize) -> Result<Option<Routed>> {
        let Some(destination) = self.destinations.get(dest_index) else {
            tracing::debug!(dest_index, "no destination at index");
            return Ok(None);
        };
        let Some(source) = self.source.as_mut() else {
            return Ok(None);
        };
        let Some(filename) = source.queue.current().map(str::to_owned) else {
            return Ok(None);
        };

        let target = routing::route_file(&source.dir, &filename, destination.path(), self.mode)?;

        source.queue.remove_current();
        source.routed += 1;
        self.cache.remove(&source.dir.join(&filename));

        Ok(Some(Routed {
            filename,
            target,
            destination_name: destination.display_name().to_string(),
            mode: self.mode,
        }))
    }
}
