// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding image files in a source folder.
//!
//! This module lists a directory, keeps the regular files whose name ends with
//! one of [`SUPPORTED_EXTENSIONS`], and sorts their names lexicographically.

use crate::config::SUPPORTED_EXTENSIONS;
use crate::error::{Error, Result};
use std::path::Path;

/// Image names found in a source folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageListing {
    /// Image file names, sorted lexicographically.
    pub names: Vec<String>,
    /// Images left out because their name is not valid UTF-8.
    pub unlisted: usize,
}

/// Lists the image file names of `directory`, sorted lexicographically.
///
/// Only names are returned; join them onto `directory` to get full paths.
/// See [`scan_images`] for the count of images whose name could not be listed.
///
/// # Errors
///
/// Returns [`Error::DirectoryRead`] if the directory cannot be listed.
pub fn list_images(directory: &Path) -> Result<Vec<String>> {
    scan_images(directory).map(|listing| listing.names)
}

/// Scans `directory` for images.
///
/// Images whose name is not valid UTF-8 are counted in
/// [`ImageListing::unlisted`] instead of being listed.
///
/// # Errors
///
/// Returns [`Error::DirectoryRead`] if the directory cannot be listed.
pub fn scan_images(directory: &Path) -> Result<ImageListing> {
    let read_error = |source| Error::DirectoryRead {
        path: directory.to_path_buf(),
        source,
    };

    let mut listing = ImageListing::default();
    for entry in std::fs::read_dir(directory).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();

        if !path.is_file() || !is_supported_image(&path) {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => listing.names.push(name),
            Err(raw) => {
                tracing::warn!(name = ?raw, "image name is not valid UTF-8, leaving it out");
                listing.unlisted += 1;
            }
        }
    }

    listing.names.sort();
    Ok(listing)
}

/// Checks if a file name ends with a recognized image extension (case-insensitive).
///
/// The whole name is matched, so a bare `.png` counts as an image.
pub fn is_supported_image(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_ascii_lowercase();

    SUPPORTED_EXTENSIONS.iter().any(|ext| {
        name.strip_suffix(ext)
            .is_some_and(|rest| rest.ends_with('.'))
    })
}
