// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Source Folder
// ==========================================================================

/// File extensions recognized as images, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "tiff"];

// ==========================================================================
// Destinations
// ==========================================================================

/// Maximum number of destination folders in a session.
/// Also the number of numeric shortcuts (`1` to `5`).
pub const MAX_DESTINATIONS: usize = 5;

// ==========================================================================
// Display
// ==========================================================================

/// Bounding box images are downscaled into before display (width, height).
pub const DEFAULT_DISPLAY_MAX_WIDTH: u32 = 800;
pub const DEFAULT_DISPLAY_MAX_HEIGHT: u32 = 600;

// ==========================================================================
// Display Cache
// ==========================================================================

/// Default number of decoded images kept in the display cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Minimum display cache capacity.
pub const MIN_CACHE_CAPACITY: usize = 8;

/// Maximum display cache capacity.
pub const MAX_CACHE_CAPACITY: usize = 512;

// ==========================================================================
// Environment
// ==========================================================================

/// Environment variable consulted for the UI language when `--lang` is absent.
pub const ENV_LANG: &str = "ICED_SORTER_LANG";

/// Environment variable holding the `tracing` filter directive.
pub const ENV_LOG: &str = "ICED_SORTER_LOG";

/// Filter used when [`ENV_LOG`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "iced_sorter=info";
