// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Locale selection from the `--lang` flag, `ICED_SORTER_LANG`, or system settings
//! - Translation files embedded in the binary
//! - Fallback to `en-US` when a message is missing in the active locale

pub mod fluent;
