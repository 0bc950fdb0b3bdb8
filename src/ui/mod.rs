// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: views
//! borrow the session and emit messages, they never mutate state.
//!
//! - [`sorter`] - the sorting screen
//! - [`notifications`] - toast notifications
//! - [`styles`] - button and container styles
//! - [`design_tokens`] - colors, spacing and sizes
//! - [`theming`] - light/dark/system theme mode

pub mod design_tokens;
pub mod notifications;
pub mod sorter;
pub mod styles;
pub mod theming;
