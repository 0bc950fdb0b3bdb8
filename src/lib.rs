// SPDX-License-Identifier: MPL-2.0
//! `iced_sorter` is a photo sorter built with the Iced GUI framework.
//!
//! It steps through the images of a source folder one at a time and routes
//! each into one of up to five destination folders, by button or by the
//! `1`-`5` keys, copying or moving the file without ever overwriting.
//!
//! The sorting logic ([`image_queue`], [`routing`], [`destinations`],
//! [`session`]) does not depend on the GUI and is tested on its own; [`app`]
//! and [`ui`] only render a [`session::Session`] and dispatch user intents to it.

pub mod app;
pub mod config;
pub mod destinations;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
pub mod image_queue;
pub mod logging;
pub mod media;
pub mod routing;
pub mod session;
pub mod ui;
