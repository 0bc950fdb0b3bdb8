// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for feedback that must not block sorting.
//!
//! # Components
//!
//! - [`Notification`] - message key, arguments and severity
//! - [`Manager`] - queuing and auto-dismiss
//! - [`Toast`] - rendering in the bottom-right corner
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-routed").with_arg("filename", "a.jpg"));
//!
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Durations: 3s for success/info, 5s for warnings, errors stay until dismissed.
//! At most three toasts are visible, the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
