// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the application.

use crate::ui::notifications;
use crate::ui::sorter;
use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`. Screen intents are forwarded as
/// [`sorter::Message`]; the remaining variants carry async results and timers.
#[derive(Debug, Clone)]
pub enum Message {
    Sorter(sorter::Message),
    /// Folder picked in the source dialog, `None` when cancelled.
    SourceDialogResult(Option<PathBuf>),
    /// Folder picked in the destination dialog, `None` when cancelled.
    DestinationDialogResult(Option<PathBuf>),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast auto-dismiss.
    Tick(Instant),
}
