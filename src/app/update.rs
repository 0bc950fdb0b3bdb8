// SPDX-License-Identifier: MPL-2.0
//! Update logic: every screen intent maps to one [`Session`] operation,
//! followed by feedback through toasts.

use super::Message;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::image_queue::ImageQueue;
use crate::routing::RoutingMode;
use crate::session::Session;
use crate::ui::notifications::{self, Notification};
use crate::ui::sorter;
use iced::Task;
use std::path::{Path, PathBuf};

/// Mutable state an update handler may touch.
pub struct UpdateContext<'a> {
    pub session: &'a mut Session,
    pub i18n: &'a I18n,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_sorter_message(ctx: &mut UpdateContext<'_>, message: sorter::Message) -> Task<Message> {
    match message {
        sorter::Message::ChooseSource => pick_folder(
            ctx.i18n.tr("source-dialog-title"),
            source_dialog_start(ctx.session),
            Message::SourceDialogResult,
        ),
        sorter::Message::AddDestination => {
            if ctx.session.destinations().is_full() {
                report_error(
                    ctx,
                    &Error::TooManyDestinations {
                        max: crate::config::MAX_DESTINATIONS,
                    },
                );
                return Task::none();
            }
            pick_folder(
                ctx.i18n.tr("destination-dialog-title"),
                destination_dialog_start(ctx.session),
                Message::DestinationDialogResult,
            )
        }
        sorter::Message::RouteTo(index) => {
            handle_route(ctx, index);
            Task::none()
        }
        sorter::Message::Next => {
            if ctx.session.next() {
                prepare_current(ctx);
            }
            Task::none()
        }
        sorter::Message::Previous => {
            if ctx.session.previous() {
                prepare_current(ctx);
            }
            Task::none()
        }
        sorter::Message::SetCopyMode(copy) => {
            ctx.session.set_mode(if copy {
                RoutingMode::Copy
            } else {
                RoutingMode::Move
            });
            Task::none()
        }
        sorter::Message::ToggleMode => {
            ctx.session.toggle_mode();
            Task::none()
        }
    }
}

/// Loads `dir` as the new source folder.
pub fn handle_source_selected(ctx: &mut UpdateContext<'_>, dir: PathBuf) {
    let folder = folder_name(&dir);

    match ctx.session.load_source(dir) {
        Ok(summary) => {
            ctx.notifications.clear_source_notifications();
            let notification = if summary.found == 0 {
                Notification::info("notification-source-empty")
            } else {
                Notification::info("notification-source-loaded")
                    .with_arg("count", summary.found.to_string())
            };
            ctx.notifications
                .push(notification.with_arg("folder", folder.clone()));
            if summary.unlisted > 0 {
                ctx.notifications.push(
                    Notification::warning("notification-source-unlisted")
                        .with_arg("count", summary.unlisted.to_string())
                        .with_arg("folder", folder),
                );
            }
            prepare_current(ctx);
        }
        Err(err) => report_error(ctx, &err),
    }
}

pub fn handle_destination_selected(ctx: &mut UpdateContext<'_>, dir: PathBuf) {
    if let Err(err) = ctx.session.add_destination(dir) {
        report_error(ctx, &err);
    }
}

fn handle_route(ctx: &mut UpdateContext<'_>, index: usize) {
    match ctx.session.route_current(index) {
        Ok(Some(routed)) => {
            let key = match routed.mode {
                RoutingMode::Copy => "notification-routed-copy",
                RoutingMode::Move => "notification-routed-move",
            };
            ctx.notifications.push(
                Notification::success(key)
                    .with_arg("filename", routed.filename)
                    .with_arg("destination", routed.destination_name),
            );
            prepare_current(ctx);

            if ctx.session.queue().is_some_and(ImageQueue::is_empty) {
                ctx.notifications
                    .push(Notification::success("notification-all-sorted"));
            }
        }
        Ok(None) => {}
        Err(err) => report_error(ctx, &err),
    }
}

/// Decodes the image now under the cursor, reporting any that were skipped.
fn prepare_current(ctx: &mut UpdateContext<'_>) {
    for err in ctx.session.prepare_current() {
        report_error(ctx, &err);
    }
}

fn report_error(ctx: &mut UpdateContext<'_>, err: &Error) {
    ctx.notifications.push(Notification::from_error(err));
}

/// Opens a native folder picker without blocking the event loop.
fn pick_folder(
    title: String,
    start: Option<PathBuf>,
    on_result: fn(Option<PathBuf>) -> Message,
) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title(title);
            if let Some(dir) = start.filter(|dir| dir.is_dir()) {
                dialog = dialog.set_directory(&dir);
            }
            dialog.pick_folder().await.map(|handle| handle.path().to_path_buf())
        },
        on_result,
    )
}

/// The source dialog reopens next to the current source, or in the pictures folder.
fn source_dialog_start(session: &Session) -> Option<PathBuf> {
    session
        .source_dir()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .or_else(dirs::picture_dir)
}

/// Destinations are usually siblings of the source folder.
fn destination_dialog_start(session: &Session) -> Option<PathBuf> {
    session
        .destinations()
        .iter()
        .last()
        .and_then(|entry| entry.path().parent())
        .or_else(|| session.source_dir().and_then(Path::parent))
        .map(Path::to_path_buf)
        .or_else(dirs::picture_dir)
}

fn folder_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_name_prefers_base_name() {
        assert_eq!(folder_name(Path::new("/photos/holiday")), "holiday");
        assert_eq!(folder_name(Path::new("/")), "/");
    }

    #[test]
    fn dialogs_start_next_to_source() {
        let dir = tempfile::tempdir().expect("temp dir");
        let source = dir.path().join("inbox");
        std::fs::create_dir(&source).expect("create source");

        let mut session = Session::default();
        session.load_source(source).expect("load source");

        assert_eq!(source_dialog_start(&session).as_deref(), Some(dir.path()));
        assert_eq!(destination_dialog_start(&session).as_deref(), Some(dir.path()));
    }

    #[test]
    fn destination_dialog_follows_last_destination() {
        let mut session = Session::default();
        session
            .add_destination(PathBuf::from("/sorted/keep"))
            .expect("add destination");

        assert_eq!(
            destination_dialog_start(&session),
            Some(PathBuf::from("/sorted"))
        );
    }
}
