// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! `App` owns the sorting [`Session`], localization and the toast manager,
//! and wires them into the iced `update`/`view`/`subscription` loop.

mod message;
mod subscription;
mod update;
mod view;

pub use message::Message;
pub use subscription::shortcut;

use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::session::Session;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 980;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const MIN_WINDOW_WIDTH: u32 = 650;
pub const MIN_WINDOW_HEIGHT: u32 = 650;

pub struct App {
    pub i18n: I18n,
    session: Session,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("source", &self.session.source_dir())
            .field("mode", &self.session.mode())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(config: Config) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the config is consumed on first call.
    let boot_state = RefCell::new(Some(config));
    let boot = move || {
        let config = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(config: Config) -> (Self, Task<Message>) {
        let mut app = App {
            i18n: I18n::new(&config),
            session: Session::new(&config),
            theme_mode: config.theme_mode,
            notifications: notifications::Manager::new(),
        };

        if let Some(dir) = config.initial_source {
            update::handle_source_selected(&mut app.update_context(), dir);
        }

        (app, Task::none())
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            session: &mut self.session,
            i18n: &self.i18n,
            notifications: &mut self.notifications,
        }
    }

    /// `name - Photo Sorter` while an image is current.
    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.session.progress() {
            Some(progress) => format!("{} - {app_name}", progress.name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Sorter(sorter_message) => {
                update::handle_sorter_message(&mut self.update_context(), sorter_message)
            }
            Message::SourceDialogResult(Some(dir)) => {
                update::handle_source_selected(&mut self.update_context(), dir);
                Task::none()
            }
            Message::DestinationDialogResult(Some(dir)) => {
                update::handle_destination_selected(&mut self.update_context(), dir);
                Task::none()
            }
            // Dialog cancelled
            Message::SourceDialogResult(None) | Message::DestinationDialogResult(None) => {
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            notifications: &self.notifications,
        })
    }
}
