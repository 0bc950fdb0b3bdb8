// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions: keyboard shortcuts and the toast timer.

use super::Message;
use crate::config::MAX_DESTINATIONS;
use crate::ui::sorter;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Maps a key press to a screen intent.
///
/// Left/Right step through the queue, `c` toggles copy mode and `1`..`5`
/// route to the matching destination. Presses with Ctrl, Alt or the logo key
/// held are left to the platform.
pub fn shortcut(key: &Key, modifiers: Modifiers) -> Option<sorter::Message> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(sorter::Message::Previous),
        Key::Named(Named::ArrowRight) => Some(sorter::Message::Next),
        Key::Character("c" | "C") => Some(sorter::Message::ToggleMode),
        Key::Character(digit) => digit
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=MAX_DESTINATIONS).contains(n))
            .map(|n| sorter::Message::RouteTo(n - 1)),
        _ => None,
    }
}

/// Key presses not captured by a focused widget.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }),
            event::Status::Ignored,
        ) => shortcut(&key, modifiers).map(Message::Sorter),
        _ => None,
    })
}

/// Ticks every 100ms while toasts are on screen.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
