// SPDX-License-Identifier: MPL-2.0
//! The sorting screen: source row, destination buttons, image frame,
//! navigation and status bar, top to bottom.
//!
//! The screen owns no state. It renders from a [`Session`] and emits
//! [`Message`]s that the app dispatches back to the session.

mod controls;
mod destinations;
mod image_area;
mod status_bar;

pub use status_bar::status_text;

use crate::i18n::fluent::I18n;
use crate::session::Session;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, container, tooltip, Column, Row, Text};
use iced::{Alignment, Element, Length};

/// User intents raised by the sorting screen and by keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ChooseSource,
    AddDestination,
    /// Send the current image to the destination at this 0-based index.
    RouteTo(usize),
    Next,
    Previous,
    SetCopyMode(bool),
    ToggleMode,
}

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub session: &'a Session,
    pub i18n: &'a I18n,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(source_row(&ctx))
        .push(destinations::view(&ctx))
        .push(image_area::view(&ctx))
        .push(controls::view(&ctx))
        .push(status_bar::view(&ctx))
        .into()
}

fn source_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let choose = button(Text::new(ctx.i18n.tr("source-button")).size(typography::BODY))
        .on_press(Message::ChooseSource)
        .padding(spacing::XS);

    let label: Element<'a, Message> = match ctx.session.source_dir() {
        Some(dir) => {
            let name = dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| dir.display().to_string());
            tooltip(
                Text::new(name).size(typography::BODY),
                container(Text::new(dir.display().to_string()).size(typography::CAPTION))
                    .padding(spacing::XXS)
                    .style(container::rounded_box),
                tooltip::Position::Bottom,
            )
            .gap(4)
            .into()
        }
        None => Text::new(ctx.i18n.tr("source-none"))
            .size(typography::BODY)
            .into(),
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(choose)
        .push(label)
        .into()
}
