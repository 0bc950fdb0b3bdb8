// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::session::Session;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::sorter;
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub notifications: &'a Manager,
}

/// Renders the sorting screen with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = sorter::view(sorter::ViewContext {
        session: ctx.session,
        i18n: ctx.i18n,
    })
    .map(Message::Sorter);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(screen)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
