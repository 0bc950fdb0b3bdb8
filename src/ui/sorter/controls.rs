// SPDX-License-Identifier: MPL-2.0
//! Back / copy-mode / Next row.

use super::{Message, ViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, toggler, Row, Space, Text};
use iced::{Alignment, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let session = ctx.session;

    let back = button(Text::new(ctx.i18n.tr("nav-back")).size(typography::BODY))
        .on_press_maybe(session.has_previous().then_some(Message::Previous))
        .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
        .padding(spacing::XS);

    let next = button(Text::new(ctx.i18n.tr("nav-next")).size(typography::BODY))
        .on_press_maybe(session.has_next().then_some(Message::Next))
        .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
        .padding(spacing::XS);

    let copy_mode = toggler(session.mode().is_copy())
        .label(ctx.i18n.tr("copy-mode-toggle"))
        .on_toggle(Message::SetCopyMode)
        .size(20.0);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(back)
        .push(Space::new().width(Length::Fill))
        .push(copy_mode)
        .push(Space::new().width(Length::Fill))
        .push(next)
        .into()
}
