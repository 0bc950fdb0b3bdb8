// SPDX-License-Identifier: MPL-2.0
//! Add-destination button and one send button per destination folder.

use super::{Message, ViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, tooltip, Column, Row, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let add = button(Text::new(ctx.i18n.tr("destination-add-button")).size(typography::BODY))
        .on_press(Message::AddDestination)
        .padding(spacing::XS);

    let routable = ctx.session.has_current();
    let row = ctx
        .session
        .destinations()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, entry)| {
            let number = (index + 1).to_string();
            let label = ctx.i18n.tr_with_args(
                "destination-button",
                &[("index", number.as_str()), ("name", entry.display_name())],
            );

            let send = button(Text::new(label).size(typography::BODY))
                .on_press_maybe(routable.then_some(Message::RouteTo(index)))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding(spacing::XS)
                .style(styles::button::primary);

            row.push(
                tooltip(
                    send,
                    container(Text::new(entry.path().display().to_string()).size(typography::CAPTION))
                        .padding(spacing::XXS)
                        .style(container::rounded_box),
                    tooltip::Position::Bottom,
                )
                .gap(4),
            )
        });

    Column::new()
        .spacing(spacing::XS)
        .push(add)
        .push(row.wrap())
        .into()
}
