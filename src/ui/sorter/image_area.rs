// SPDX-License-Identifier: MPL-2.0
//! Framed area showing the current image or a placeholder message.

use super::{Message, ViewContext};
use crate::session::Showing;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{image, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Returns the i18n key of the placeholder text, or `None` when an image is drawn.
pub(super) fn placeholder_key(showing: &Showing<'_>) -> Option<&'static str> {
    match showing {
        Showing::NoSource => Some("image-area-no-source"),
        Showing::Image { image: Some(_), .. } => None,
        Showing::Image { image: None, .. } => Some("image-area-loading"),
        Showing::NoImages => Some("image-area-no-images"),
        Showing::NoValidImages => Some("image-area-no-valid-images"),
        Showing::Finished => Some("image-area-finished"),
    }
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let showing = ctx.session.showing();

    let content: Element<'a, Message> = match (showing, placeholder_key(&showing)) {
        (Showing::Image { image: Some(data), .. }, _) => image(data.handle.clone())
            .content_fit(ContentFit::ScaleDown)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        (_, Some(key)) => Text::new(ctx.i18n.tr(key))
            .size(typography::TITLE_SM)
            .into(),
        (_, None) => Text::new("").into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_frame)
        .into()
}
