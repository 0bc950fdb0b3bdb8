// SPDX-License-Identifier: MPL-2.0
//! Single-line status bar: routing mode and position of the current image.

use super::{Message, ViewContext};
use crate::i18n::fluent::I18n;
use crate::routing::RoutingMode;
use crate::session::Progress;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::{Element, Length};

/// Formats the status line, e.g. `[MOVE]  Photo 3 / 10  |  Name: beach.jpg`.
pub fn status_text(i18n: &I18n, mode: RoutingMode, progress: Option<Progress<'_>>) -> String {
    let mode = i18n.tr(match mode {
        RoutingMode::Copy => "mode-copy",
        RoutingMode::Move => "mode-move",
    });

    match progress {
        Some(progress) => {
            let position = progress.position.to_string();
            let total = progress.total.to_string();
            i18n.tr_with_args(
                "status-bar-photo",
                &[
                    ("mode", mode.as_str()),
                    ("position", position.as_str()),
                    ("total", total.as_str()),
                    ("name", progress.name),
                ],
            )
        }
        None => i18n.tr_with_args("status-bar-idle", &[("mode", mode.as_str())]),
    }
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let line = status_text(ctx.i18n, ctx.session.mode(), ctx.session.progress());

    Container::new(Text::new(line).size(typography::CAPTION))
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::status_bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use unic_langid::langid;

    fn english() -> I18n {
        let mut i18n = I18n::new(&Config::default());
        i18n.set_locale(langid!("en-US"));
        i18n
    }

    #[test]
    fn status_with_current_photo() {
        let progress = Progress {
            position: 3,
            total: 10,
            name: "beach.jpg",
        };
        assert_eq!(
            status_text(&english(), RoutingMode::Move, Some(progress)),
            "[MOVE]  Photo 3 / 10  |  Name: beach.jpg"
        );
    }

    #[test]
    fn status_without_photo() {
        assert_eq!(
            status_text(&english(), RoutingMode::Copy, None),
            "[COPY]  No active photo."
        );
    }

    #[test]
    fn mode_label_follows_locale() {
        let mut i18n = english();
        i18n.set_locale(langid!("id"));
        assert!(status_text(&i18n, RoutingMode::Copy, None).starts_with("[SALIN]"));
    }
}
