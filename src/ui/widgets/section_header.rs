//! Section header widget
//!
//! Centered eyebrow / title / subtitle stack opening each page section.
//! Uses a generic Message type so it stays free of application types.

use iced::widget::{Space, column, text};
use iced::{Alignment, Element};

use crate::ui::theme;

pub fn view<'a, Message: 'a>(
    eyebrow: Option<&'a str>,
    title: &'a str,
    subtitle: &'a str,
) -> Element<'a, Message> {
    let mut content = column![].align_x(Alignment::Center).spacing(12);

    if let Some(eyebrow) = eyebrow {
        content = content.push(
            text(eyebrow)
                .size(16)
                .font(theme::medium())
                .style(|t| text::Style {
                    color: Some(theme::accent_text(t)),
                }),
        );
    }

    content = content.push(
        text(title)
            .size(40)
            .font(theme::bold())
            .style(|t| text::Style {
                color: Some(theme::text_primary(t)),
            }),
    );

    content = content.push(
        text(subtitle)
            .size(18)
            .style(|t| text::Style {
                color: Some(theme::text_secondary(t)),
            }),
    );

    content.push(Space::new().height(8)).into()
}
