//! Checked feature line used by service features and course highlights.

use iced::widget::{row, svg, text};
use iced::{Alignment, Element};

use crate::ui::{icons, theme};

pub fn view<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    row![
        svg(svg::Handle::from_memory(icons::CHECK_CIRCLE.as_bytes()))
            .width(18)
            .height(18)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::SUCCESS),
            }),
        text(label).size(14).font(theme::medium()).style(|t| text::Style {
            color: Some(theme::text_secondary(t)),
        }),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}
