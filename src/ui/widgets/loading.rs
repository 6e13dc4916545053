//! Loading placeholder shown while a section's content query is in flight.

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Background, Element, Fill};

use crate::ui::theme;

pub fn view<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    let bar = container(Space::new().width(64).height(4)).style(|_t| container::Style {
        background: Some(Background::Color(theme::GOLD)),
        border: iced::Border {
            radius: 2.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    container(
        column![
            bar,
            text(label).size(16).style(|t| text::Style {
                color: Some(theme::text_secondary(t)),
            }),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(80)
    .center_x(Fill)
    .into()
}
