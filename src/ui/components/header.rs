//! Fixed header bar
//!
//! Brand mark, one nav entry per page section, and the theme toggle. The bar
//! floats above the page scrollable; nav entries smooth-scroll to their
//! section and the entry for the section under the viewport stays lit.

use iced::widget::{Space, button, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{Message, Section};
use crate::ui::{icons, theme};

pub const HEADER_HEIGHT: f32 = 80.0;

pub fn view(active: Section, dark_mode: bool) -> Element<'static, Message> {
    let brand = row![
        text("i Nails").size(26).font(theme::bold()).style(|t| text::Style {
            color: Some(theme::accent_text(t)),
        }),
        text("Art & Studio").size(14).style(|t| text::Style {
            color: Some(theme::text_muted(t)),
        }),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut nav = row![].spacing(4).align_y(Alignment::Center);
    for section in Section::ALL {
        nav = nav.push(
            button(text(section.label()).size(14).font(theme::medium()))
                .padding(Padding::new(8.0).left(16).right(16))
                .style(theme::nav_button(section == active))
                .on_press(Message::ScrollToSection(section)),
        );
    }

    let toggle_icon = if dark_mode { icons::SUN } else { icons::MOON };
    let theme_toggle = button(
        svg(svg::Handle::from_memory(toggle_icon.as_bytes()))
            .width(20)
            .height(20)
            .style(|t, _status| svg::Style {
                // Dark mode shows the gold toggle, so the glyph flips dark
                color: Some(if theme::is_dark_theme(t) {
                    iced::color!(0x111827)
                } else {
                    theme::text_secondary(t)
                }),
            }),
    )
    .padding(10)
    .style(theme::theme_toggle_button)
    .on_press(Message::ToggleDarkMode);

    container(
        row![
            brand,
            Space::new().width(Fill),
            nav,
            Space::new().width(16),
            theme_toggle,
        ]
        .align_y(Alignment::Center)
        .padding(Padding::new(0.0).left(48).right(48)),
    )
    .width(Fill)
    .height(HEADER_HEIGHT)
    .style(theme::header_bar)
    .into()
}
