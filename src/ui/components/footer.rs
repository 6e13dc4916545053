//! Footer
//!
//! Brand blurb, service and quick links, contact details. Rendered dark in
//! both themes.

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::{Message, Section};
use crate::ui::{icons, theme};

const INSTAGRAM_URL: &str = "https://www.instagram.com/i_nails_art_and_studio";
const FACEBOOK_URL: &str = "https://www.facebook.com/iNailsArtAndStudio";

const SERVICES: [&str; 4] = [
    "Nail Art & Care",
    "Eyelash Extensions",
    "Permanent Makeup",
    "Korean BB Glow",
];

pub fn view() -> Element<'static, Message> {
    let heading = |label: &'static str| {
        text(label)
            .size(16)
            .font(theme::bold())
            .color(theme::GOLD_LIGHT)
    };

    let social_button = |icon: &'static str, url: &'static str| {
        button(
            svg(svg::Handle::from_memory(icon.as_bytes()))
                .width(18)
                .height(18)
                .style(|_theme, _status| svg::Style {
                    color: Some(Color::WHITE),
                }),
        )
        .padding(10)
        .style(theme::primary_button)
        .on_press(Message::OpenExternal(url.to_string()))
    };

    let brand = column![
        text("i Nails Art & Studio")
            .size(22)
            .font(theme::bold())
            .color(theme::GOLD_LIGHT),
        text(
            "Premier beauty studio specializing in nail art, eyelash extensions, and \
             permanent makeup services. We bring Korean beauty techniques to enhance \
             your natural elegance.",
        )
        .size(13)
        .color(Color::from_rgb(0.82, 0.84, 0.86)),
        row![
            social_button(icons::INSTAGRAM, INSTAGRAM_URL),
            social_button(icons::FACEBOOK, FACEBOOK_URL),
        ]
        .spacing(10),
    ]
    .spacing(16)
    .width(Fill);

    let mut services = column![heading("Services")].spacing(10);
    for service in SERVICES {
        services = services.push(
            button(text(service).size(13))
                .padding(0)
                .style(theme::link_button)
                .on_press(Message::ScrollToSection(Section::Services)),
        );
    }

    let mut quick_links = column![heading("Quick Links")].spacing(10);
    for section in [
        Section::Home,
        Section::Gallery,
        Section::Courses,
        Section::Testimonials,
        Section::Contact,
    ] {
        quick_links = quick_links.push(
            button(text(section.label()).size(13))
                .padding(0)
                .style(theme::link_button)
                .on_press(Message::ScrollToSection(section)),
        );
    }

    let contact_row = |icon: &'static str, value: &'static str| {
        row![
            svg(svg::Handle::from_memory(icon.as_bytes()))
                .width(16)
                .height(16)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::GOLD_LIGHT),
                }),
            text(value).size(13).color(Color::from_rgb(0.82, 0.84, 0.86)),
        ]
        .spacing(10)
        .align_y(Alignment::Start)
    };

    let contact = column![
        heading("Contact"),
        contact_row(
            icons::MAP_PIN,
            "Antara Appartment, 4no. Deshbandhu Nagar, Sodepur, Kolkata - 700110",
        ),
        contact_row(icons::PHONE, "+91 8240423031"),
        contact_row(icons::CLOCK, "Mon-Sun: 10:00 AM - 9:00 PM"),
    ]
    .spacing(10)
    .width(Fill);

    let divider = container(Space::new().width(Fill).height(1)).style(|_t| {
        container::Style {
            background: Some(iced::Background::Color(Color::from_rgba(
                1.0, 1.0, 1.0, 0.12,
            ))),
            ..Default::default()
        }
    });

    let copyright = text("© 2025 i Nails Art & Studio. All rights reserved.")
        .size(12)
        .color(Color::from_rgb(0.6, 0.63, 0.67));

    container(
        column![
            row![
                brand,
                services.width(Fill),
                quick_links.width(Fill),
                contact
            ]
            .spacing(40),
            divider,
            copyright,
        ]
        .spacing(28)
        .align_x(Alignment::Center)
        .padding(Padding::new(64.0).top(56.0).bottom(40.0)),
    )
    .width(Fill)
    .style(theme::footer)
    .into()
}
