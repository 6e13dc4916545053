//! Hero section
//!
//! Trust badge, headline, CTA buttons, stats row, and the auto-advancing
//! image carousel with indicator dots.

use iced::widget::{Space, button, column, container, row, stack, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::api::images::HERO_IMAGES;
use crate::app::{HeroState, ImageStore, Message, Section};
use crate::ui::components::{HEADER_HEIGHT, remote_image};
use crate::ui::widgets::rating;
use crate::ui::{icons, theme};

const CAROUSEL_WIDTH: f32 = 520.0;
const CAROUSEL_HEIGHT: f32 = 560.0;

struct Stat {
    number: &'static str,
    label: &'static str,
    icon: &'static str,
}

const STATS: [Stat; 3] = [
    Stat {
        number: "500+",
        label: "Happy Clients",
        icon: icons::USERS,
    },
    Stat {
        number: "5+",
        label: "Years Experience",
        icon: icons::AWARD,
    },
    Stat {
        number: "100%",
        label: "Satisfaction",
        icon: icons::STAR,
    },
];

pub fn view<'a>(hero: &HeroState, images: &'a ImageStore) -> Element<'a, Message> {
    let trust_badge = row![
        rating::stars(5, 5, 20),
        text("Trusted by 500+ clients worldwide")
            .size(14)
            .font(theme::medium())
            .style(|t| text::Style {
                color: Some(theme::text_secondary(t)),
            }),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let headline = column![
        text("Premium Beauty")
            .size(58)
            .font(theme::bold())
            .style(|t| text::Style {
                color: Some(theme::text_primary(t)),
            }),
        text("Services").size(58).font(theme::bold()).style(|t| text::Style {
            color: Some(theme::accent_text(t)),
        }),
    ]
    .spacing(0);

    let description = text(
        "Experience the finest nail art, eyelash extensions, and permanent makeup \
         services. We bring Korean beauty techniques to enhance your natural elegance.",
    )
    .size(19)
    .style(|t| text::Style {
        color: Some(theme::text_secondary(t)),
    });

    let book_button = button(
        row![
            text("Book Appointment").size(17).font(theme::bold()),
            svg(svg::Handle::from_memory(icons::ARROW_RIGHT.as_bytes()))
                .width(20)
                .height(20)
                .style(|_theme, _status| svg::Style {
                    color: Some(iced::Color::WHITE),
                }),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding(Padding::new(16.0).left(36).right(36))
    .style(theme::primary_button)
    .on_press(Message::ScrollToSection(Section::Services));

    let gallery_button = button(text("View Our Work").size(17).font(theme::bold()))
        .padding(Padding::new(16.0).left(36).right(36))
        .style(theme::outline_button)
        .on_press(Message::ScrollToSection(Section::Gallery));

    let mut stats = row![].spacing(40);
    for stat in &STATS {
        stats = stats.push(
            column![
                svg(svg::Handle::from_memory(stat.icon.as_bytes()))
                    .width(30)
                    .height(30)
                    .style(|t, _status| svg::Style {
                        color: Some(theme::accent_text(t)),
                    }),
                text(stat.number)
                    .size(30)
                    .font(theme::bold())
                    .style(|t| text::Style {
                        color: Some(theme::accent_text(t)),
                    }),
                text(stat.label).size(13).style(|t| text::Style {
                    color: Some(theme::text_muted(t)),
                }),
            ]
            .spacing(6)
            .align_x(Alignment::Center),
        );
    }

    let content = column![
        trust_badge,
        headline,
        description,
        row![book_button, gallery_button].spacing(20),
        Space::new().height(16),
        stats,
    ]
    .spacing(24)
    .max_width(620);

    // Carousel: the tick subscription rotates `current_image`; the dots jump
    // straight to an entry.
    let current = hero.current_image % HERO_IMAGES.len();
    let carousel_image = remote_image(
        images,
        HERO_IMAGES[current],
        CAROUSEL_WIDTH,
        CAROUSEL_HEIGHT,
        24.0,
    );

    let mut dots = row![].spacing(8).align_y(Alignment::Center);
    for (index, _) in HERO_IMAGES.iter().enumerate() {
        let size = if index == current { 12.0 } else { 9.0 };
        dots = dots.push(
            button(Space::new().width(size).height(size))
                .padding(0)
                .style(theme::indicator_dot(index == current))
                .on_press(Message::SelectHeroImage(index)),
        );
    }

    let dots_overlay = container(
        column![Space::new().height(Fill), dots]
            .align_x(Alignment::Center)
            .width(Fill)
            .padding(Padding::new(0.0).bottom(20)),
    )
    .width(CAROUSEL_WIDTH)
    .height(CAROUSEL_HEIGHT);

    let carousel = stack![carousel_image, dots_overlay];

    let award_card = container(
        row![
            container(
                svg(svg::Handle::from_memory(icons::STAR.as_bytes()))
                    .width(26)
                    .height(26)
                    .style(|_theme, _status| svg::Style {
                        color: Some(iced::Color::WHITE),
                    }),
            )
            .padding(12)
            .style(theme::badge),
            column![
                text("Award Winning").size(12).style(|t| text::Style {
                    color: Some(theme::text_muted(t)),
                }),
                text("Beauty Studio")
                    .size(20)
                    .font(theme::bold())
                    .style(|t| text::Style {
                        color: Some(theme::text_primary(t)),
                    }),
                row![
                    rating::stars(5, 5, 13),
                    text("4.9/5").size(13).font(theme::medium()).style(|t| text::Style {
                        color: Some(theme::accent_text(t)),
                    }),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
            ]
            .spacing(2),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .padding(20)
    .style(theme::card);

    let showcase = column![carousel, award_card]
        .spacing(24)
        .align_x(Alignment::Center);

    container(
        row![content, Space::new().width(Fill), showcase]
            .align_y(Alignment::Center)
            .padding(Padding::new(64.0).top(HEADER_HEIGHT + 60.0).bottom(80.0)),
    )
    .width(Fill)
    .style(theme::section)
    .into()
}
