//! Testimonials section
//!
//! Client quote cards and the studio stats panel.

use iced::widget::{Space, column, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::api::content::ContentConfig;
use crate::api::images;
use crate::api::model::Testimonial;
use crate::app::{ImageStore, Message, SectionState};
use crate::ui::components::remote_image;
use crate::ui::widgets::{loading, rating, section_header};
use crate::ui::{icons, theme};

const CARD_WIDTH: f32 = 380.0;
const AVATAR_SIZE: f32 = 64.0;

const STATS: [(&str, &str); 4] = [
    ("500+", "Happy Clients"),
    ("4.9", "Average Rating"),
    ("125+", "Course Graduates"),
    ("100%", "Satisfaction Rate"),
];

pub fn view<'a>(
    state: &'a SectionState<Testimonial>,
    images_store: &'a ImageStore,
    config: &ContentConfig,
) -> Element<'a, Message> {
    let header = section_header::view(
        None,
        "What Our Clients Say",
        "Don't just take our word for it - hear from our satisfied clients and \
         course graduates",
    );

    let body: Element<'a, Message> = if state.is_loading() {
        loading::view("Loading testimonials...")
    } else {
        let mut grid = column![].spacing(32);
        let mut cards = row![].spacing(32);
        let mut in_row = 0;

        for (index, testimonial) in state.records().iter().enumerate() {
            cards = cards.push(card(testimonial, index, images_store, config));
            in_row += 1;
            if in_row == 3 {
                grid = grid.push(cards);
                cards = row![].spacing(32);
                in_row = 0;
            }
        }
        if in_row > 0 {
            grid = grid.push(cards);
        }

        grid.into()
    };

    let mut stats = row![].spacing(24);
    for (number, label) in STATS {
        stats = stats.push(
            column![
                text(number).size(34).font(theme::bold()).style(|t| text::Style {
                    color: Some(theme::accent_text(t)),
                }),
                text(label).size(13).font(theme::medium()).style(|t| text::Style {
                    color: Some(theme::text_muted(t)),
                }),
            ]
            .spacing(4)
            .width(Fill)
            .align_x(Alignment::Center),
        );
    }

    let stats_panel = container(stats).width(Fill).padding(36).style(theme::panel);

    container(
        column![header, body, stats_panel]
            .spacing(48)
            .align_x(Alignment::Center)
            .padding(Padding::new(64.0).top(80.0).bottom(80.0)),
    )
    .width(Fill)
    .style(theme::section_alt)
    .into()
}

fn card<'a>(
    testimonial: &'a Testimonial,
    index: usize,
    images_store: &'a ImageStore,
    config: &ContentConfig,
) -> Element<'a, Message> {
    let avatar_url = images::testimonial_image_url(config, testimonial, index);
    let avatar = remote_image(
        images_store,
        &avatar_url,
        AVATAR_SIZE,
        AVATAR_SIZE,
        AVATAR_SIZE / 2.0,
    );

    let identity = row![
        avatar,
        column![
            text(&testimonial.name)
                .size(16)
                .font(theme::bold())
                .style(|t| text::Style {
                    color: Some(theme::text_primary(t)),
                }),
            text(&testimonial.role).size(13).style(|t| text::Style {
                color: Some(theme::text_muted(t)),
            }),
        ]
        .spacing(2),
        Space::new().width(Fill),
        svg(svg::Handle::from_memory(icons::QUOTE.as_bytes()))
            .width(26)
            .height(26)
            .style(|_theme, _status| svg::Style {
                color: Some(iced::Color {
                    a: 0.25,
                    ..theme::GOLD
                }),
            }),
    ]
    .spacing(14)
    .align_y(Alignment::Center);

    let service_tag = container(text(&testimonial.service).size(12).font(theme::medium()))
        .padding(Padding::new(5.0).left(12).right(12))
        .style(theme::tag);

    container(
        column![
            identity,
            rating::stars(testimonial.rating.min(5), 5, 16),
            text(format!("\u{201c}{}\u{201d}", testimonial.text))
                .size(14)
                .style(|t| text::Style {
                    color: Some(theme::text_secondary(t)),
                }),
            service_tag,
        ]
        .spacing(14)
        .padding(24),
    )
    .width(CARD_WIDTH)
    .style(theme::card)
    .into()
}
