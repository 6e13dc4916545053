//! Services section
//!
//! Card grid over whatever service list the loader produced, with a hover
//! highlight and a closing call-to-action panel.

use iced::widget::{button, column, container, mouse_area, row, stack, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::api::content::ContentConfig;
use crate::api::images;
use crate::api::model::Service;
use crate::app::{ImageStore, Message, Section, SectionState};
use crate::ui::components::remote_image;
use crate::ui::widgets::{feature_row, loading, section_header};
use crate::ui::{icons, theme};

const CARD_WIDTH: f32 = 380.0;
const CARD_IMAGE_HEIGHT: f32 = 240.0;

/// Keyword-matched icon, mirroring the placeholder image selection.
fn service_icon(title: &str) -> &'static str {
    let title = title.to_lowercase();
    if title.contains("nail") {
        icons::SPARKLES
    } else if title.contains("eyelash") {
        icons::EYE
    } else {
        icons::PALETTE
    }
}

pub fn view<'a>(
    state: &'a SectionState<Service>,
    hovered: Option<&str>,
    images_store: &'a ImageStore,
    config: &ContentConfig,
) -> Element<'a, Message> {
    let header = section_header::view(
        Some("Premium Services"),
        "Transform Your Natural Beauty",
        "Experience luxury beauty treatments with our expert team using the finest \
         products and cutting-edge techniques",
    );

    let body: Element<'a, Message> = if state.is_loading() {
        loading::view("Loading our premium services...")
    } else {
        let mut grid = column![].spacing(32);
        let mut cards = row![].spacing(32);
        let mut in_row = 0;

        for service in state.records() {
            cards = cards.push(service_card(service, hovered, images_store, config));
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

    let cta = container(
        column![
            text("Ready to Transform Your Look?")
                .size(28)
                .font(theme::bold())
                .style(|t| text::Style {
                    color: Some(theme::text_primary(t)),
                }),
            text("Book your appointment today and experience the difference of premium beauty services")
                .size(16)
                .style(|t| text::Style {
                    color: Some(theme::text_secondary(t)),
                }),
            button(text("Schedule Consultation").size(17).font(theme::bold()))
                .padding(Padding::new(14.0).left(40).right(40))
                .style(theme::primary_button)
                .on_press(Message::ScrollToSection(Section::Contact)),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(48)
    .style(theme::panel);

    container(
        column![header, body, cta]
            .spacing(48)
            .align_x(Alignment::Center)
            .padding(Padding::new(64.0).top(96.0).bottom(96.0)),
    )
    .width(Fill)
    .style(theme::section)
    .into()
}

fn service_card<'a>(
    service: &'a Service,
    hovered: Option<&str>,
    images_store: &'a ImageStore,
    config: &ContentConfig,
) -> Element<'a, Message> {
    let is_hovered = hovered == Some(service.id.as_str());
    let image_url = images::service_image_url(config, service);

    let photo = remote_image(images_store, &image_url, CARD_WIDTH, CARD_IMAGE_HEIGHT, 16.0);

    let photo: Element<'a, Message> = if service.popular {
        let badge = container(
            container(
                row![
                    svg(svg::Handle::from_memory(icons::AWARD.as_bytes()))
                        .width(14)
                        .height(14)
                        .style(|_theme, _status| svg::Style {
                            color: Some(iced::Color::WHITE),
                        }),
                    text("Most Popular").size(12).font(theme::bold()),
                ]
                .spacing(6)
                .align_y(Alignment::Center),
            )
            .padding(Padding::new(6.0).left(14).right(14))
            .style(theme::badge),
        )
        .width(CARD_WIDTH)
        .align_x(Alignment::End)
        .padding(12);
        stack![photo, badge].into()
    } else {
        photo
    };

    let title = text(&service.title)
        .size(22)
        .font(theme::bold())
        .style(move |t| text::Style {
            color: Some(if is_hovered {
                theme::accent_text(t)
            } else {
                theme::text_primary(t)
            }),
        });

    let mut features = column![].spacing(8);
    for feature in &service.features {
        features = features.push(feature_row::view(feature));
    }

    let book = button(
        row![
            text("Book Now").size(16).font(theme::bold()),
            svg(svg::Handle::from_memory(icons::ARROW_RIGHT.as_bytes()))
                .width(18)
                .height(18)
                .style(|_theme, _status| svg::Style {
                    color: Some(iced::Color::WHITE),
                }),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding(14)
    .style(theme::primary_button)
    .on_press(Message::ScrollToSection(Section::Contact));

    let card = container(
        column![
            photo,
            column![
                row![
                    svg(svg::Handle::from_memory(service_icon(&service.title).as_bytes()))
                        .width(24)
                        .height(24)
                        .style(|t, _status| svg::Style {
                            color: Some(theme::accent_text(t)),
                        }),
                    title,
                ]
                .spacing(10)
                .align_y(Alignment::Center),
                text(&service.description).size(14).style(|t| text::Style {
                    color: Some(theme::text_secondary(t)),
                }),
                features,
                book,
            ]
            .spacing(16)
            .padding(24),
        ],
    )
    .width(CARD_WIDTH)
    .style(move |t| {
        if is_hovered {
            theme::card_hovered(t)
        } else {
            theme::card(t)
        }
    });

    let id = service.id.clone();
    mouse_area(card)
        .on_enter(Message::HoverService(Some(id)))
        .on_exit(Message::HoverService(None))
        .into()
}
