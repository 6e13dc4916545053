//! Courses section
//!
//! Two-column card grid of the training courses plus a benefits panel.
//! Featured courses carry a gold ring and badge.

use iced::widget::{Space, button, column, container, row, stack, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::api::content::ContentConfig;
use crate::api::images;
use crate::api::model::Course;
use crate::app::{ImageStore, Message, Section, SectionState};
use crate::ui::components::remote_image;
use crate::ui::widgets::{feature_row, loading, rating, section_header};
use crate::ui::{icons, theme};

const CARD_WIDTH: f32 = 560.0;
const CARD_IMAGE_HEIGHT: f32 = 260.0;

struct Benefit {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const BENEFITS: [Benefit; 3] = [
    Benefit {
        icon: icons::AWARD,
        title: "Industry Certification",
        text: "Receive professional certification recognized by the beauty industry",
    },
    Benefit {
        icon: icons::USERS,
        title: "Expert Instructors",
        text: "Learn from experienced professionals with years of industry experience",
    },
    Benefit {
        icon: icons::BOOK_OPEN,
        title: "Hands-On Training",
        text: "Practice with real clients and get immediate feedback from instructors",
    },
];

pub fn view<'a>(
    state: &'a SectionState<Course>,
    images_store: &'a ImageStore,
    config: &ContentConfig,
) -> Element<'a, Message> {
    let header = section_header::view(
        None,
        "Professional Courses",
        "Start your beauty career with our comprehensive training courses taught by \
         industry professionals",
    );

    let body: Element<'a, Message> = if state.is_loading() {
        loading::view("Loading courses...")
    } else {
        let mut grid = column![].spacing(32);
        let mut cards = row![].spacing(32);
        let mut in_row = 0;

        for course in state.records() {
            cards = cards.push(course_card(course, images_store, config));
            in_row += 1;
            if in_row == 2 {
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

    let mut benefit_columns = row![].spacing(32);
    for benefit in &BENEFITS {
        benefit_columns = benefit_columns.push(
            column![
                container(
                    svg(svg::Handle::from_memory(benefit.icon.as_bytes()))
                        .width(28)
                        .height(28)
                        .style(|_theme, _status| svg::Style {
                            color: Some(iced::Color::WHITE),
                        }),
                )
                .padding(16)
                .style(theme::badge),
                text(benefit.title)
                    .size(17)
                    .font(theme::bold())
                    .style(|t| text::Style {
                        color: Some(theme::text_primary(t)),
                    }),
                text(benefit.text).size(13).style(|t| text::Style {
                    color: Some(theme::text_muted(t)),
                }),
            ]
            .spacing(10)
            .width(Fill)
            .align_x(Alignment::Center),
        );
    }

    let benefits = container(
        column![
            text("Why Choose Our Courses?")
                .size(24)
                .font(theme::bold())
                .style(|t| text::Style {
                    color: Some(theme::text_primary(t)),
                }),
            benefit_columns,
        ]
        .spacing(32)
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(40)
    .style(theme::panel);

    container(
        column![header, body, benefits]
            .spacing(48)
            .align_x(Alignment::Center)
            .padding(Padding::new(64.0).top(80.0).bottom(80.0)),
    )
    .width(Fill)
    .style(theme::section)
    .into()
}

fn course_card<'a>(
    course: &'a Course,
    images_store: &'a ImageStore,
    config: &ContentConfig,
) -> Element<'a, Message> {
    let image_url = images::course_image_url(config, course);
    let photo = remote_image(images_store, &image_url, CARD_WIDTH, CARD_IMAGE_HEIGHT, 16.0);

    let photo: Element<'a, Message> = if course.featured {
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

    let meta_icon = |source: &'static str| {
        svg(svg::Handle::from_memory(source.as_bytes()))
            .width(16)
            .height(16)
            .style(|t, _status| svg::Style {
                color: Some(theme::text_muted(t)),
            })
    };

    let meta = row![
        meta_icon(icons::CLOCK),
        text(&course.duration).size(13).style(|t| text::Style {
            color: Some(theme::text_muted(t)),
        }),
        Space::new().width(12),
        meta_icon(icons::USERS),
        text(format!("{} Students", course.students))
            .size(13)
            .style(|t| text::Style {
                color: Some(theme::text_muted(t)),
            }),
        Space::new().width(Fill),
        text(&course.price)
            .size(24)
            .font(theme::bold())
            .style(|t| text::Style {
                color: Some(theme::accent_text(t)),
            }),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let mut highlights = column![
        text("What You'll Learn:")
            .size(15)
            .font(theme::bold())
            .style(|t| text::Style {
                color: Some(theme::text_primary(t)),
            }),
    ]
    .spacing(8);
    for highlight in &course.highlights {
        highlights = highlights.push(feature_row::view(highlight));
    }

    let enroll = button(
        row![
            svg(svg::Handle::from_memory(icons::BOOK_OPEN.as_bytes()))
                .width(18)
                .height(18)
                .style(|_theme, _status| svg::Style {
                    color: Some(iced::Color::WHITE),
                }),
            text("Enroll Now").size(16).font(theme::bold()),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding(14)
    .style(theme::primary_button)
    .on_press(Message::ScrollToSection(Section::Contact));

    container(
        column![
            photo,
            column![
                row![
                    text(&course.title)
                        .size(20)
                        .font(theme::bold())
                        .style(|t| text::Style {
                            color: Some(theme::text_primary(t)),
                        }),
                    Space::new().width(Fill),
                    rating::stars_with_score(course.rating, 15),
                ]
                .align_y(Alignment::Center),
                meta,
                text(&course.description).size(14).style(|t| text::Style {
                    color: Some(theme::text_secondary(t)),
                }),
                highlights,
                enroll,
            ]
            .spacing(16)
            .padding(24),
        ],
    )
    .width(CARD_WIDTH)
    .style(move |t| {
        if course.featured {
            theme::card_featured(t)
        } else {
            theme::card(t)
        }
    })
    .into()
}
