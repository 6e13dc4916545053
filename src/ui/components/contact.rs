//! Contact section
//!
//! Booking form on the left, studio information on the right. Submitting the
//! form opens a pre-filled WhatsApp deep link; there is no server round-trip.

use iced::widget::{button, column, container, pick_list, row, svg, text, text_input};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::BookingForm;
use crate::features::booking::SERVICE_OPTIONS;
use crate::ui::widgets::section_header;
use crate::ui::{icons, theme};

const INSTAGRAM_URL: &str = "https://www.instagram.com/i_nails_art_and_studio";
const FACEBOOK_URL: &str = "https://www.facebook.com/iNailsArtAndStudio";
const MAPS_URL: &str = "https://maps.google.com/?q=i-Nails+Art+%26+Studio+Sodepur+Kolkata";

const ADDRESS: &str = "Antara Appartment, 4no. Deshbandhu Nagar, Sodepur, Kolkata - 700110";
const PHONE: &str = "+91 8240423031";
const HOURS: &str = "Mon-Sun: 10:00 AM - 9:00 PM";

pub fn view(form: &BookingForm) -> Element<'_, Message> {
    let header = section_header::view(
        None,
        "Get In Touch",
        "Ready for a new look? Book your appointment or reach out with any questions",
    );

    let columns = row![form_panel(form), info_panel()].spacing(40);

    container(
        column![header, columns]
            .spacing(48)
            .align_x(Alignment::Center)
            .padding(Padding::new(64.0).top(80.0).bottom(80.0)),
    )
    .width(Fill)
    .style(theme::section)
    .into()
}

fn field_label<'a>(label: &'a str) -> Element<'a, Message> {
    text(label)
        .size(13)
        .font(theme::medium())
        .style(|t| text::Style {
            color: Some(theme::text_secondary(t)),
        })
        .into()
}

fn form_panel(form: &BookingForm) -> Element<'_, Message> {
    let first_name = column![
        field_label("First Name"),
        text_input("Enter your first name", &form.first_name)
            .on_input(Message::FirstNameChanged)
            .padding(12)
            .size(14)
            .style(theme::input),
    ]
    .spacing(6)
    .width(Fill);

    let last_name = column![
        field_label("Last Name"),
        text_input("Enter your last name", &form.last_name)
            .on_input(Message::LastNameChanged)
            .padding(12)
            .size(14)
            .style(theme::input),
    ]
    .spacing(6)
    .width(Fill);

    let service = column![
        field_label("Preferred Service"),
        pick_list(SERVICE_OPTIONS, form.service, Message::ServicePicked)
            .placeholder("Select a service")
            .padding(12)
            .text_size(14)
            .width(Fill)
            .style(theme::dropdown),
    ]
    .spacing(6);

    let date = column![
        field_label("Preferred Date"),
        text_input("YYYY-MM-DD", &form.date)
            .on_input(Message::DateChanged)
            .padding(12)
            .size(14)
            .style(theme::input),
    ]
    .spacing(6)
    .width(Fill);

    let time = column![
        field_label("Preferred Time"),
        text_input("HH:MM", &form.time)
            .on_input(Message::TimeChanged)
            .padding(12)
            .size(14)
            .style(theme::input),
    ]
    .spacing(6)
    .width(Fill);

    let note = column![
        field_label("Additional Message"),
        text_input("Anything else you would like us to know?", &form.message)
            .on_input(Message::NoteChanged)
            .padding(12)
            .size(14)
            .style(theme::input),
    ]
    .spacing(6);

    // Disabled until every required field is filled
    let submit = button(
        text("Book via WhatsApp")
            .size(16)
            .font(theme::bold())
            .width(Fill)
            .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(14)
    .style(theme::primary_button)
    .on_press_maybe(form.is_complete().then_some(Message::SubmitBooking));

    container(
        column![
            text("Book Your Appointment")
                .size(24)
                .font(theme::bold())
                .style(|t| text::Style {
                    color: Some(theme::text_primary(t)),
                }),
            row![first_name, last_name].spacing(16),
            service,
            row![date, time].spacing(16),
            note,
            submit,
        ]
        .spacing(18),
    )
    .width(Fill)
    .padding(32)
    .style(theme::panel)
    .into()
}

fn info_row<'a>(icon: &'static str, label: &'a str, value: &'a str) -> Element<'a, Message> {
    row![
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(22)
            .height(22)
            .style(|t, _status| svg::Style {
                color: Some(theme::accent_text(t)),
            }),
        column![
            text(label).size(14).font(theme::bold()).style(|t| text::Style {
                color: Some(theme::text_primary(t)),
            }),
            text(value).size(13).style(|t| text::Style {
                color: Some(theme::text_secondary(t)),
            }),
        ]
        .spacing(2),
    ]
    .spacing(14)
    .align_y(Alignment::Start)
    .into()
}

fn info_panel() -> Element<'static, Message> {
    let contact_info = container(
        column![
            text("Contact Information")
                .size(24)
                .font(theme::bold())
                .style(|t| text::Style {
                    color: Some(theme::text_primary(t)),
                }),
            info_row(icons::MAP_PIN, "Address", ADDRESS),
            info_row(icons::PHONE, "Phone", PHONE),
            info_row(icons::CLOCK, "Business Hours", HOURS),
            button(text("Open in Google Maps").size(14).font(theme::bold()))
                .padding(Padding::new(10.0).left(24).right(24))
                .style(theme::outline_button)
                .on_press(Message::OpenExternal(MAPS_URL.to_string())),
        ]
        .spacing(18),
    )
    .width(Fill)
    .padding(32)
    .style(theme::panel);

    let social_button = |icon: &'static str, url: &'static str| {
        button(
            svg(svg::Handle::from_memory(icon.as_bytes()))
                .width(22)
                .height(22)
                .style(|_theme, _status| svg::Style {
                    color: Some(iced::Color::WHITE),
                }),
        )
        .padding(12)
        .style(theme::primary_button)
        .on_press(Message::OpenExternal(url.to_string()))
    };

    let follow = container(
        column![
            text("Follow Us").size(24).font(theme::bold()).style(|t| text::Style {
                color: Some(theme::text_primary(t)),
            }),
            row![
                social_button(icons::INSTAGRAM, INSTAGRAM_URL),
                social_button(icons::FACEBOOK, FACEBOOK_URL),
            ]
            .spacing(12),
        ]
        .spacing(18),
    )
    .width(Fill)
    .padding(32)
    .style(theme::panel);

    column![contact_info, follow].spacing(24).width(Fill).into()
}
