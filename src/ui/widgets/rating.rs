//! Star rating widget
//!
//! Renders display-only ratings as a row of stars. Values are never
//! validated or recomputed here.

use iced::widget::{row, text};
use iced::{Alignment, Element};

use crate::ui::theme;

const STAR: &str = "★";

/// A row of `filled` gold stars out of `total`.
pub fn stars<'a, Message: 'a>(filled: u8, total: u8, size: u16) -> Element<'a, Message> {
    let mut stars = row![].spacing(2).align_y(Alignment::Center);
    for i in 0..total {
        let color = if i < filled {
            theme::GOLD_LIGHT
        } else {
            theme::STAR_OFF
        };
        stars = stars.push(text(STAR).size(f32::from(size)).color(color));
    }
    stars.into()
}

/// Stars plus the numeric score, e.g. ★★★★★ (4.9)
pub fn stars_with_score<'a, Message: 'a>(rating: f32, size: u16) -> Element<'a, Message> {
    let filled = rating.floor().clamp(0.0, 5.0) as u8;
    row![
        stars(filled, 5, size),
        text(format!("({rating})")).size(14).style(|t| text::Style {
            color: Some(theme::text_muted(t)),
        }),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}
