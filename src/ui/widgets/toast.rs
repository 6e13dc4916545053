//! Toast notification widget
//!
//! Minimal floating notice with an accent-colored indicator icon.

use iced::widget::{container, row, text};
use iced::{Alignment, Element, Padding};

use crate::ui::theme;

/// Toast notification style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Error,
}

impl ToastStyle {
    fn accent_color(&self) -> iced::Color {
        match self {
            ToastStyle::Success => theme::SUCCESS,
            ToastStyle::Error => theme::DANGER,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Success => "✓",
            ToastStyle::Error => "✗",
        }
    }
}

/// Toast notification data
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: ToastStyle::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: ToastStyle::Error,
        }
    }
}

/// Build a toast notification widget
pub fn view_toast<'a, Message: 'a>(toast: &'a Toast) -> Element<'a, Message> {
    let accent = toast.style.accent_color();

    container(
        row![
            text(toast.style.icon()).size(16).color(accent),
            text(&toast.message).size(14).style(|t| text::Style {
                color: Some(theme::text_primary(t)),
            }),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(Padding::new(12.0).left(18).right(18))
    .style(theme::toast)
    .into()
}
