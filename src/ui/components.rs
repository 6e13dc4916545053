//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application state and are the only UI
//! layer that imports from `crate::app`. Each page section is one component
//! that renders whatever record list its loader produced.

pub mod contact;
pub mod courses;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod lightbox;
pub mod services;
pub mod testimonials;

pub use header::HEADER_HEIGHT;

use iced::widget::{Space, container, image};
use iced::{Element, Fill};

use crate::app::{ImageStore, Message};
use crate::ui::theme;

/// A downloaded image at fixed dimensions, or a neutral placeholder box
/// while the download is still in flight (or has failed).
pub(crate) fn remote_image<'a>(
    images: &'a ImageStore,
    url: &str,
    width: f32,
    height: f32,
    radius: f32,
) -> Element<'a, Message> {
    match images.get(url) {
        Some(handle) => container(
            image(handle.clone())
                .width(Fill)
                .height(Fill)
                .content_fit(iced::ContentFit::Cover),
        )
        .width(width)
        .height(height)
        .into(),
        None => container(Space::new().width(Fill).height(Fill))
            .width(width)
            .height(height)
            .style(move |t| {
                let mut style = theme::placeholder_box(t);
                style.border.radius = radius.into();
                style
            })
            .into(),
    }
}
