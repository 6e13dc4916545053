//! Gallery lightbox overlay
//!
//! Full-window enlarged view over the page with close, previous, and next
//! controls and a position caption. The enlarged image variant is requested
//! on open; the grid tile stands in until it arrives.

use iced::widget::{Space, button, container, mouse_area, row, stack, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::api::content::ContentConfig;
use crate::api::images;
use crate::api::model::GalleryImage;
use crate::app::{ImageStore, Message};
use crate::ui::components::remote_image;
use crate::ui::{icons, theme};

const IMAGE_WIDTH: f32 = 960.0;
const IMAGE_HEIGHT: f32 = 640.0;

pub fn view<'a>(
    image: &'a GalleryImage,
    index: usize,
    total: usize,
    images_store: &'a ImageStore,
    config: &ContentConfig,
) -> Element<'a, Message> {
    // Prefer the large variant, fall back to the already-loaded grid tile
    let large_url = images::gallery_lightbox_url(config, image, index);
    let tile_url = images::gallery_image_url(config, image, index);
    let url = if images_store.get(&large_url).is_some() {
        large_url
    } else {
        tile_url
    };

    let photo = remote_image(images_store, &url, IMAGE_WIDTH, IMAGE_HEIGHT, 12.0);

    let glass_icon = |source: &'static str, size: u16| {
        svg(svg::Handle::from_memory(source.as_bytes()))
            .width(f32::from(size))
            .height(f32::from(size))
            .style(|_theme, _status| svg::Style {
                color: Some(iced::Color::WHITE),
            })
    };

    let close = container(
        button(glass_icon(icons::CLOSE, 22))
            .padding(10)
            .style(theme::glass_button)
            .on_press(Message::CloseLightbox),
    )
    .width(Fill)
    .align_x(Alignment::End)
    .padding(20);

    let controls = row![
        button(glass_icon(icons::CHEVRON_LEFT, 26))
            .padding(12)
            .style(theme::glass_button)
            .on_press(Message::LightboxPrevious),
        Space::new().width(Fill),
        button(glass_icon(icons::CHEVRON_RIGHT, 26))
            .padding(12)
            .style(theme::glass_button)
            .on_press(Message::LightboxNext),
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(24.0))
    .width(Fill)
    .height(Fill);

    let caption = container(
        container(
            text(format!("{} • {} of {}", image.category, index + 1, total))
                .size(14)
                .font(theme::medium()),
        )
        .padding(Padding::new(8.0).left(18).right(18))
        .style(theme::lightbox_caption),
    )
    .width(Fill)
    .height(Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::End)
    .padding(28);

    let centered_photo = container(photo)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill);

    let backdrop = container(stack![centered_photo, close, controls, caption])
        .width(Fill)
        .height(Fill)
        .style(theme::lightbox_backdrop);

    // Swallow clicks so the page underneath never receives them
    mouse_area(backdrop).on_press(Message::Noop).into()
}
