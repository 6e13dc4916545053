//! Gallery section
//!
//! Square tile grid; selecting a tile opens the lightbox at that position.
//! When the record list is empty no tile exists, so the lightbox stays
//! unreachable.

use iced::widget::{button, column, container, row, stack, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::api::content::ContentConfig;
use crate::api::images;
use crate::api::model::GalleryImage;
use crate::app::{ImageStore, Message, SectionState};
use crate::ui::components::remote_image;
use crate::ui::widgets::{loading, section_header};
use crate::ui::theme;

const TILE_SIZE: f32 = 360.0;

pub fn view<'a>(
    state: &'a SectionState<GalleryImage>,
    images_store: &'a ImageStore,
    config: &ContentConfig,
) -> Element<'a, Message> {
    let header = section_header::view(
        None,
        "Our Work Gallery",
        "Explore our stunning portfolio of nail art, eyelash extensions, and \
         permanent makeup transformations.",
    );

    let body: Element<'a, Message> = if state.is_loading() {
        loading::view("Loading gallery...")
    } else {
        let mut grid = column![].spacing(24);
        let mut tiles = row![].spacing(24);
        let mut in_row = 0;

        for (index, image) in state.records().iter().enumerate() {
            tiles = tiles.push(tile(image, index, images_store, config));
            in_row += 1;
            if in_row == 3 {
                grid = grid.push(tiles);
                tiles = row![].spacing(24);
                in_row = 0;
            }
        }
        if in_row > 0 {
            grid = grid.push(tiles);
        }

        grid.into()
    };

    container(
        column![header, body]
            .spacing(48)
            .align_x(Alignment::Center)
            .padding(Padding::new(64.0).top(80.0).bottom(80.0)),
    )
    .width(Fill)
    .style(theme::section_alt)
    .into()
}

fn tile<'a>(
    image: &'a GalleryImage,
    index: usize,
    images_store: &'a ImageStore,
    config: &ContentConfig,
) -> Element<'a, Message> {
    let url = images::gallery_image_url(config, image, index);
    let photo = remote_image(images_store, &url, TILE_SIZE, TILE_SIZE, 16.0);

    let category = container(
        container(text(&image.category).size(13).font(theme::medium()))
            .padding(Padding::new(5.0).left(12).right(12))
            .style(theme::tag),
    )
    .width(TILE_SIZE)
    .height(TILE_SIZE)
    .align_y(Alignment::End)
    .padding(14);

    button(stack![photo, category])
        .padding(0)
        .style(theme::bare_button)
        .on_press(Message::OpenLightbox(index))
        .into()
}
