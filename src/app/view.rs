// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, scrollable, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use super::state::Lightbox;
use super::update::navigation::PAGE_SCROLL_ID;
use crate::ui::{components, theme, widgets};

impl App {
    /// Build the single-page view: one scrollable column of sections with
    /// the fixed header, lightbox, and toast stacked on top.
    pub fn view(&self) -> Element<'_, Message> {
        let config = self.core.client.config();

        let page = scrollable(
            column![
                components::hero::view(&self.ui.hero, &self.ui.images),
                components::services::view(
                    &self.content.services,
                    self.ui.hovered_service.as_deref(),
                    &self.ui.images,
                    config,
                ),
                components::gallery::view(&self.content.gallery, &self.ui.images, config),
                components::courses::view(&self.content.courses, &self.ui.images, config),
                components::testimonials::view(
                    &self.content.testimonials,
                    &self.ui.images,
                    config,
                ),
                components::contact::view(&self.ui.booking),
                components::footer::view(),
            ]
            .width(Fill),
        )
        .width(Fill)
        .height(Fill)
        .id(iced::widget::Id::new(PAGE_SCROLL_ID))
        .on_scroll(|viewport| {
            let offset = viewport.absolute_offset();
            Message::PageScrolled(offset.y)
        });

        let page = container(page).width(Fill).height(Fill).style(theme::page);

        // Fixed header floats over the scrolled content
        let header_overlay = container(components::header::view(
            self.ui.active_section,
            self.core.settings.display.dark_mode,
        ))
        .width(Fill);

        // Lightbox overlay (empty space if closed)
        let lightbox_overlay: Element<'_, Message> = match self.ui.lightbox {
            Lightbox::Open(index) => match self.content.gallery.records().get(index) {
                Some(image) => components::lightbox::view(
                    image,
                    index,
                    self.content.gallery.len(),
                    &self.ui.images,
                    config,
                ),
                None => Space::new().width(0).height(0).into(),
            },
            Lightbox::Closed => Space::new().width(0).height(0).into(),
        };

        // Toast overlay (empty space if not visible)
        let toast_overlay: Element<'_, Message> = if let Some(toast) = &self.ui.toast {
            container(widgets::view_toast(toast))
                .width(Fill)
                .padding(24)
                .align_x(Alignment::Center)
                .align_y(Alignment::End)
                .height(Fill)
                .into()
        } else {
            Space::new().width(0).height(0).into()
        };

        stack![page, header_overlay, lightbox_overlay, toast_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
