//! Content section load handlers
//!
//! Every section runs the same sequence: configured? → query → success or
//! fallback. The generic loader lives in `api::content`; this module fans the
//! four loads out at startup and applies the outcomes as they arrive, in any
//! order. Each outcome also queues the downloads for that section's images.

use iced::Task;
use tracing::debug;

use crate::api::content::{load_section, queries};
use crate::api::{fallback, images};
use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Kick off all four section loads. Called once from `App::new`.
    pub(in crate::app) fn load_all_sections(&self) -> Task<Message> {
        let client = self.core.client.clone();
        Task::batch([
            Task::perform(
                load_section(
                    client.clone(),
                    "services",
                    queries::SERVICES,
                    fallback::services,
                ),
                Message::ServicesLoaded,
            ),
            Task::perform(
                load_section(
                    client.clone(),
                    "gallery",
                    queries::GALLERY,
                    fallback::gallery,
                ),
                Message::GalleryLoaded,
            ),
            Task::perform(
                load_section(
                    client.clone(),
                    "courses",
                    queries::COURSES,
                    fallback::courses,
                ),
                Message::CoursesLoaded,
            ),
            Task::perform(
                load_section(
                    client,
                    "testimonials",
                    queries::TESTIMONIALS,
                    fallback::testimonials,
                ),
                Message::TestimonialsLoaded,
            ),
        ])
    }

    /// Handle content load results
    pub fn handle_content(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ServicesLoaded(outcome) => {
                debug!(
                    "services loaded: {} records ({:?})",
                    outcome.records.len(),
                    outcome.origin
                );
                self.content.services.resolve(outcome.clone());

                let config = self.core.client.config().clone();
                let urls = self
                    .content
                    .services
                    .records()
                    .iter()
                    .map(|service| images::service_image_url(&config, service))
                    .collect();
                Some(self.fetch_images(urls))
            }

            Message::GalleryLoaded(outcome) => {
                debug!(
                    "gallery loaded: {} records ({:?})",
                    outcome.records.len(),
                    outcome.origin
                );
                self.content.gallery.resolve(outcome.clone());

                let config = self.core.client.config().clone();
                let urls = self
                    .content
                    .gallery
                    .records()
                    .iter()
                    .enumerate()
                    .map(|(index, image)| images::gallery_image_url(&config, image, index))
                    .collect();
                Some(self.fetch_images(urls))
            }

            Message::CoursesLoaded(outcome) => {
                debug!(
                    "courses loaded: {} records ({:?})",
                    outcome.records.len(),
                    outcome.origin
                );
                self.content.courses.resolve(outcome.clone());

                let config = self.core.client.config().clone();
                let urls = self
                    .content
                    .courses
                    .records()
                    .iter()
                    .map(|course| images::course_image_url(&config, course))
                    .collect();
                Some(self.fetch_images(urls))
            }

            Message::TestimonialsLoaded(outcome) => {
                debug!(
                    "testimonials loaded: {} records ({:?})",
                    outcome.records.len(),
                    outcome.origin
                );
                self.content.testimonials.resolve(outcome.clone());

                let config = self.core.client.config().clone();
                let urls = self
                    .content
                    .testimonials
                    .records()
                    .iter()
                    .enumerate()
                    .map(|(index, t)| images::testimonial_image_url(&config, t, index))
                    .collect();
                Some(self.fetch_images(urls))
            }

            Message::HoverService(id) => {
                self.ui.hovered_service = id.clone();
                Some(Task::none())
            }

            _ => None,
        }
    }
}
