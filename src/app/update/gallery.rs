//! Gallery lightbox handlers
//!
//! The lightbox is ephemeral UI state over the gallery records. Opening a
//! tile also requests the larger image variant for the enlarged view; the
//! grid tile stays visible until it arrives.

use iced::Task;

use crate::api::images;
use crate::app::message::Message;
use crate::app::state::{App, Lightbox};

impl App {
    /// Handle lightbox related messages
    pub fn handle_gallery(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenLightbox(index) => {
                // Only reachable from an existing tile
                if *index >= self.content.gallery.len() {
                    return Some(Task::none());
                }
                self.ui.lightbox = Lightbox::Open(*index);
                Some(self.fetch_lightbox_image(*index))
            }

            Message::CloseLightbox => {
                self.ui.lightbox = Lightbox::Closed;
                Some(Task::none())
            }

            Message::LightboxNext => {
                self.ui.lightbox.next(self.content.gallery.len());
                match self.ui.lightbox.index() {
                    Some(index) => Some(self.fetch_lightbox_image(index)),
                    None => Some(Task::none()),
                }
            }

            Message::LightboxPrevious => {
                self.ui.lightbox.previous(self.content.gallery.len());
                match self.ui.lightbox.index() {
                    Some(index) => Some(self.fetch_lightbox_image(index)),
                    None => Some(Task::none()),
                }
            }

            _ => None,
        }
    }

    /// Request the 1200x800 variant shown in the enlarged view.
    fn fetch_lightbox_image(&mut self, index: usize) -> Task<Message> {
        let config = self.core.client.config().clone();
        let url = self
            .content
            .gallery
            .records()
            .get(index)
            .map(|image| images::gallery_lightbox_url(&config, image, index));
        match url {
            Some(url) => self.fetch_images(vec![url]),
            None => Task::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::content::{ContentOrigin, LoadOutcome};
    use crate::api::fallback;

    fn app_with_gallery() -> App {
        let mut app = App::bare();
        app.content.gallery.resolve(LoadOutcome {
            records: fallback::gallery(),
            origin: ContentOrigin::Fallback,
        });
        app
    }

    #[test]
    fn opening_a_tile_sets_its_index() {
        let mut app = app_with_gallery();
        let _ = app.update(Message::OpenLightbox(4));
        assert_eq!(app.ui.lightbox, Lightbox::Open(4));
    }

    #[test]
    fn open_is_unreachable_for_missing_tiles() {
        let mut app = App::bare();
        let _ = app.update(Message::OpenLightbox(0));
        assert_eq!(app.ui.lightbox, Lightbox::Closed);

        let mut app = app_with_gallery();
        let _ = app.update(Message::OpenLightbox(99));
        assert_eq!(app.ui.lightbox, Lightbox::Closed);
    }

    #[test]
    fn next_and_previous_wrap_around_the_record_list() {
        let mut app = app_with_gallery();
        let len = app.content.gallery.len();

        let _ = app.update(Message::OpenLightbox(len - 1));
        let _ = app.update(Message::LightboxNext);
        assert_eq!(app.ui.lightbox, Lightbox::Open(0));

        let _ = app.update(Message::LightboxPrevious);
        assert_eq!(app.ui.lightbox, Lightbox::Open(len - 1));
    }

    #[test]
    fn close_is_unconditional() {
        let mut app = app_with_gallery();
        let _ = app.update(Message::OpenLightbox(2));
        let _ = app.update(Message::CloseLightbox);
        assert_eq!(app.ui.lightbox, Lightbox::Closed);

        let _ = app.update(Message::CloseLightbox);
        assert_eq!(app.ui.lightbox, Lightbox::Closed);
    }
}
