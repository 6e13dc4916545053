//! Image pipeline handlers
//!
//! iced renders images from disk, so every resolved URL goes through one
//! download into the cache directory. Already-cached files are picked up
//! synchronously; misses are fetched in the background and land as
//! `ImageFetched` messages. A failed download leaves the placeholder box in
//! place — no retry.

use iced::Task;
use tracing::warn;

use crate::api::images;
use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Queue downloads for any of `urls` not yet cached or in flight.
    pub(in crate::app) fn fetch_images(&mut self, urls: Vec<String>) -> Task<Message> {
        let mut tasks = Vec::new();

        for url in urls {
            if self.ui.images.contains(&url) || self.ui.images.is_pending(&url) {
                continue;
            }

            let path = images::cache_path(&url);
            if path.exists() {
                self.ui.images.insert_from_path(&url, &path);
                continue;
            }

            self.ui.images.mark_pending(&url);
            let client = self.core.client.clone();
            tasks.push(Task::perform(
                async move {
                    match client.download(&url, &path).await {
                        Ok(()) => (url, Some(path)),
                        Err(err) => {
                            warn!("image download failed: {err:#}");
                            (url, None)
                        }
                    }
                },
                |(url, path)| Message::ImageFetched(url, path),
            ));
        }

        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    /// Handle settled image downloads
    pub fn handle_images(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ImageFetched(url, Some(path)) => {
                self.ui.images.insert_from_path(url, path);
                Some(Task::none())
            }
            Message::ImageFetched(url, None) => {
                self.ui.images.clear_pending(url);
                Some(Task::none())
            }
            _ => None,
        }
    }
}
