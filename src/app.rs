//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::api::{ContentClient, ContentConfig, images};
use crate::features::Settings;

pub use message::Message;
pub use state::{
    App, ContentState, CoreState, HeroState, ImageStore, Lightbox, LoadPhase, Section,
    SectionState, UiState,
};
pub use update::navigation::PAGE_SCROLL_ID;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Resolve the theme first: persisted value, else the OS signal
        let settings = Settings::load_or_detect();

        // 2. Construct the content client once; async tasks clone it
        let client = ContentClient::new(ContentConfig::default());
        let core = CoreState::new(settings, client);

        let mut app = Self {
            core,
            content: ContentState::default(),
            ui: UiState::new(),
        };

        // 3. Fan out the four section loads and the hero carousel images.
        //    Each load settles independently, in any order.
        let content_task = app.load_all_sections();
        let hero_task =
            app.fetch_images(images::HERO_IMAGES.iter().map(|url| url.to_string()).collect());

        (app, Task::batch([content_task, hero_task]))
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self) -> String {
        "i Nails Art & Studio".to_string()
    }

    /// Subscriptions for the hero carousel auto-advance
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::time::Duration;

        if subscription_logic::needs_carousel_subscription(self.ui.lightbox.is_open()) {
            iced::time::every(Duration::from_secs(4)).map(|_| Message::CarouselTick)
        } else {
            iced::Subscription::none()
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// The carousel keeps rotating whenever the page is visible; the lightbox
    /// covers it entirely, so rotation pauses until it closes.
    pub fn needs_carousel_subscription(lightbox_open: bool) -> bool {
        !lightbox_open
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn carousel_runs_while_the_page_is_visible() {
        assert!(needs_carousel_subscription(false));
    }

    #[test]
    fn carousel_pauses_under_the_lightbox() {
        assert!(!needs_carousel_subscription(true));
    }
}
