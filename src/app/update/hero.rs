//! Hero carousel handlers

use iced::Task;

use crate::api::images::HERO_IMAGES;
use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle carousel related messages
    pub fn handle_hero(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CarouselTick => {
                self.ui.hero.current_image =
                    (self.ui.hero.current_image + 1) % HERO_IMAGES.len();
                Some(Task::none())
            }

            Message::SelectHeroImage(index) => {
                if *index < HERO_IMAGES.len() {
                    self.ui.hero.current_image = *index;
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::App;

    #[test]
    fn tick_advances_with_wraparound() {
        let mut app = App::bare();
        for expected in [1, 2, 0, 1] {
            let _ = app.update(Message::CarouselTick);
            assert_eq!(app.ui.hero.current_image, expected);
        }
    }

    #[test]
    fn indicator_selection_jumps_directly() {
        let mut app = App::bare();
        let _ = app.update(Message::SelectHeroImage(2));
        assert_eq!(app.ui.hero.current_image, 2);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut app = App::bare();
        let _ = app.update(Message::SelectHeroImage(HERO_IMAGES.len()));
        assert_eq!(app.ui.hero.current_image, 0);
    }
}
