//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle settings related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode => {
                let dark_mode = !self.core.settings.display.dark_mode;
                self.core.settings.display.dark_mode = dark_mode;
                tracing::info!("Dark mode: {}", dark_mode);
                Some(Task::done(Message::SaveSettings))
            }

            Message::SaveSettings => {
                // Persist every change; failures are logged, never surfaced
                if let Err(err) = self.core.settings.save() {
                    tracing::warn!("failed to save settings: {err}");
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

    #[test]
    fn toggle_inverts_the_flag_each_time() {
        let mut app = App::bare();
        assert!(!app.core.settings.display.dark_mode);

        let _ = app.update(Message::ToggleDarkMode);
        assert!(app.core.settings.display.dark_mode);

        let _ = app.update(Message::ToggleDarkMode);
        assert!(!app.core.settings.display.dark_mode);
    }
}
