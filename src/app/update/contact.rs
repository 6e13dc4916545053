//! Booking form handlers
//!
//! Field edits mutate the form in place; submission opens the WhatsApp deep
//! link in the system browser. There is no server round-trip and nothing is
//! persisted.

use iced::Task;
use tracing::{info, warn};

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::widgets::Toast;

impl App {
    /// Handle booking form and toast related messages
    pub fn handle_contact(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::FirstNameChanged(value) => {
                self.ui.booking.first_name = value.clone();
                Some(Task::none())
            }
            Message::LastNameChanged(value) => {
                self.ui.booking.last_name = value.clone();
                Some(Task::none())
            }
            Message::ServicePicked(option) => {
                self.ui.booking.service = Some(*option);
                Some(Task::none())
            }
            Message::DateChanged(value) => {
                self.ui.booking.date = value.clone();
                Some(Task::none())
            }
            Message::TimeChanged(value) => {
                self.ui.booking.time = value.clone();
                Some(Task::none())
            }
            Message::NoteChanged(value) => {
                self.ui.booking.message = value.clone();
                Some(Task::none())
            }

            Message::SubmitBooking => {
                // The submit button is disabled until the form is complete,
                // but guard anyway for keyboard-driven submits
                if !self.ui.booking.is_complete() {
                    return Some(Task::none());
                }

                let url = self.ui.booking.whatsapp_url();
                info!("opening booking deep link");
                match webbrowser::open(&url) {
                    Ok(()) => Some(Task::done(Message::ShowToast(
                        "Opening WhatsApp to send your booking request".to_string(),
                    ))),
                    Err(err) => {
                        warn!("failed to open booking link: {err}");
                        Some(Task::done(Message::ShowErrorToast(
                            "Could not open your browser. Please call us instead.".to_string(),
                        )))
                    }
                }
            }

            Message::ShowToast(text) => {
                self.ui.toast = Some(Toast::success(text.clone()));
                Some(Self::toast_timeout())
            }

            Message::ShowErrorToast(text) => {
                self.ui.toast = Some(Toast::error(text.clone()));
                Some(Self::toast_timeout())
            }

            Message::HideToast => {
                self.ui.toast = None;
                Some(Task::none())
            }

            _ => None,
        }
    }

    fn toast_timeout() -> Task<Message> {
        Task::perform(
            async {
                tokio::time::sleep(std::time::Duration::from_secs(3)).await;
            },
            |_| Message::HideToast,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::booking::SERVICE_OPTIONS;

    #[test]
    fn field_edits_land_in_the_form() {
        let mut app = App::bare();
        let _ = app.update(Message::FirstNameChanged("Sarah".into()));
        let _ = app.update(Message::LastNameChanged("Johnson".into()));
        let _ = app.update(Message::ServicePicked(SERVICE_OPTIONS[0]));
        let _ = app.update(Message::DateChanged("2025-08-14".into()));
        let _ = app.update(Message::TimeChanged("14:30".into()));
        let _ = app.update(Message::NoteChanged("See you soon".into()));

        assert!(app.ui.booking.is_complete());
        assert_eq!(app.ui.booking.service, Some(SERVICE_OPTIONS[0]));
        assert_eq!(app.ui.booking.message, "See you soon");
    }

    #[test]
    fn incomplete_submit_does_not_toast() {
        let mut app = App::bare();
        let _ = app.update(Message::SubmitBooking);
        assert!(app.ui.toast.is_none());
    }

    #[test]
    fn toasts_show_and_hide() {
        let mut app = App::bare();
        let _ = app.update(Message::ShowErrorToast("boom".into()));
        assert!(app.ui.toast.is_some());
        let _ = app.update(Message::HideToast);
        assert!(app.ui.toast.is_none());
    }
}
