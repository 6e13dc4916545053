//! Message update handlers - thin dispatcher delegating to submodules

mod contact;
mod content;
mod gallery;
mod hero;
mod images;
pub mod navigation;
mod settings;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }
        if let Some(task) = self.handle_content(&message) {
            return task;
        }
        if let Some(task) = self.handle_images(&message) {
            return task;
        }
        if let Some(task) = self.handle_hero(&message) {
            return task;
        }
        if let Some(task) = self.handle_gallery(&message) {
            return task;
        }
        if let Some(task) = self.handle_contact(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
