//! Navigation handlers
//!
//! Anchor navigation maps each section to a fixed offset in the page
//! scrollable; the scroll position is tracked back to highlight the active
//! nav entry. External links open in the system browser.

use iced::Task;
use tracing::warn;

use crate::app::message::Message;
use crate::app::state::{App, Section};

/// Widget id of the page scrollable.
pub const PAGE_SCROLL_ID: &str = "page_scroll";

/// Vertical offsets of the section anchors in the page scrollable.
const SECTION_POSITIONS: [(Section, f32); 6] = [
    (Section::Home, 0.0),
    (Section::Services, 860.0),
    (Section::Gallery, 2250.0),
    (Section::Courses, 3180.0),
    (Section::Testimonials, 4330.0),
    (Section::Contact, 5100.0),
];

/// Get scroll position for a section
pub fn section_scroll_position(section: Section) -> f32 {
    SECTION_POSITIONS
        .iter()
        .find(|(s, _)| *s == section)
        .map(|(_, pos)| *pos)
        .unwrap_or(0.0)
}

/// Get section from scroll position
pub fn section_from_scroll_position(y_offset: f32) -> Section {
    // Small lead so the nav highlight flips slightly before the anchor lands
    let search_offset = y_offset + 50.0;

    let mut current = Section::Home;
    for (section, pos) in SECTION_POSITIONS.iter() {
        if search_offset >= *pos {
            current = *section;
        } else {
            break;
        }
    }
    current
}

impl App {
    /// Handle navigation related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ScrollToSection(section) => {
                self.ui.active_section = *section;
                let target_y = section_scroll_position(*section);
                Some(iced::widget::operation::scroll_to(
                    iced::widget::Id::new(PAGE_SCROLL_ID),
                    iced::widget::scrollable::AbsoluteOffset {
                        x: Some(0.0),
                        y: Some(target_y),
                    },
                ))
            }

            Message::PageScrolled(y_offset) => {
                self.ui.active_section = section_from_scroll_position(*y_offset);
                Some(Task::none())
            }

            Message::OpenExternal(url) => {
                if let Err(err) = webbrowser::open(url) {
                    warn!("failed to open {url}: {err}");
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
    fn anchor_offsets_round_trip_to_their_section() {
        for section in Section::ALL {
            let y = section_scroll_position(section);
            assert_eq!(section_from_scroll_position(y), section);
        }
    }

    #[test]
    fn positions_are_strictly_increasing_in_display_order() {
        let mut previous = -1.0_f32;
        for section in Section::ALL {
            let y = section_scroll_position(section);
            assert!(y > previous, "{section:?} must come after the previous anchor");
            previous = y;
        }
    }

    #[test]
    fn top_of_page_is_home() {
        assert_eq!(section_from_scroll_position(0.0), Section::Home);
    }

    #[test]
    fn scrolling_just_short_of_an_anchor_already_highlights_it() {
        let services_y = section_scroll_position(Section::Services);
        assert_eq!(
            section_from_scroll_position(services_y - 40.0),
            Section::Services
        );
        assert_eq!(
            section_from_scroll_position(services_y - 60.0),
            Section::Home
        );
    }

    #[test]
    fn deep_scroll_lands_on_contact() {
        assert_eq!(section_from_scroll_position(99_999.0), Section::Contact);
    }
}
