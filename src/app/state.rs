// src/app/state.rs
//! Application state definitions

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::api::{
    ContentClient, ContentOrigin, Course, GalleryImage, LoadOutcome, Service, Testimonial,
};
use crate::features::{BookingForm, Settings};
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Core infrastructure (Settings, content client)
    pub core: CoreState,
    /// Section record lists and their load phases
    pub content: ContentState,
    /// UI state (navigation, carousel, lightbox, form, images)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
    pub client: ContentClient,
}

impl CoreState {
    pub fn new(settings: Settings, client: ContentClient) -> Self {
        Self { settings, client }
    }
}

/// Load phase of one content section.
///
/// `Loading → Remote | Fallback`; both loaded phases are terminal — a section
/// is queried exactly once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Remote,
    Fallback,
}

/// One section's record list plus where it stands in the load sequence.
#[derive(Debug, Clone)]
pub struct SectionState<T> {
    records: Vec<T>,
    phase: LoadPhase,
}

impl<T> Default for SectionState<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            phase: LoadPhase::Loading,
        }
    }
}

impl<T> SectionState<T> {
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Apply a finished load. Terminal: later calls replace the records but
    /// the phase can never return to `Loading`.
    pub fn resolve(&mut self, outcome: LoadOutcome<T>) {
        self.records = outcome.records;
        self.phase = match outcome.origin {
            ContentOrigin::Remote => LoadPhase::Remote,
            ContentOrigin::Fallback => LoadPhase::Fallback,
        };
    }
}

/// Record lists for the four content-bearing sections.
///
/// Each section loads independently; completions may arrive in any order.
#[derive(Default)]
pub struct ContentState {
    pub services: SectionState<Service>,
    pub gallery: SectionState<GalleryImage>,
    pub courses: SectionState<Course>,
    pub testimonials: SectionState<Testimonial>,
}

/// Page sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    Gallery,
    Courses,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Services,
        Section::Gallery,
        Section::Courses,
        Section::Testimonials,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::Gallery => "Gallery",
            Section::Courses => "Courses",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }
}

/// Gallery lightbox state machine.
///
/// `Open(index)` always holds a valid position into the gallery records; the
/// open transition is only reachable from an existing tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(usize),
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Lightbox::Open(index) => Some(*index),
            Lightbox::Closed => None,
        }
    }

    /// Advance with wraparound. No-op while closed.
    pub fn next(&mut self, len: usize) {
        if let Lightbox::Open(index) = self {
            if len > 0 {
                *index = (*index + 1) % len;
            }
        }
    }

    /// Retreat with wraparound. No-op while closed.
    pub fn previous(&mut self, len: usize) {
        if let Lightbox::Open(index) = self {
            if len > 0 {
                *index = if *index == 0 { len - 1 } else { *index - 1 };
            }
        }
    }
}

/// Hero carousel state.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeroState {
    pub current_image: usize,
}

/// Downloaded image handles keyed by resolved URL.
///
/// `pending` tracks in-flight downloads so a URL is requested at most once.
#[derive(Default)]
pub struct ImageStore {
    handles: HashMap<String, iced::widget::image::Handle>,
    pending: HashSet<String>,
}

impl ImageStore {
    pub fn get(&self, url: &str) -> Option<&iced::widget::image::Handle> {
        self.handles.get(url)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.handles.contains_key(url)
    }

    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.contains(url)
    }

    pub fn mark_pending(&mut self, url: &str) {
        self.pending.insert(url.to_string());
    }

    pub fn clear_pending(&mut self, url: &str) {
        self.pending.remove(url);
    }

    pub fn insert_from_path(&mut self, url: &str, path: &Path) {
        self.pending.remove(url);
        self.handles.insert(
            url.to_string(),
            iced::widget::image::Handle::from_path(path),
        );
    }
}

/// UI View State
pub struct UiState {
    /// Section currently highlighted in the header nav
    pub active_section: Section,
    pub hero: HeroState,
    pub lightbox: Lightbox,
    pub booking: BookingForm,
    /// Service card under the cursor
    pub hovered_service: Option<String>,
    pub images: ImageStore,
    pub toast: Option<Toast>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_section: Section::Home,
            hero: HeroState::default(),
            lightbox: Lightbox::default(),
            booking: BookingForm::default(),
            hovered_service: None,
            images: ImageStore::default(),
            toast: None,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl App {
    /// State-only constructor for tests: no disk reads, no network.
    pub(crate) fn bare() -> Self {
        Self {
            core: CoreState::new(Settings::default(), ContentClient::default()),
            content: ContentState::default(),
            ui: UiState::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fallback;

    mod section_state {
        use super::*;

        #[test]
        fn starts_loading_and_empty() {
            let state: SectionState<Service> = SectionState::default();
            assert!(state.is_loading());
            assert!(state.is_empty());
        }

        #[test]
        fn remote_resolution_is_terminal() {
            let mut state: SectionState<Service> = SectionState::default();
            state.resolve(LoadOutcome {
                records: fallback::services(),
                origin: ContentOrigin::Remote,
            });
            assert_eq!(state.phase(), LoadPhase::Remote);
            assert!(!state.is_loading());
            assert_eq!(state.len(), 3);
        }

        #[test]
        fn fallback_resolution_carries_the_fixed_records() {
            let mut state: SectionState<Course> = SectionState::default();
            state.resolve(LoadOutcome {
                records: fallback::courses(),
                origin: ContentOrigin::Fallback,
            });
            assert_eq!(state.phase(), LoadPhase::Fallback);
            assert_eq!(state.records(), fallback::courses());
        }
    }

    mod lightbox {
        use super::*;

        #[test]
        fn n_next_calls_wrap_modulo_length() {
            let len = 6;
            for start in 0..len {
                for steps in 0..=2 * len {
                    let mut lightbox = Lightbox::Open(start);
                    for _ in 0..steps {
                        lightbox.next(len);
                    }
                    assert_eq!(lightbox.index(), Some((start + steps) % len));
                }
            }
        }

        #[test]
        fn previous_from_zero_wraps_to_last() {
            let mut lightbox = Lightbox::Open(0);
            lightbox.previous(6);
            assert_eq!(lightbox.index(), Some(5));
        }

        #[test]
        fn next_then_previous_is_identity() {
            let mut lightbox = Lightbox::Open(3);
            lightbox.next(6);
            lightbox.previous(6);
            assert_eq!(lightbox.index(), Some(3));
        }

        #[test]
        fn transitions_are_noops_while_closed() {
            let mut lightbox = Lightbox::Closed;
            lightbox.next(6);
            lightbox.previous(6);
            assert_eq!(lightbox, Lightbox::Closed);
            assert!(!lightbox.is_open());
        }
    }

    mod image_store {
        use super::*;

        #[test]
        fn pending_urls_are_tracked_once() {
            let mut store = ImageStore::default();
            assert!(!store.is_pending("https://example.com/a.jpg"));
            store.mark_pending("https://example.com/a.jpg");
            assert!(store.is_pending("https://example.com/a.jpg"));
            store.clear_pending("https://example.com/a.jpg");
            assert!(!store.is_pending("https://example.com/a.jpg"));
            assert!(!store.contains("https://example.com/a.jpg"));
        }
    }
}
