//! Application messages

use std::path::PathBuf;

use crate::api::{Course, GalleryImage, LoadOutcome, Service, Testimonial};
use crate::app::state::Section;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// No-op message for event interception (modal backdrop clicks)
    Noop,

    // ============ Navigation ============
    /// Smooth-scroll the page to a section
    ScrollToSection(Section),
    /// Page scrolled (y offset in pixels)
    PageScrolled(f32),
    /// Open a URL in the system browser
    OpenExternal(String),

    // ============ Theme ============
    /// Invert the dark-mode flag
    ToggleDarkMode,
    /// Write the current settings to disk
    SaveSettings,

    // ============ Hero carousel ============
    /// Periodic auto-advance
    CarouselTick,
    /// Indicator dot selected
    SelectHeroImage(usize),

    // ============ Content loads ============
    ServicesLoaded(LoadOutcome<Service>),
    GalleryLoaded(LoadOutcome<GalleryImage>),
    CoursesLoaded(LoadOutcome<Course>),
    TestimonialsLoaded(LoadOutcome<Testimonial>),

    // ============ Images ============
    /// An image download settled; `None` means it failed and the section
    /// keeps its placeholder
    ImageFetched(String, Option<PathBuf>),

    // ============ Services ============
    /// Hover over a service card
    HoverService(Option<String>),

    // ============ Gallery lightbox ============
    OpenLightbox(usize),
    CloseLightbox,
    LightboxNext,
    LightboxPrevious,

    // ============ Booking form ============
    FirstNameChanged(String),
    LastNameChanged(String),
    ServicePicked(&'static str),
    DateChanged(String),
    TimeChanged(String),
    NoteChanged(String),
    SubmitBooking,

    // ============ Toasts ============
    ShowToast(String),
    ShowErrorToast(String),
    HideToast,
}
