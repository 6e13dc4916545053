//! Content source module
//!
//! Client, record models, fallback content, and image URL resolution for the
//! headless content API backing the page sections.

pub mod content;
pub mod fallback;
pub mod images;
pub mod model;

pub use content::{ContentClient, ContentConfig, ContentOrigin, LoadOutcome};
pub use model::{Course, GalleryImage, ImageRef, Service, Testimonial};
