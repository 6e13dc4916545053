//! Content model types
//!
//! Record shapes returned by the content API. Each section owns one flat,
//! read-only list of these; the ids are unique within a list.

use serde::Deserialize;

/// A reference to an externally hosted image asset.
///
/// The content source serializes this as either `null` or
/// `{ "asset": { "_ref": "image-<id>-<WxH>-<ext>" }, "hotspot": { .. } }`.
/// Modeled as a tagged union so resolution logic is exhaustively checked
/// instead of poking at an untyped payload.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Option<RawImage>")]
pub enum ImageRef {
    #[default]
    None,
    Remote {
        asset_id: String,
        hotspot: Option<Hotspot>,
    },
}

impl ImageRef {
    pub fn is_none(&self) -> bool {
        matches!(self, ImageRef::None)
    }

    /// Build a remote reference from a raw asset id (used by tests).
    pub fn remote(asset_id: impl Into<String>) -> Self {
        ImageRef::Remote {
            asset_id: asset_id.into(),
            hotspot: None,
        }
    }
}

/// Crop focus point as stored by the content source.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Hotspot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Wire shape of a non-null image field.
#[derive(Debug, Clone, Deserialize)]
pub struct RawImage {
    pub asset: AssetPointer,
    #[serde(default)]
    pub hotspot: Option<Hotspot>,
}

/// Pointer to the underlying asset document.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetPointer {
    #[serde(rename = "_ref")]
    pub reference: String,
}

impl From<Option<RawImage>> for ImageRef {
    fn from(raw: Option<RawImage>) -> Self {
        match raw {
            Some(img) => ImageRef::Remote {
                asset_id: img.asset.reference,
                hotspot: img.hotspot,
            },
            None => ImageRef::None,
        }
    }
}

/// A beauty treatment offered by the studio.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub image: ImageRef,
    #[serde(default)]
    pub popular: bool,
}

/// A portfolio photo shown in the gallery grid and lightbox.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    #[serde(default)]
    pub image: ImageRef,
    pub alt: String,
    pub category: String,
}

/// A client quote. The rating is display-only and never recomputed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub image: ImageRef,
    pub rating: u8,
    pub text: String,
    pub service: String,
}

/// A professional training course.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub students: String,
    pub rating: f32,
    pub price: String,
    #[serde(default)]
    pub image: ImageRef,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_ref_from_null_is_none() {
        let json = r#"{ "id": "1", "image": null, "alt": "a", "category": "Nail Art" }"#;
        let record: GalleryImage = serde_json::from_str(json).unwrap();
        assert_eq!(record.image, ImageRef::None);
    }

    #[test]
    fn image_ref_missing_field_is_none() {
        let json = r#"{ "id": "1", "alt": "a", "category": "Nail Art" }"#;
        let record: GalleryImage = serde_json::from_str(json).unwrap();
        assert!(record.image.is_none());
    }

    #[test]
    fn image_ref_from_asset_pointer() {
        let json = r#"{
            "id": "1",
            "image": {
                "asset": { "_ref": "image-abc123-800x600-jpg" },
                "hotspot": { "x": 0.5, "y": 0.5, "width": 1.0, "height": 1.0 }
            },
            "alt": "a",
            "category": "Nail Art"
        }"#;
        let record: GalleryImage = serde_json::from_str(json).unwrap();
        match record.image {
            ImageRef::Remote { asset_id, hotspot } => {
                assert_eq!(asset_id, "image-abc123-800x600-jpg");
                assert!(hotspot.is_some());
            }
            ImageRef::None => panic!("expected remote image reference"),
        }
    }

    #[test]
    fn service_defaults_for_optional_fields() {
        let json = r#"{ "id": "1", "title": "Nail Art", "description": "d" }"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert!(!service.popular);
        assert!(service.features.is_empty());
        assert!(service.image.is_none());
    }

    #[test]
    fn course_deserializes_full_document() {
        let json = r#"{
            "id": "c1",
            "title": "Professional Eyelash Extensions Course",
            "duration": "3 Days",
            "students": "50+",
            "rating": 4.9,
            "price": "$899",
            "image": null,
            "description": "d",
            "highlights": ["Eye Mapping & Design"],
            "featured": true
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert!(course.featured);
        assert_eq!(course.highlights.len(), 1);
        assert!((course.rating - 4.9).abs() < f32::EPSILON);
    }
}
