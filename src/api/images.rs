//! Image URL resolution and disk cache paths
//!
//! A record's image is either a remote asset reference (resolved against the
//! content CDN at the requested dimensions) or absent, in which case a fixed
//! placeholder is chosen deterministically: by title keyword for services and
//! courses, by list position for gallery tiles and testimonial portraits.
//!
//! iced renders images from disk, so every resolved URL is downloaded once
//! into the cache directory and keyed by an xxh3 hash of the URL.

use std::path::PathBuf;

use xxhash_rust::xxh3::xxh3_64;

use super::content::ContentConfig;
use super::model::{Course, GalleryImage, ImageRef, Service, Testimonial};

pub const SERVICE_DIMS: (u32, u32) = (800, 600);
pub const GALLERY_TILE_DIMS: (u32, u32) = (600, 600);
pub const GALLERY_LIGHTBOX_DIMS: (u32, u32) = (1200, 800);
pub const TESTIMONIAL_DIMS: (u32, u32) = (300, 300);
pub const COURSE_DIMS: (u32, u32) = (800, 600);

/// Fixed hero carousel rotation.
pub const HERO_IMAGES: [&str; 3] = [
    "https://images.pexels.com/photos/3997379/pexels-photo-3997379.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/3997376/pexels-photo-3997376.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/3997987/pexels-photo-3997987.jpeg?auto=compress&cs=tinysrgb&w=800",
];

const NAIL_PLACEHOLDER: &str =
    "https://images.pexels.com/photos/3997987/pexels-photo-3997987.jpeg?auto=compress&cs=tinysrgb&w=800";
const EYELASH_PLACEHOLDER: &str =
    "https://images.pexels.com/photos/3997376/pexels-photo-3997376.jpeg?auto=compress&cs=tinysrgb&w=800";
const STUDIO_PLACEHOLDER: &str =
    "https://images.pexels.com/photos/3997371/pexels-photo-3997371.jpeg?auto=compress&cs=tinysrgb&w=800";

pub const GALLERY_PLACEHOLDERS: [&str; 6] = [
    "https://images.pexels.com/photos/3997379/pexels-photo-3997379.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/3997376/pexels-photo-3997376.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/3997987/pexels-photo-3997987.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/3997371/pexels-photo-3997371.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/3997382/pexels-photo-3997382.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/3997377/pexels-photo-3997377.jpeg?auto=compress&cs=tinysrgb&w=800",
];

pub const TESTIMONIAL_PLACEHOLDERS: [&str; 6] = [
    "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=300",
    "https://images.pexels.com/photos/762020/pexels-photo-762020.jpeg?auto=compress&cs=tinysrgb&w=300",
    "https://images.pexels.com/photos/733872/pexels-photo-733872.jpeg?auto=compress&cs=tinysrgb&w=300",
    "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=300",
    "https://images.pexels.com/photos/1181519/pexels-photo-1181519.jpeg?auto=compress&cs=tinysrgb&w=300",
    "https://images.pexels.com/photos/1130626/pexels-photo-1130626.jpeg?auto=compress&cs=tinysrgb&w=300",
];

/// Components of an `image-<id>-<WxH>-<ext>` asset reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAssetRef<'a> {
    pub id: &'a str,
    pub dimensions: &'a str,
    pub format: &'a str,
}

/// Split an asset reference into id, intrinsic dimensions, and format.
///
/// Returns `None` for references that do not follow the documented shape;
/// callers degrade to the section placeholder in that case.
pub fn parse_asset_ref(reference: &str) -> Option<ParsedAssetRef<'_>> {
    let rest = reference.strip_prefix("image-")?;
    let (rest, format) = rest.rsplit_once('-')?;
    let (id, dimensions) = rest.rsplit_once('-')?;

    let (w, h) = dimensions.split_once('x')?;
    if w.parse::<u32>().is_err() || h.parse::<u32>().is_err() || id.is_empty() || format.is_empty()
    {
        return None;
    }

    Some(ParsedAssetRef {
        id,
        dimensions,
        format,
    })
}

/// Build a CDN URL for a remote asset at the requested dimensions.
pub fn cdn_url(config: &ContentConfig, reference: &str, width: u32, height: u32) -> Option<String> {
    let parsed = parse_asset_ref(reference)?;
    Some(format!(
        "https://cdn.sanity.io/images/{}/{}/{}-{}.{}?w={}&h={}&fit=crop",
        config.project_id, config.dataset, parsed.id, parsed.dimensions, parsed.format, width, height,
    ))
}

/// Resolve an image reference to a concrete URL, or fall back to `placeholder`.
fn resolve(
    config: &ContentConfig,
    image: &ImageRef,
    (width, height): (u32, u32),
    placeholder: &str,
) -> String {
    match image {
        ImageRef::Remote { asset_id, .. } => match cdn_url(config, asset_id, width, height) {
            Some(url) => url,
            None => {
                tracing::warn!("malformed asset reference {asset_id:?}, using placeholder");
                placeholder.to_string()
            }
        },
        ImageRef::None => placeholder.to_string(),
    }
}

/// Keyword-matched placeholder for a service or course title.
pub fn keyword_placeholder(title: &str) -> &'static str {
    let title = title.to_lowercase();
    if title.contains("nail") {
        NAIL_PLACEHOLDER
    } else if title.contains("eyelash") {
        EYELASH_PLACEHOLDER
    } else {
        STUDIO_PLACEHOLDER
    }
}

pub fn service_image_url(config: &ContentConfig, service: &Service) -> String {
    resolve(
        config,
        &service.image,
        SERVICE_DIMS,
        keyword_placeholder(&service.title),
    )
}

pub fn course_image_url(config: &ContentConfig, course: &Course) -> String {
    resolve(
        config,
        &course.image,
        COURSE_DIMS,
        keyword_placeholder(&course.title),
    )
}

pub fn gallery_image_url(config: &ContentConfig, image: &GalleryImage, index: usize) -> String {
    resolve(
        config,
        &image.image,
        GALLERY_TILE_DIMS,
        GALLERY_PLACEHOLDERS[index % GALLERY_PLACEHOLDERS.len()],
    )
}

/// Larger variant requested when the lightbox opens on a tile.
pub fn gallery_lightbox_url(config: &ContentConfig, image: &GalleryImage, index: usize) -> String {
    resolve(
        config,
        &image.image,
        GALLERY_LIGHTBOX_DIMS,
        GALLERY_PLACEHOLDERS[index % GALLERY_PLACEHOLDERS.len()],
    )
}

pub fn testimonial_image_url(
    config: &ContentConfig,
    testimonial: &Testimonial,
    index: usize,
) -> String {
    resolve(
        config,
        &testimonial.image,
        TESTIMONIAL_DIMS,
        TESTIMONIAL_PLACEHOLDERS[index % TESTIMONIAL_PLACEHOLDERS.len()],
    )
}

/// Cache directory for downloaded images.
pub fn cache_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "inails", "iNailsStudio")
        .map(|dirs| dirs.cache_dir().join("images"))
        .unwrap_or_else(|| PathBuf::from(".").join("images"))
}

/// Stable on-disk path for a resolved URL.
pub fn cache_path(url: &str) -> PathBuf {
    cache_dir().join(format!("{:016x}.img", xxh3_64(url.as_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{content::ContentConfig, fallback};

    fn config() -> ContentConfig {
        ContentConfig::default()
    }

    #[test]
    fn parses_well_formed_asset_reference() {
        let parsed = parse_asset_ref("image-abc123-800x600-jpg").unwrap();
        assert_eq!(parsed.id, "abc123");
        assert_eq!(parsed.dimensions, "800x600");
        assert_eq!(parsed.format, "jpg");
    }

    #[test]
    fn rejects_malformed_asset_references() {
        assert!(parse_asset_ref("file-abc123-800x600-jpg").is_none());
        assert!(parse_asset_ref("image-abc123-800x600").is_none());
        assert!(parse_asset_ref("image-abc123-notdims-jpg").is_none());
        assert!(parse_asset_ref("image--800x600-jpg").is_none());
    }

    #[test]
    fn remote_reference_resolves_with_requested_dimensions() {
        let mut service = fallback::services().remove(0);
        service.image = ImageRef::remote("image-abc123-1000x750-jpg");
        let url = service_image_url(&config(), &service);
        assert!(url.contains("w=800"));
        assert!(url.contains("h=600"));
        assert!(url.contains("abc123-1000x750.jpg"));
        assert!(url.contains(&config().project_id));
    }

    #[test]
    fn absent_reference_resolves_to_section_placeholder() {
        let cfg = config();
        for (index, image) in fallback::gallery().iter().enumerate() {
            let url = gallery_image_url(&cfg, image, index);
            assert!(GALLERY_PLACEHOLDERS.contains(&url.as_str()));
        }
        for (index, t) in fallback::testimonials().iter().enumerate() {
            let url = testimonial_image_url(&cfg, t, index);
            assert!(TESTIMONIAL_PLACEHOLDERS.contains(&url.as_str()));
        }
    }

    #[test]
    fn placeholder_selection_is_position_modulo_table_length() {
        let cfg = config();
        let image = fallback::gallery().remove(0);
        let by_index = |i| gallery_image_url(&cfg, &image, i);
        assert_eq!(by_index(0), by_index(GALLERY_PLACEHOLDERS.len()));
        assert_eq!(by_index(1), GALLERY_PLACEHOLDERS[1]);
    }

    #[test]
    fn keyword_match_picks_service_placeholder() {
        assert_eq!(keyword_placeholder("Nail Art & Care"), NAIL_PLACEHOLDER);
        assert_eq!(keyword_placeholder("Eyelash Extensions"), EYELASH_PLACEHOLDER);
        assert_eq!(keyword_placeholder("Permanent Makeup"), STUDIO_PLACEHOLDER);
    }

    #[test]
    fn malformed_remote_reference_degrades_to_placeholder() {
        let mut course = fallback::courses().remove(0);
        course.image = ImageRef::remote("image-broken");
        let url = course_image_url(&config(), &course);
        assert_eq!(url, keyword_placeholder(&course.title));
    }

    #[test]
    fn cache_path_is_stable_per_url() {
        let a = cache_path("https://example.com/a.jpg");
        let b = cache_path("https://example.com/a.jpg");
        let c = cache_path("https://example.com/b.jpg");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
