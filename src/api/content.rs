//! Content API client
//!
//! Thin wrapper over the hosted content source's HTTP query endpoint. The
//! client is constructed once at startup and handed to async tasks by clone;
//! nothing in the crate reaches for a global instance, so tests can build a
//! client against any configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, de::DeserializeOwned};

/// Sentinel project id meaning "not configured".
///
/// Deployments without a content project are an expected mode, not an error:
/// every section then renders its fallback list without a network call.
pub const PLACEHOLDER_PROJECT_ID: &str = "your-project-id";

/// Connection parameters for the content source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    /// Query through the CDN edge for faster, cacheable reads.
    pub use_cdn: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: "3nean6sp".to_string(),
            dataset: "production".to_string(),
            api_version: "2025-07-12".to_string(),
            use_cdn: true,
        }
    }
}

impl ContentConfig {
    pub fn is_configured(&self) -> bool {
        !self.project_id.is_empty() && self.project_id != PLACEHOLDER_PROJECT_ID
    }

    fn api_host(&self) -> &'static str {
        if self.use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        }
    }

    /// Full query endpoint URL for a GROQ expression.
    pub fn query_url(&self, groq: &str) -> String {
        format!(
            "https://{}.{}/v{}/data/query/{}?query={}",
            self.project_id,
            self.api_host(),
            self.api_version,
            self.dataset,
            urlencoding::encode(groq),
        )
    }
}

/// GROQ queries per section. Ordering is applied server-side.
pub mod queries {
    pub const SERVICES: &str = r#"*[_type == "service"] | order(popular desc, _createdAt asc) {
  "id": _id, title, description, features, image, popular
}"#;

    pub const GALLERY: &str = r#"*[_type == "galleryImage"] | order(_createdAt desc) {
  "id": _id, image, alt, category
}"#;

    pub const TESTIMONIALS: &str = r#"*[_type == "testimonial"] | order(_createdAt desc) {
  "id": _id, name, role, image, rating, text, service
}"#;

    pub const COURSES: &str = r#"*[_type == "course"] | order(featured desc, _createdAt asc) {
  "id": _id, title, duration, students, rating, price, image, description, highlights, featured
}"#;
}

/// Content API client with an injected configuration.
#[derive(Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    config: ContentConfig,
}

impl std::fmt::Debug for ContentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentClient")
            .field("config", &self.config)
            .finish()
    }
}

impl ContentClient {
    pub fn new(config: ContentConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Issue one read-only query for a full record list.
    pub async fn fetch<T: DeserializeOwned>(&self, groq: &str) -> Result<Vec<T>> {
        let url = self.config.query_url(groq);
        let body = self
            .http
            .get(&url)
            .send()
            .await
            .context("content query request failed")?
            .error_for_status()
            .context("content query returned an error status")?
            .text()
            .await
            .context("content query body could not be read")?;
        parse_query_response(&body)
    }

    /// Download a resolved image URL to the given path.
    pub async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let bytes = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("image request failed: {url}"))?
            .error_for_status()?
            .bytes()
            .await?;
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(dest, &bytes).await?;
        Ok(())
    }
}

impl Default for ContentClient {
    fn default() -> Self {
        Self::new(ContentConfig::default())
    }
}

/// Where a section's records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOrigin {
    Remote,
    Fallback,
}

/// Result of one section load, remote or degraded.
#[derive(Debug, Clone)]
pub struct LoadOutcome<T> {
    pub records: Vec<T>,
    pub origin: ContentOrigin,
}

/// Load one section's record list, degrading to the fallback on any failure.
///
/// Single attempt, no retry: an unconfigured source skips the network
/// entirely, and a failed or malformed query is logged as a warning and
/// replaced by the fixed fallback list. The UI cannot tell the two apart.
pub async fn load_section<T: DeserializeOwned>(
    client: ContentClient,
    section: &'static str,
    groq: &'static str,
    fallback: fn() -> Vec<T>,
) -> LoadOutcome<T> {
    if !client.is_configured() {
        tracing::warn!("content project not configured, using fallback {section}");
        return LoadOutcome {
            records: fallback(),
            origin: ContentOrigin::Fallback,
        };
    }

    match client.fetch::<T>(groq).await {
        Ok(records) => LoadOutcome {
            records,
            origin: ContentOrigin::Remote,
        },
        Err(err) => {
            tracing::warn!("loading {section} failed: {err:#}, using fallback");
            LoadOutcome {
                records: fallback(),
                origin: ContentOrigin::Fallback,
            }
        }
    }
}

fn parse_query_response<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    #[derive(Deserialize)]
    struct QueryResponse<T> {
        result: Vec<T>,
    }

    let response: QueryResponse<T> =
        serde_json::from_str(body).context("malformed content query response")?;
    Ok(response.result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fallback;
    use crate::api::model::Service;

    fn unconfigured() -> ContentClient {
        ContentClient::new(ContentConfig {
            project_id: PLACEHOLDER_PROJECT_ID.to_string(),
            ..ContentConfig::default()
        })
    }

    #[test]
    fn default_config_is_configured() {
        assert!(ContentConfig::default().is_configured());
    }

    #[test]
    fn placeholder_and_empty_project_ids_are_unconfigured() {
        assert!(!unconfigured().is_configured());
        let empty = ContentConfig {
            project_id: String::new(),
            ..ContentConfig::default()
        };
        assert!(!empty.is_configured());
    }

    #[test]
    fn query_url_embeds_project_dataset_and_encoded_query() {
        let config = ContentConfig::default();
        let url = config.query_url(queries::SERVICES);
        assert!(url.starts_with("https://3nean6sp.apicdn.sanity.io/v2025-07-12/data/query/production?query="));
        // The GROQ expression must be percent-encoded.
        assert!(!url.contains(' '));
        assert!(url.contains("_type"));
    }

    #[test]
    fn bypassing_the_cdn_switches_hosts() {
        let config = ContentConfig {
            use_cdn: false,
            ..ContentConfig::default()
        };
        assert!(config.query_url("*").contains(".api.sanity.io/"));
    }

    #[test]
    fn section_queries_request_the_documented_orderings() {
        assert!(queries::SERVICES.contains("order(popular desc, _createdAt asc)"));
        assert!(queries::GALLERY.contains("order(_createdAt desc)"));
        assert!(queries::TESTIMONIALS.contains("order(_createdAt desc)"));
        assert!(queries::COURSES.contains("order(featured desc, _createdAt asc)"));
    }

    #[test]
    fn parses_a_query_response_envelope() {
        let body = r#"{ "result": [
            { "id": "s1", "title": "Nail Art", "description": "d", "popular": true }
        ], "ms": 3 }"#;
        let services: Vec<Service> = parse_query_response(body).unwrap();
        assert_eq!(services.len(), 1);
        assert!(services[0].popular);
    }

    #[test]
    fn rejects_a_malformed_response() {
        assert!(parse_query_response::<Service>("not json").is_err());
        assert!(parse_query_response::<Service>(r#"{ "rows": [] }"#).is_err());
    }

    #[tokio::test]
    async fn unconfigured_load_degrades_without_touching_the_network() {
        let outcome = load_section(
            unconfigured(),
            "services",
            queries::SERVICES,
            fallback::services,
        )
        .await;
        assert_eq!(outcome.origin, ContentOrigin::Fallback);
        assert_eq!(outcome.records, fallback::services());
    }

    #[tokio::test]
    async fn unconfigured_course_load_yields_the_three_item_fallback() {
        let outcome = load_section(
            unconfigured(),
            "courses",
            queries::COURSES,
            fallback::courses,
        )
        .await;
        assert_eq!(outcome.origin, ContentOrigin::Fallback);
        assert_eq!(outcome.records.len(), 3);
    }
}
