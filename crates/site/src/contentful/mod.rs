//! Contentful Content Delivery API client.
//!
//! Uses `reqwest` against the CDA REST endpoint. Entries come back with a
//! free-form `fields` map whose values may or may not be locale-keyed
//! depending on how the space is configured; [`fields`] decodes both.
//!
//! The client returns raw entries only - normalization into
//! [`pjy_core::Product`] happens in [`crate::catalog`], so this module stays
//! a thin transport layer.

pub mod fields;

pub use fields::LocalizedField;

use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use crate::config::ContentfulConfig;

/// Errors that can occur when talking to the Content Delivery API.
#[derive(Debug, Error)]
pub enum ContentfulError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate limited by Contentful.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

/// A raw CMS entry, prior to normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub sys: RawSys,
    #[serde(default)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Entry system metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSys {
    pub id: String,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Entry collection envelope returned by the CDA.
#[derive(Debug, Deserialize)]
struct EntryCollection {
    #[serde(default)]
    items: Vec<RawEntry>,
}

/// Client for the Contentful Content Delivery API.
#[derive(Clone)]
pub struct ContentfulClient {
    client: reqwest::Client,
    entries_url: String,
    access_token: String,
    content_type: String,
}

impl ContentfulClient {
    /// Create a new Content Delivery API client.
    #[must_use]
    pub fn new(config: &ContentfulConfig) -> Self {
        let entries_url = format!(
            "https://cdn.contentful.com/spaces/{}/environments/{}/entries",
            config.space_id, config.environment
        );

        Self {
            client: reqwest::Client::new(),
            entries_url,
            access_token: config.access_token.expose_secret().to_string(),
            content_type: config.content_type.clone(),
        }
    }

    /// Fetch all product entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self))]
    pub async fn entries(&self) -> Result<Vec<RawEntry>, ContentfulError> {
        // include=2 resolves linked entries two levels deep; the catalog is a
        // few dozen entries, so one page always covers it.
        let collection = self
            .execute(&[
                ("content_type", self.content_type.as_str()),
                ("include", "2"),
                ("limit", "1000"),
            ])
            .await?;
        Ok(collection.items)
    }

    /// Fetch a single product entry by its slug field.
    ///
    /// Returns `Ok(None)` when no entry carries the slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn entry_by_slug(&self, slug: &str) -> Result<Option<RawEntry>, ContentfulError> {
        let collection = self
            .execute(&[
                ("content_type", self.content_type.as_str()),
                ("fields.slug", slug),
                ("include", "2"),
                ("limit", "1"),
            ])
            .await?;
        Ok(collection.items.into_iter().next())
    }

    /// Execute a CDA query against the entries endpoint.
    async fn execute(&self, query: &[(&str, &str)]) -> Result<EntryCollection, ContentfulError> {
        let response = self
            .client
            .get(&self.entries_url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await?;

        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ContentfulError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Contentful API returned non-success status"
            );
            return Err(ContentfulError::Api {
                status: status.as_u16(),
                message: response_text.chars().take(200).collect(),
            });
        }

        match serde_json::from_str(&response_text) {
            Ok(collection) => Ok(collection),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Contentful response"
                );
                Err(ContentfulError::Parse(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contentful_error_display() {
        let err = ContentfulError::Api {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 404 - not found");

        let err = ContentfulError::RateLimited(7);
        assert_eq!(err.to_string(), "Rate limited, retry after 7 seconds");
    }

    #[test]
    fn test_raw_entry_parses_minimal_payload() {
        let entry: RawEntry = serde_json::from_str(
            r#"{"sys": {"id": "abc123", "updatedAt": "2024-03-01T08:30:00Z"}}"#,
        )
        .expect("parse");
        assert_eq!(entry.sys.id, "abc123");
        assert!(entry.sys.updated_at.is_some());
        assert!(entry.fields.is_empty());
    }

    #[test]
    fn test_entry_collection_defaults_to_empty() {
        let collection: EntryCollection = serde_json::from_str(r#"{"total": 0}"#).expect("parse");
        assert!(collection.items.is_empty());
    }
}
