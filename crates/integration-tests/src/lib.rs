//! Integration test support for the PJY catalog site.
//!
//! The tests exercise the full normalize-cache-query-respond path against
//! fixture CMS payloads; no network and no live Contentful space.
//!
//! # Building blocks
//!
//! - [`raw_entry`] - construct raw CMS entries from JSON fixtures
//! - [`FixtureSource`] - a [`ProductSource`] over in-memory entries
//! - [`test_state`] - full [`AppState`] wired to a fixture source
//! - [`sample_entries`] - a small catalog covering the legacy field shapes

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::{Value, json};

use pjy_site::catalog::ProductSource;
use pjy_site::config::{ContentfulConfig, SiteConfig};
use pjy_site::contentful::{ContentfulError, RawEntry, RawSys};
use pjy_site::state::AppState;

/// Construct a raw CMS entry from a JSON fields object.
///
/// # Panics
///
/// Panics if `fields` is not a JSON object; fixtures are authored inline, so
/// a bad shape is a bug in the test itself.
#[must_use]
pub fn raw_entry(id: &str, fields: Value) -> RawEntry {
    RawEntry {
        sys: RawSys {
            id: id.to_string(),
            updated_at: None,
        },
        fields: fields
            .as_object()
            .cloned()
            .expect("fixture fields must be a JSON object"),
    }
}

/// A [`ProductSource`] serving fixed in-memory entries.
pub struct FixtureSource {
    entries: Vec<RawEntry>,
}

impl FixtureSource {
    #[must_use]
    pub fn new(entries: Vec<RawEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl ProductSource for FixtureSource {
    async fn fetch_all(&self) -> Result<Vec<RawEntry>, ContentfulError> {
        Ok(self.entries.clone())
    }

    async fn fetch_by_slug(&self, slug: &str) -> Result<Option<RawEntry>, ContentfulError> {
        Ok(self
            .entries
            .iter()
            .find(|entry| {
                entry.fields.get("slug").and_then(Value::as_str) == Some(slug)
            })
            .cloned())
    }
}

/// Admin preview token used across tests.
pub const TEST_ADMIN_TOKEN: &str = "k9Qx2mB7vN4pL8wZ";

/// A site configuration that never touches the network.
#[must_use]
pub fn test_config() -> SiteConfig {
    SiteConfig {
        host: "127.0.0.1".parse().expect("loopback address"),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        contentful: ContentfulConfig {
            space_id: "fixture-space".to_string(),
            environment: "master".to_string(),
            content_type: "product".to_string(),
            access_token: SecretString::from("fixture-token"),
        },
        admin_preview_token: SecretString::from(TEST_ADMIN_TOKEN),
        catalog_ttl_secs: 300,
        email: None,
        sentry_dsn: None,
    }
}

/// Build application state over fixture entries.
#[must_use]
pub fn test_state(entries: Vec<RawEntry>) -> AppState {
    AppState::with_source(test_config(), Arc::new(FixtureSource::new(entries)))
}

/// A small catalog covering the legacy storage shapes the normalizer must
/// tolerate: locale-keyed fields, `Chinese` sibling fields, bare values.
#[must_use]
pub fn sample_entries() -> Vec<RawEntry> {
    vec![
        // Fully localized, locale-keyed entry.
        raw_entry(
            "entry-display-10",
            json!({
                "slug": {"en-US": "10-1-inch-embedded-capacitive-touch-display-screen"},
                "title": {
                    "en-US": "10.1-inch Embedded Capacitive Touch Display",
                    "zh": "10.1英寸嵌入式电容触摸显示屏"
                },
                "description": {
                    "en-US": "High-performance 10.1-inch capacitive touchscreen with multi-touch support.",
                    "zh": "高性能10.1英寸电容式触摸屏，支持多点触控。"
                },
                "features": {
                    "en-US": ["Multi-touch support", "1920x1080 resolution"],
                    "zh": ["多点触控支持", "1920x1080分辨率"]
                },
                "specifications": {
                    "dimensions": "229mm x 149mm x 7.5mm",
                    "weight": "350g",
                    "resolution": "1920x1080",
                    "technology": "PCAP",
                    "interface": "USB/I2C"
                },
                "categories": ["Embedded touch display"]
            }),
        ),
        // Legacy entry: bare fields plus Chinese sibling fields.
        raw_entry(
            "entry-kiosk-55",
            json!({
                "slug": "55-inch-all-in-one-touch-screen-machine",
                "title": "55-inch All-in-one Touch Machine",
                "titleChinese": "55英寸触摸一体机",
                "description": "Floor-standing 55-inch touch kiosk for retail and exhibitions.",
                "descriptionChinese": "适用于零售和展览的55英寸落地式触摸一体机。",
                "features": ["Android 11", "4K panel"],
                "featuresChinese": ["安卓11系统", "4K面板"],
                "specifications": {
                    "dimensions": "1290mm x 745mm x 60mm",
                    "operatingSystem": "Android 11"
                },
                "categories": "触摸一体机",
                "productWarranty": "2 years"
            }),
        ),
        // Incomplete entry: English only, no Chinese anywhere.
        raw_entry(
            "entry-camera-x",
            json!({
                "slug": "solar-camera-x",
                "title": {"en-US": "Camera X"},
                "description": {"en-US": "Low-power solar camera."},
                "features": ["Solar powered"],
                "categories": ["Camera"]
            }),
        ),
    ]
}
