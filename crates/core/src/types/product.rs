//! The canonical product record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::text::{BilingualList, BilingualText};

/// An image in a product's gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Local asset path (never a remote URL).
    pub url: String,
    /// Alt text derived from the product title.
    pub alt: String,
}

/// A fully-normalized catalog product.
///
/// Produced once by the normalizer at fetch time and read-only afterwards.
/// The top-level containers (`title`, `description`, `features`,
/// `specifications`) are always present; incompleteness only ever shows up
/// as empty leaves, so callers never need null-checks above leaf level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque stable identifier from the CMS.
    pub id: String,
    /// URL-safe external lookup key, unique among products.
    pub slug: String,
    pub title: BilingualText,
    pub description: BilingualText,
    pub features: BilingualList,
    /// Open-ended specification map. Always a superset of the default key
    /// template, so every product presents the same key surface regardless
    /// of subtype.
    pub specifications: BTreeMap<String, String>,
    /// Category labels, each in whichever language the editor used.
    pub categories: Vec<String>,
    /// Resolved local image path.
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<GalleryImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty: Option<BilingualText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_warning: Option<BilingualText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<BilingualText>,
    /// Last CMS update, when the entry carried one. Used by the content QA
    /// surfaces, not by rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Whether any category label on this product names the same family as
    /// `label`, in either language.
    #[must_use]
    pub fn in_category(&self, label: &str) -> bool {
        self.categories
            .iter()
            .any(|own| super::category::labels_equivalent(own, label))
    }
}
