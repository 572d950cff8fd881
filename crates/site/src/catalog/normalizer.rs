//! Raw entry -> canonical product normalization.
//!
//! Pure transformation over an already-fetched [`RawEntry`]; no network
//! calls. Normalization cannot fail: every field decodes through the
//! extractor in [`crate::contentful::fields`], which represents missing or
//! malformed data as empty defaults, so one bad field never aborts the
//! entry.

use std::collections::BTreeMap;

use serde_json::Value;

use pjy_core::{BilingualText, Product};

use crate::contentful::fields;
use crate::contentful::{LocalizedField, RawEntry};

use super::images;

/// Default specification keys, covering the union of all product subtypes
/// (displays, all-in-one units, cameras). Every normalized product carries
/// at least these keys so callers see one consistent key surface.
pub const SPEC_KEY_TEMPLATE: &[&str] = &[
    "dimensions",
    "weight",
    "resolution",
    "technology",
    "interface",
    "brightness",
    "powerSupply",
    "operatingSystem",
    "sensor",
    "storage",
];

/// Normalize a raw CMS entry into a canonical [`Product`].
#[must_use]
pub fn normalize(entry: &RawEntry) -> Product {
    let raw = &entry.fields;

    // Slug first: the image fallback chain keys off it.
    let slug = fields::plain_str(raw, "slug")
        .unwrap_or_else(|| format!("product-{}", entry.sys.id));

    let title = fields::bilingual_text(raw, "title");
    let description = fields::bilingual_text(raw, "description");

    // Features survive in three legacy shapes (locale-keyed object,
    // {en, zh} literal, bare English array); all of them funnel through the
    // extractor, and anything unrecognizable degrades to empty lists.
    let features = fields::bilingual_list(raw, "features");

    let specifications = normalize_specifications(raw.get("specifications"));
    let categories = normalize_categories(raw);

    let image = images::product_image(&slug);
    let gallery = images::product_gallery(&slug, &title.en);

    Product {
        id: entry.sys.id.clone(),
        slug,
        title,
        description,
        features,
        specifications,
        categories,
        image,
        gallery,
        warranty: optional_text(raw, "productWarranty"),
        safety_warning: optional_text(raw, "safetyWarning"),
        notes: optional_text(raw, "notesForAttention"),
        updated_at: entry.sys.updated_at,
    }
}

/// Merge the default key template with whatever the entry carries.
///
/// Raw keys always override template defaults; template keys missing from
/// the entry stay as empty strings. A malformed specifications field (not
/// an object) yields the bare template.
fn normalize_specifications(raw: Option<&Value>) -> BTreeMap<String, String> {
    let mut specifications: BTreeMap<String, String> = SPEC_KEY_TEMPLATE
        .iter()
        .map(|key| ((*key).to_string(), String::new()))
        .collect();

    // Specifications may themselves be locale-keyed in fully-localized
    // spaces; the values inside are shared across languages.
    if let Some(Value::Object(map)) = LocalizedField::parse(raw).english() {
        for (key, value) in map {
            specifications.insert(key.clone(), fields::value_to_string(value));
        }
    }

    specifications
}

/// Category labels, from either the plural or the legacy singular field.
fn normalize_categories(raw: &serde_json::Map<String, Value>) -> Vec<String> {
    let categories = fields::string_list(raw, "categories");
    if categories.is_empty() {
        fields::string_list(raw, "category")
    } else {
        categories
    }
}

/// Optional free-text fields become `None` when both sides are empty.
fn optional_text(
    raw: &serde_json::Map<String, Value>,
    name: &str,
) -> Option<BilingualText> {
    let text = fields::bilingual_text(raw, name);
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contentful::RawSys;
    use serde_json::json;

    fn entry(id: &str, fields: Value) -> RawEntry {
        RawEntry {
            sys: RawSys {
                id: id.to_string(),
                updated_at: None,
            },
            fields: fields.as_object().cloned().expect("fixture must be an object"),
        }
    }

    #[test]
    fn slug_defaults_to_synthetic_id() {
        let product = normalize(&entry("abc123", json!({"title": "Camera X"})));
        assert_eq!(product.slug, "product-abc123");
        assert_eq!(product.id, "abc123");
    }

    #[test]
    fn features_locale_keyed_shape() {
        let product = normalize(&entry(
            "1",
            json!({
                "features": {
                    "en-US": ["Multi-touch", "IP65 rated"],
                    "zh": ["多点触控", "IP65级防水"]
                }
            }),
        ));
        assert_eq!(product.features.en, ["Multi-touch", "IP65 rated"]);
        assert_eq!(product.features.zh, ["多点触控", "IP65级防水"]);
    }

    #[test]
    fn features_en_zh_literal_shape() {
        let product = normalize(&entry(
            "1",
            json!({"features": {"en": ["Multi-touch"], "zh": ["多点触控"]}}),
        ));
        assert_eq!(product.features.en, ["Multi-touch"]);
        assert_eq!(product.features.zh, ["多点触控"]);
    }

    #[test]
    fn features_bare_array_is_english_only() {
        let product = normalize(&entry("1", json!({"features": ["Multi-touch"]})));
        assert_eq!(product.features.en, ["Multi-touch"]);
        assert!(product.features.zh.is_empty());
    }

    #[test]
    fn features_bare_array_with_chinese_sibling() {
        let product = normalize(&entry(
            "1",
            json!({
                "features": ["Multi-touch"],
                "featuresChinese": ["多点触控"]
            }),
        ));
        assert_eq!(product.features.en, ["Multi-touch"]);
        assert_eq!(product.features.zh, ["多点触控"]);
    }

    #[test]
    fn features_degenerate_shapes_never_panic() {
        // A stray scalar becomes a single-element list, null becomes empty.
        let product = normalize(&entry("1", json!({"features": 42})));
        assert_eq!(product.features.en, ["42"]);

        let product = normalize(&entry("1", json!({"features": null})));
        assert!(product.features.en.is_empty());
        assert!(product.features.zh.is_empty());
    }

    #[test]
    fn specifications_superset_of_template() {
        let product = normalize(&entry(
            "1",
            json!({
                "specifications": {
                    "resolution": "1920x1080",
                    "touchPoints": "10"
                }
            }),
        ));
        for key in SPEC_KEY_TEMPLATE {
            assert!(product.specifications.contains_key(*key), "missing {key}");
        }
        assert_eq!(product.specifications["resolution"], "1920x1080");
        assert_eq!(product.specifications["touchPoints"], "10");
        assert_eq!(product.specifications["dimensions"], "");
    }

    #[test]
    fn malformed_specifications_fall_back_to_template() {
        let product = normalize(&entry("1", json!({"specifications": "oops"})));
        assert_eq!(product.specifications.len(), SPEC_KEY_TEMPLATE.len());
        assert!(product.specifications.values().all(String::is_empty));
    }

    #[test]
    fn numeric_specification_values_are_stringified() {
        let product = normalize(&entry(
            "1",
            json!({"specifications": {"weight": 350}}),
        ));
        assert_eq!(product.specifications["weight"], "350");
    }

    #[test]
    fn categories_accept_scalar_array_and_legacy_singular() {
        let scalar = normalize(&entry("1", json!({"categories": "Camera"})));
        assert_eq!(scalar.categories, ["Camera"]);

        let array = normalize(&entry(
            "1",
            json!({"categories": ["Camera", "嵌入式触摸屏"]}),
        ));
        assert_eq!(array.categories, ["Camera", "嵌入式触摸屏"]);

        let singular = normalize(&entry("1", json!({"category": "Camera"})));
        assert_eq!(singular.categories, ["Camera"]);
    }

    #[test]
    fn image_resolution_falls_back_through_table_then_convention() {
        let mapped = normalize(&entry(
            "1",
            json!({"slug": "3-5-inch-sound-and-light-warning-spherical-camera"}),
        ));
        assert_eq!(mapped.image, "/images/products/3.5camera.jpg");

        let conventional = normalize(&entry("1", json!({"slug": "brand-new-display"})));
        assert_eq!(conventional.image, "/images/products/brand-new-display.jpg");
    }

    #[test]
    fn optional_fields_absent_become_none() {
        let product = normalize(&entry("1", json!({"title": "Camera X"})));
        assert!(product.warranty.is_none());
        assert!(product.safety_warning.is_none());
        assert!(product.notes.is_none());
    }

    #[test]
    fn optional_fields_present_are_extracted() {
        let product = normalize(&entry(
            "1",
            json!({
                "productWarranty": {"en-US": "2 years", "zh": "两年"},
                "safetyWarning": "Do not submerge"
            }),
        ));
        let warranty = product.warranty.expect("warranty present");
        assert_eq!(warranty.en, "2 years");
        assert_eq!(warranty.zh, "两年");
        let warning = product.safety_warning.expect("warning present");
        assert_eq!(warning.en, "Do not submerge");
        assert_eq!(warning.zh, "");
    }

    #[test]
    fn english_only_title_leaves_chinese_empty() {
        // The detail page falls back to English at render time; the record
        // itself must keep the gap visible for content QA.
        let product = normalize(&entry(
            "1",
            json!({"title": {"en-US": "Camera X"}}),
        ));
        assert_eq!(product.title.en, "Camera X");
        assert_eq!(product.title.zh, "");
    }

    #[test]
    fn top_level_containers_always_present() {
        let product = normalize(&entry("1", json!({})));
        assert!(product.title.is_empty());
        assert!(product.description.is_empty());
        assert!(product.features.en.is_empty());
        assert_eq!(product.specifications.len(), SPEC_KEY_TEMPLATE.len());
        assert_eq!(product.image, "/images/products/product-1.jpg");
    }
}
