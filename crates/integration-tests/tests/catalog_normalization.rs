//! End-to-end normalization tests over fixture CMS payloads.

use pjy_core::Locale;
use pjy_integration_tests::{FixtureSource, raw_entry, sample_entries};
use pjy_site::catalog::normalizer::SPEC_KEY_TEMPLATE;
use pjy_site::catalog::{ProductRepository, ProductSource, normalize};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn locale_keyed_entry_normalizes_both_languages() {
    let entries = sample_entries();
    let product = normalize(&entries[0]);

    assert_eq!(
        product.slug,
        "10-1-inch-embedded-capacitive-touch-display-screen"
    );
    assert_eq!(product.title.en, "10.1-inch Embedded Capacitive Touch Display");
    assert_eq!(product.title.zh, "10.1英寸嵌入式电容触摸显示屏");
    assert_eq!(product.features.en.len(), 2);
    assert_eq!(product.features.zh.len(), 2);
    // Slug is in the explicit image table.
    assert_eq!(product.image, "/images/products/10.1ecapacity.jpg");
}

#[test]
fn sibling_field_entry_normalizes_both_languages() {
    let entries = sample_entries();
    let product = normalize(&entries[1]);

    assert_eq!(product.title.en, "55-inch All-in-one Touch Machine");
    assert_eq!(product.title.zh, "55英寸触摸一体机");
    assert_eq!(product.description.zh, "适用于零售和展览的55英寸落地式触摸一体机。");
    assert_eq!(product.features.en, ["Android 11", "4K panel"]);
    assert_eq!(product.features.zh, ["安卓11系统", "4K面板"]);
    // Scalar category flattens to a one-element list.
    assert_eq!(product.categories, ["触摸一体机"]);
    // Optional warranty extracted, English side only.
    let warranty = product.warranty.expect("warranty");
    assert_eq!(warranty.en, "2 years");
    assert_eq!(warranty.zh, "");
}

#[test]
fn all_entries_expose_the_full_specification_template() {
    for entry in sample_entries() {
        let product = normalize(&entry);
        for key in SPEC_KEY_TEMPLATE {
            assert!(
                product.specifications.contains_key(*key),
                "{} missing spec key {key}",
                product.slug
            );
        }
    }
}

#[test]
fn raw_specification_values_override_template_defaults() {
    let entries = sample_entries();
    let product = normalize(&entries[0]);

    assert_eq!(product.specifications["resolution"], "1920x1080");
    assert_eq!(product.specifications["technology"], "PCAP");
    // Template keys absent from the entry stay as empty strings.
    assert_eq!(product.specifications["operatingSystem"], "");
}

#[test]
fn english_only_entry_keeps_chinese_empty_but_renders_with_fallback() {
    let entries = sample_entries();
    let product = normalize(&entries[2]);

    // The record keeps the gap visible for content QA...
    assert_eq!(product.title.en, "Camera X");
    assert_eq!(product.title.zh, "");

    // ...while rendering under zh falls back to the English text.
    assert_eq!(product.title.resolve(Locale::Zh), "Camera X");
    assert_eq!(product.description.resolve(Locale::Zh), "Low-power solar camera.");
}

#[test]
fn features_arrive_as_arrays_for_every_recognized_shape() {
    let shapes = [
        json!({"features": {"en-US": ["a"], "zh": ["甲"]}}),
        json!({"features": {"en": ["a"], "zh": ["甲"]}}),
        json!({"features": ["a"]}),
        json!({"features": null}),
        json!({}),
    ];

    for (index, fields) in shapes.into_iter().enumerate() {
        let product = normalize(&raw_entry("shape", fields));
        // Both sides always exist as (possibly empty) arrays of strings.
        assert!(
            product.features.en.iter().all(|f| !f.is_empty()),
            "shape {index} produced an empty-string feature"
        );
        assert!(product.features.zh.iter().all(|f| !f.is_empty()));
    }
}

#[tokio::test]
async fn repository_serves_identical_products_via_cache_and_point_lookup() {
    let source: Arc<dyn ProductSource> = Arc::new(FixtureSource::new(sample_entries()));
    let ttl = Duration::from_secs(300);

    // Cold repository resolves through the point lookup.
    let cold = ProductRepository::new(Arc::clone(&source), ttl);
    let via_lookup = cold
        .get_by_slug("solar-camera-x")
        .await
        .expect("point lookup");

    // Warm repository resolves through the cached list.
    let warm = ProductRepository::new(source, ttl);
    warm.get_all().await;
    let via_cache = warm.get_by_slug("solar-camera-x").await.expect("cache hit");

    assert_eq!(via_lookup, via_cache);
}

#[tokio::test]
async fn repository_invariant_holds_for_every_served_product() {
    let source = Arc::new(FixtureSource::new(sample_entries()));
    let repo = ProductRepository::new(source, Duration::from_secs(300));

    for product in repo.get_all().await.iter() {
        // Top-level containers are always present; only leaves may be empty.
        assert!(!product.slug.is_empty());
        assert!(!product.image.is_empty());
        assert!(!product.specifications.is_empty());
    }
}
