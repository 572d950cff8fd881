//! Fuzzy product search.
//!
//! Approximate matching over the bilingual title, description, and feature
//! text for the requested locale. Scores are similarity-based (1.0 = exact
//! substring hit); anything below [`MIN_SEARCH_SCORE`] is excluded. An
//! empty query returns nothing - the search page should not degenerate
//! into a second product listing.

use strsim::jaro_winkler;

use pjy_core::{Locale, Product};

/// Minimum relevance score required for a product to count as a match.
pub const MIN_SEARCH_SCORE: f64 = 0.6;

/// Field weights: a title hit matters more than a description or feature
/// hit. An exact feature hit lands exactly on the threshold, so feature-only
/// matches stay in but rank below everything stronger.
const TITLE_WEIGHT: f64 = 1.0;
const DESCRIPTION_WEIGHT: f64 = 0.8;
const FEATURE_WEIGHT: f64 = 0.6;

/// Search the catalog, ranked by descending relevance.
///
/// Ties are broken by title so results are stable across runs.
#[must_use]
pub fn search<'a>(products: &'a [Product], query: &str, locale: Locale) -> Vec<&'a Product> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &Product)> = products
        .iter()
        .filter_map(|product| {
            let score = relevance(product, &query, locale);
            (score >= MIN_SEARCH_SCORE).then_some((score, product))
        })
        .collect();

    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b
            .partial_cmp(score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.title.resolve(locale).cmp(b.title.resolve(locale)))
    });

    scored.into_iter().map(|(_, product)| product).collect()
}

/// The best weighted field score for a product.
fn relevance(product: &Product, query: &str, locale: Locale) -> f64 {
    let title = field_score(query, product.title.resolve(locale)) * TITLE_WEIGHT;
    let description =
        field_score(query, product.description.resolve(locale)) * DESCRIPTION_WEIGHT;
    let features = product
        .features
        .resolve(locale)
        .iter()
        .map(|feature| field_score(query, feature) * FEATURE_WEIGHT)
        .fold(0.0, f64::max);

    title.max(description).max(features)
}

/// Score a query against one field's text.
///
/// A case-insensitive substring hit is a perfect score; otherwise the best
/// Jaro-Winkler similarity against each whitespace token, which tolerates
/// typos and partial matches. Chinese text has no whitespace, so the whole
/// field acts as a single token there.
fn field_score(query: &str, text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let text = text.to_lowercase();
    if text.contains(query) {
        return 1.0;
    }

    text.split_whitespace()
        .map(|token| jaro_winkler(query, token))
        .fold(0.0, f64::max)
}
