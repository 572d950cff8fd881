//! Category filtering with bilingual label equivalence.

use pjy_core::Product;

/// Filter products by category label.
///
/// A product matches when any of its labels names the same product family
/// as the requested label, directly or through the bilingual equivalence
/// table - so filtering by "嵌入式触摸屏" and by "Embedded touch display"
/// selects the same set regardless of which language each entry was tagged
/// in. `"all"` or an empty label is the identity operation, not a no-match.
#[must_use]
pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    let category = category.trim();
    if category.is_empty() || category.eq_ignore_ascii_case("all") {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|product| product.in_category(category))
        .collect()
}
