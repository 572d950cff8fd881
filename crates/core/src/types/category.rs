//! Bilingual category label equivalence.
//!
//! Category labels arrive from the CMS in whichever language the editor
//! typed. Filtering must treat the English and Chinese names of a product
//! family as the same category, so the mapping lives here as a fixed table
//! rather than being derived from content.

/// English/Chinese label pairs for the known product families.
pub const CATEGORY_EQUIVALENTS: &[(&str, &str)] = &[
    ("Embedded touch display", "嵌入式触摸屏"),
    ("Open frame touch display", "开放式框架触摸屏"),
    ("Touch all-in-one machine", "触摸一体机"),
    ("Advertising machine", "广告机"),
    ("Outdoor display cabinet", "户外显示屏"),
    ("Line screen", "线条屏"),
    ("Infrared all-in-one machine", "红外一体机"),
    ("Camera", "摄像头"),
];

/// The opposite-language label for a known category, if the label is in the
/// table at all.
#[must_use]
pub fn bilingual_equivalent(label: &str) -> Option<&'static str> {
    let label = label.trim();
    for (en, zh) in CATEGORY_EQUIVALENTS {
        if label.eq_ignore_ascii_case(en) {
            return Some(zh);
        }
        if label == *zh {
            return Some(en);
        }
    }
    None
}

/// Whether two category labels name the same product family.
///
/// Exact matches (ASCII case-insensitive for English) count, as does a match
/// through the equivalence table in either direction. Unknown labels only
/// match themselves.
#[must_use]
pub fn labels_equivalent(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    if a.eq_ignore_ascii_case(b) {
        return true;
    }
    bilingual_equivalent(a).is_some_and(|eq| eq == b)
        || bilingual_equivalent(b).is_some_and(|eq| eq == a)
}
