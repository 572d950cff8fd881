//! Locale-aware field extraction.
//!
//! CMS fields arrive in three shapes, depending on the space's locale
//! configuration and on how old the entry is:
//!
//! - a bare value (`"Camera X"`) - assumed English,
//! - a locale-keyed object (`{"en-US": "Camera X", "zh": "摄像头X"}`),
//! - absent entirely.
//!
//! Older entries additionally carry Chinese in a sibling field named with a
//! `Chinese` suffix (`titleChinese`), itself stored under `en-US`.
//!
//! All shape detection lives here, decoded once into [`LocalizedField`];
//! nothing downstream re-derives shape assumptions. Extraction never fails:
//! absent or unrecognizable data becomes an empty string/list.

use serde_json::{Map, Value};

use pjy_core::{BilingualList, BilingualText};

/// Locale tags Contentful may use as object keys.
const LOCALE_TAGS: &[&str] = &["en-US", "en", "zh", "zh-CN", "zh-Hans", "zh-TW"];

/// A CMS field value decoded into its storage shape.
#[derive(Debug, Clone, Copy)]
pub enum LocalizedField<'a> {
    /// Field missing or JSON null.
    Absent,
    /// A bare value; treated as English.
    Plain(&'a Value),
    /// A map from locale tag to value.
    ByLocale(&'a Map<String, Value>),
}

impl<'a> LocalizedField<'a> {
    /// Decode a raw field value.
    ///
    /// An object counts as locale-keyed only when every key is a recognized
    /// locale tag; anything else (e.g. an `{en, zh}` literal or a
    /// specifications map) is a plain value for the caller to interpret.
    #[must_use]
    pub fn parse(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(value) => match value {
                Value::Object(map)
                    if !map.is_empty()
                        && map.keys().all(|k| LOCALE_TAGS.contains(&k.as_str())) =>
                {
                    Self::ByLocale(map)
                }
                other => Self::Plain(other),
            },
        }
    }

    /// The English-side value, if any.
    #[must_use]
    pub fn english(&self) -> Option<&'a Value> {
        match *self {
            Self::Absent => None,
            Self::Plain(value) => Some(value),
            Self::ByLocale(map) => map.get("en-US").or_else(|| map.get("en")),
        }
    }

    /// The Chinese-side value, if any. Plain values never supply Chinese;
    /// that comes from the sibling-field convention handled by the callers
    /// below.
    #[must_use]
    pub fn chinese(&self) -> Option<&'a Value> {
        match *self {
            Self::Absent | Self::Plain(_) => None,
            Self::ByLocale(map) => map
                .get("zh")
                .or_else(|| map.get("zh-CN"))
                .or_else(|| map.get("zh-Hans")),
        }
    }
}

/// Extract a bilingual text field.
///
/// English resolves from the field itself; Chinese resolves from the
/// locale-keyed `zh` side when present, otherwise from the `<name>Chinese`
/// sibling field.
#[must_use]
pub fn bilingual_text(fields: &Map<String, Value>, name: &str) -> BilingualText {
    let field = LocalizedField::parse(fields.get(name));

    let en = field.english().map(value_to_string).unwrap_or_default();
    let zh = field
        .chinese()
        .map(value_to_string)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| chinese_sibling(fields, name).map(value_to_string).unwrap_or_default());

    BilingualText { en, zh }
}

/// Extract a bilingual list field, with the same resolution order as
/// [`bilingual_text`].
#[must_use]
pub fn bilingual_list(fields: &Map<String, Value>, name: &str) -> BilingualList {
    let field = LocalizedField::parse(fields.get(name));

    let en = field.english().map(value_to_list).unwrap_or_default();
    let zh = match field.chinese().map(value_to_list) {
        Some(list) if !list.is_empty() => list,
        _ => chinese_sibling(fields, name).map(value_to_list).unwrap_or_default(),
    };

    BilingualList { en, zh }
}

/// Extract a plain string field (e.g. `slug`), tolerating locale keying.
#[must_use]
pub fn plain_str(fields: &Map<String, Value>, name: &str) -> Option<String> {
    LocalizedField::parse(fields.get(name))
        .english()
        .map(value_to_string)
        .filter(|s| !s.is_empty())
}

/// Extract a list of strings regardless of whether the field is stored as a
/// scalar, an array, or a locale-keyed value.
#[must_use]
pub fn string_list(fields: &Map<String, Value>, name: &str) -> Vec<String> {
    LocalizedField::parse(fields.get(name))
        .english()
        .map(value_to_list)
        .unwrap_or_default()
}

/// Look up the `<name>Chinese` sibling field. The sibling itself may be
/// locale-keyed (legacy entries store Chinese text under the sibling's
/// `en-US` key), so it goes through the same decoder.
fn chinese_sibling<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    let sibling = format!("{name}Chinese");
    LocalizedField::parse(fields.get(&sibling)).english()
}

/// Render a JSON scalar as display text. Strings pass through, other
/// scalars are stringified, containers become empty.
#[must_use]
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Render a JSON value as a list of display strings. Arrays keep their
/// scalar elements, scalars become a single-element list, anything else is
/// empty.
#[must_use]
pub fn value_to_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) if s.is_empty() => Vec::new(),
        Value::Null | Value::Object(_) => Vec::new(),
        scalar => vec![value_to_string(scalar)],
    }
}
