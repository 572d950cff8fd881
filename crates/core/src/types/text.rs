//! Bilingual text and list pairs.
//!
//! Source content is frequently incomplete on one side. An empty side is a
//! recognized data-quality state, not an error - rendering falls back to the
//! other language instead of failing.

use serde::{Deserialize, Serialize};

use super::locale::Locale;

/// A bilingual text value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    pub en: String,
    pub zh: String,
}

impl BilingualText {
    /// Create a pair from both sides.
    #[must_use]
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: zh.into(),
        }
    }

    /// Create an English-only pair.
    #[must_use]
    pub fn english(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: String::new(),
        }
    }

    /// The raw value for a locale, without fallback.
    #[must_use]
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Zh => &self.zh,
        }
    }

    /// The value for a locale, falling back to the other side when empty.
    #[must_use]
    pub fn resolve(&self, locale: Locale) -> &str {
        let preferred = self.get(locale);
        if preferred.is_empty() {
            self.get(locale.other())
        } else {
            preferred
        }
    }

    /// True when both sides are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.zh.is_empty()
    }

    /// True when the given side has content.
    #[must_use]
    pub fn has(&self, locale: Locale) -> bool {
        !self.get(locale).is_empty()
    }
}

/// A bilingual list value (e.g. product feature bullets).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualList {
    pub en: Vec<String>,
    pub zh: Vec<String>,
}

impl BilingualList {
    /// Create a pair from both sides.
    #[must_use]
    pub fn new(en: Vec<String>, zh: Vec<String>) -> Self {
        Self { en, zh }
    }

    /// The raw list for a locale, without fallback.
    #[must_use]
    pub fn get(&self, locale: Locale) -> &[String] {
        match locale {
            Locale::En => &self.en,
            Locale::Zh => &self.zh,
        }
    }

    /// The list for a locale, falling back to the other side when empty.
    #[must_use]
    pub fn resolve(&self, locale: Locale) -> &[String] {
        let preferred = self.get(locale);
        if preferred.is_empty() {
            self.get(locale.other())
        } else {
            preferred
        }
    }

    /// True when both sides are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.zh.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_requested_locale() {
        let text = BilingualText::new("Touch display", "触摸屏");
        assert_eq!(text.resolve(Locale::En), "Touch display");
        assert_eq!(text.resolve(Locale::Zh), "触摸屏");
    }

    #[test]
    fn resolve_falls_back_when_side_is_empty() {
        let text = BilingualText::english("Camera X");
        assert_eq!(text.resolve(Locale::Zh), "Camera X");

        let text = BilingualText::new("", "摄像头");
        assert_eq!(text.resolve(Locale::En), "摄像头");
    }

    #[test]
    fn get_does_not_fall_back() {
        let text = BilingualText::english("Camera X");
        assert_eq!(text.get(Locale::Zh), "");
        assert!(!text.has(Locale::Zh));
        assert!(text.has(Locale::En));
    }

    #[test]
    fn empty_pair_resolves_to_empty() {
        let text = BilingualText::default();
        assert!(text.is_empty());
        assert_eq!(text.resolve(Locale::En), "");
        assert_eq!(text.resolve(Locale::Zh), "");
    }

    #[test]
    fn list_falls_back_like_text() {
        let list = BilingualList::new(vec!["Multi-touch".to_string()], Vec::new());
        assert_eq!(list.resolve(Locale::Zh), ["Multi-touch".to_string()]);
        assert!(list.get(Locale::Zh).is_empty());
    }
}
