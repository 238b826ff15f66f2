//! Localized text value object

use super::language::Language;
use serde::{Deserialize, Serialize};

/// A piece of text with an English value and an optional Arabic variant.
///
/// Arabic lookups fall back to English when the Arabic variant is
/// missing or blank; a missing English value renders as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ar: Option<String>,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: None,
        }
    }

    /// Create text with both variants
    pub fn bilingual(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self::new(en).with_ar(ar)
    }

    pub fn with_ar(mut self, ar: impl Into<String>) -> Self {
        let ar = ar.into();
        self.ar = if ar.is_empty() { None } else { Some(ar) };
        self
    }

    /// Text for the given language
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ar => match self.ar.as_deref() {
                Some(ar) if !ar.trim().is_empty() => ar,
                _ => &self.en,
            },
        }
    }

    /// Raw Arabic variant, without fallback
    pub fn ar(&self) -> &str {
        self.ar.as_deref().unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.ar().is_empty()
    }
}

impl From<&str> for LocalizedText {
    fn from(s: &str) -> Self {
        LocalizedText::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_falls_back_to_english() {
        let text = LocalizedText::new("Hummus");
        assert_eq!(text.get(Language::Ar), "Hummus");

        let blank = LocalizedText::new("Hummus").with_ar("   ");
        assert_eq!(blank.get(Language::Ar), "Hummus");
    }

    #[test]
    fn test_bilingual_lookup() {
        let text = LocalizedText::bilingual("Hummus", "حمص");
        assert_eq!(text.get(Language::En), "Hummus");
        assert_eq!(text.get(Language::Ar), "حمص");
    }

    #[test]
    fn test_missing_text_is_empty() {
        let text = LocalizedText::default();
        assert_eq!(text.get(Language::En), "");
        assert_eq!(text.get(Language::Ar), "");
        assert!(text.is_empty());
    }
}
