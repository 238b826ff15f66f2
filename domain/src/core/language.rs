//! Display language and text direction
//!
//! The menu is bilingual. Switching language relabels every localized
//! field and flips the text direction, but never changes how search
//! matches (see [`crate::catalog::filter`]).

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (left-to-right)
    #[default]
    En,
    /// Arabic (right-to-left)
    Ar,
}

/// Writing direction of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Language {
    /// All languages in toggle order
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    /// ISO code ("en" / "ar")
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Native name used on the language switcher
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Language::En => TextDirection::Ltr,
            Language::Ar => TextDirection::Rtl,
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == TextDirection::Rtl
    }

    /// The other language
    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ar" | "arabic" | "ع" => Ok(Language::Ar),
            _ => Err(DomainError::InvalidLanguage(s.to_string())),
        }
    }
}
