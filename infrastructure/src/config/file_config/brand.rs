//! Brand configuration from TOML (`[brand]` and `[currency]` sections)

use menu_domain::{CurrencyConfig, LocalizedText};
use serde::{Deserialize, Serialize};

/// Raw brand identity
///
/// # Example
///
/// ```toml
/// [brand]
/// name = "Damascus House"
/// name_ar = "بيت دمشق"
/// greeting = "Hello! I'd like to place an order from"
/// greeting_ar = "مرحباً! أود تقديم طلب من"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBrandConfig {
    pub name: String,
    pub name_ar: Option<String>,
    pub greeting: String,
    pub greeting_ar: Option<String>,
}

impl Default for FileBrandConfig {
    fn default() -> Self {
        let defaults = menu_domain::BrandConfig::default();
        Self {
            name: defaults.brand_name.en,
            name_ar: defaults.brand_name.ar,
            greeting: defaults.greeting.en,
            greeting_ar: defaults.greeting.ar,
        }
    }
}

impl FileBrandConfig {
    pub fn to_brand_name(&self) -> LocalizedText {
        localized(&self.name, self.name_ar.as_deref())
    }

    pub fn to_greeting(&self) -> LocalizedText {
        localized(&self.greeting, self.greeting_ar.as_deref())
    }
}

/// Raw currency symbols
///
/// `symbol` is shown in Arabic display, `symbol_en` in English display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCurrencyConfig {
    pub symbol: String,
    pub symbol_en: String,
}

impl Default for FileCurrencyConfig {
    fn default() -> Self {
        let defaults = CurrencyConfig::default();
        Self {
            symbol: defaults.symbol,
            symbol_en: defaults.symbol_en,
        }
    }
}

impl FileCurrencyConfig {
    pub fn to_currency(&self) -> CurrencyConfig {
        CurrencyConfig::new(&self.symbol, &self.symbol_en)
    }
}

pub(super) fn localized(en: &str, ar: Option<&str>) -> LocalizedText {
    match ar {
        Some(ar) => LocalizedText::new(en).with_ar(ar),
        None => LocalizedText::new(en),
    }
}
