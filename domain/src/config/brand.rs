//! Brand configuration value objects
//!
//! [`BrandConfig`] is immutable once built and is handed to the catalog
//! and cart layers at construction time.

use crate::catalog::entities::MenuItem;
use crate::core::language::Language;
use crate::core::text::LocalizedText;
use serde::{Deserialize, Serialize};

/// Currency symbols per display language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Symbol shown in Arabic display
    pub symbol: String,
    /// Symbol shown in English display
    pub symbol_en: String,
}

impl CurrencyConfig {
    pub fn new(symbol: impl Into<String>, symbol_en: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            symbol_en: symbol_en.into(),
        }
    }

    pub fn symbol_for(&self, language: Language) -> &str {
        match language {
            Language::En => &self.symbol_en,
            Language::Ar => &self.symbol,
        }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self::new("Ksh", "Ksh")
    }
}

/// Feature switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub search: bool,
    pub price_sorting: bool,
    pub cart: bool,
    pub whatsapp_order: bool,
    pub item_modal: bool,
    pub product_options: bool,
    pub branch_selection: bool,
    pub language_switcher: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            search: true,
            price_sorting: true,
            cart: true,
            whatsapp_order: true,
            item_modal: true,
            product_options: true,
            branch_selection: false,
            language_switcher: true,
        }
    }
}

/// A physical branch with its own WhatsApp contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: LocalizedText,
    pub whatsapp_number: String,
    pub address: String,
}

impl Branch {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<LocalizedText>,
        whatsapp_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            whatsapp_number: whatsapp_number.into(),
            address: String::new(),
        }
    }
}

/// Complete brand configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandConfig {
    pub brand_name: LocalizedText,
    pub currency: CurrencyConfig,
    /// Fallback WhatsApp number when no branch number applies
    pub whatsapp_number: String,
    /// Message prefix, followed by the brand name
    pub greeting: LocalizedText,
    pub features: FeatureFlags,
    pub branches: Vec<Branch>,
    pub default_branch: Option<String>,
    pub default_language: Language,
    /// Upper bound on the number of items listed per category
    pub visible_item_cap: usize,
    /// Prefix joined with an item's image reference
    pub image_base_path: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            brand_name: LocalizedText::new("Damascus House"),
            currency: CurrencyConfig::default(),
            whatsapp_number: "+254123456789".to_string(),
            greeting: LocalizedText::bilingual(
                "Hello! I'd like to place an order from",
                "مرحباً! أود تقديم طلب من",
            ),
            features: FeatureFlags::default(),
            branches: Vec::new(),
            default_branch: None,
            default_language: Language::En,
            visible_item_cap: 1000,
            image_base_path: "images/".to_string(),
        }
    }
}

impl BrandConfig {
    pub fn branch(&self, id: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.id == id)
    }

    /// The configured default branch, or the first one
    pub fn initial_branch(&self) -> Option<&Branch> {
        self.default_branch
            .as_deref()
            .and_then(|id| self.branch(id))
            .or_else(|| self.branches.first())
    }

    /// Branch after `current` in configuration order (wraps around)
    pub fn next_branch(&self, current: Option<&str>) -> Option<&Branch> {
        if self.branches.is_empty() {
            return None;
        }
        let next = current
            .and_then(|id| self.branches.iter().position(|b| b.id == id))
            .map(|i| (i + 1) % self.branches.len())
            .unwrap_or(0);
        self.branches.get(next)
    }

    /// WhatsApp number to send an order to
    ///
    /// Uses the branch number when branch selection is on and the branch
    /// has one; otherwise the contact number.
    pub fn whatsapp_number_for<'a>(&'a self, branch: Option<&'a Branch>) -> &'a str {
        match branch {
            Some(b) if self.features.branch_selection && !b.whatsapp_number.trim().is_empty() => {
                &b.whatsapp_number
            }
            _ => &self.whatsapp_number,
        }
    }

    /// Resolve an item's image reference to `{base}/{category}/{image}`
    ///
    /// Absolute paths and URLs are returned unchanged.
    pub fn image_url(&self, category: &str, item: &MenuItem) -> Option<String> {
        let image = item.image.as_deref()?.trim();
        if image.is_empty() {
            return None;
        }
        if image.starts_with('/') || image.contains("://") {
            return Some(image.to_string());
        }
        let base = self.image_base_path.trim_end_matches('/');
        let path = [base, category, image]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("/");
        Some(path)
    }
}
