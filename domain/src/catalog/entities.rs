//! Catalog entities
//!
//! The catalog is an ordered mapping from category id to a
//! [`CategorySection`]. It is built once at startup and never mutated.

use super::price::{Price, max_price, min_price};
use crate::core::error::DomainError;
use crate::core::language::Language;
use crate::core::text::LocalizedText;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A selectable variant of an item
///
/// The option price is absolute: choosing an option replaces the item
/// price rather than adding to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOption {
    pub name: LocalizedText,
    pub price: f64,
}

impl ItemOption {
    pub fn new(name: impl Into<LocalizedText>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Identity key (English name)
    pub fn key(&self) -> &str {
        &self.name.en
    }
}

/// A dish on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ItemOption>,
}

impl MenuItem {
    pub fn new(name: impl Into<LocalizedText>, price: Price) -> Self {
        Self {
            name: name.into(),
            description: None,
            image: None,
            price: Some(price),
            options: Vec::new(),
        }
    }

    /// An item whose price is absent from the catalog
    pub fn unpriced(name: impl Into<LocalizedText>) -> Self {
        Self {
            price: None,
            ..Self::new(name, Price::Fixed(0.0))
        }
    }

    pub fn with_description(mut self, description: impl Into<LocalizedText>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_option(mut self, option: ItemOption) -> Self {
        self.options.push(option);
        self
    }

    /// Identity key (English name)
    pub fn key(&self) -> &str {
        &self.name.en
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn find_option(&self, name: &str) -> Option<&ItemOption> {
        self.options.iter().find(|o| o.key() == name)
    }

    /// Lowest listed price (used for ascending sorts and the base unit price)
    pub fn min_price(&self) -> f64 {
        min_price(self.price.as_ref())
    }

    /// Highest listed price (used for descending sorts)
    pub fn max_price(&self) -> f64 {
        max_price(self.price.as_ref())
    }

    /// Resolve the unit price for a purchase
    ///
    /// An option belonging to this item overrides the base price; any
    /// other option is ignored.
    pub fn unit_price(&self, option: Option<&ItemOption>) -> f64 {
        match option.and_then(|o| self.find_option(o.key())) {
            Some(opt) if opt.price.is_finite() && opt.price > 0.0 => opt.price,
            Some(_) => 0.0,
            None => self.min_price(),
        }
    }

    pub fn description_text(&self, language: Language) -> &str {
        self.description
            .as_ref()
            .map(|d| d.get(language))
            .unwrap_or("")
    }

    /// Name as shown in the cart: `"{name} ({option})"` when an option is chosen
    pub fn display_name(&self, option: Option<&ItemOption>, language: Language) -> String {
        let base = self.name.get(language);
        match option {
            Some(opt) if self.has_options() => format!("{} ({})", base, opt.name.get(language)),
            _ => base.to_string(),
        }
    }
}

/// A category of the menu
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategorySection {
    pub name: LocalizedText,
    pub items: Vec<MenuItem>,
}

impl CategorySection {
    pub fn new(name: impl Into<LocalizedText>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }
}

/// The full menu, keyed by category id in file order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuCatalog {
    sections: IndexMap<String, CategorySection>,
}

impl MenuCatalog {
    pub fn new(sections: IndexMap<String, CategorySection>) -> Self {
        Self { sections }
    }

    /// Builder-style insert that keeps insertion order
    pub fn with_section(mut self, id: impl Into<String>, section: CategorySection) -> Self {
        self.sections.insert(id.into(), section);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Fail when there is nothing to browse
    pub fn ensure_not_empty(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            Err(DomainError::EmptyCatalog)
        } else {
            Ok(())
        }
    }

    /// Default category: the first key in catalog order
    pub fn first_category(&self) -> Option<&str> {
        self.sections.keys().next().map(String::as_str)
    }

    pub fn section(&self, id: &str) -> Option<&CategorySection> {
        self.sections.get(id)
    }

    pub fn require_section(&self, id: &str) -> Result<&CategorySection, DomainError> {
        self.section(id)
            .ok_or_else(|| DomainError::UnknownCategory(id.to_string()))
    }

    pub fn contains_category(&self, id: &str) -> bool {
        self.sections.contains_key(id)
    }

    pub fn category_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &CategorySection)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn item_count(&self) -> usize {
        self.sections.values().map(|s| s.items.len()).sum()
    }

    /// Every item across categories, in catalog order
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.sections.values().flat_map(|s| s.items.iter())
    }

    /// Look up an item by name, preferring the given category
    pub fn find_item(&self, category: Option<&str>, name: &str) -> Option<&MenuItem> {
        category
            .and_then(|c| self.section(c))
            .and_then(|s| s.items.iter().find(|i| i.key() == name))
            .or_else(|| self.items().find(|i| i.key() == name))
    }

    /// Category `offset` steps away from `current`, wrapping around
    pub fn neighbor_category(&self, current: &str, offset: isize) -> Option<&str> {
        let len = self.sections.len() as isize;
        if len == 0 {
            return None;
        }
        let idx = self.sections.get_index_of(current).unwrap_or(0) as isize;
        let next = (idx + offset).rem_euclid(len) as usize;
        self.sections.get_index(next).map(|(k, _)| k.as_str())
    }
}
