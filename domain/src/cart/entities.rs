//! Cart entities
//!
//! An [`OrderDraft`] holds at most one [`CartLine`] per `(item, option)`
//! identity. Quantities are always at least 1; setting a quantity of 0
//! or less removes the line. Out-of-range operations are no-ops.

use crate::catalog::entities::{ItemOption, MenuItem};
use crate::core::language::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a cart line: item name, suffixed `_{option}` when an option is chosen
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartLineId(String);

impl CartLineId {
    pub fn for_item(item: &MenuItem, option: Option<&ItemOption>) -> Self {
        match option {
            Some(opt) if !opt.key().is_empty() => Self(format!("{}_{}", item.key(), opt.key())),
            _ => Self(item.key().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CartLineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CartLineId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One resolved entry of the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: CartLineId,
    pub item: MenuItem,
    pub option: Option<ItemOption>,
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    pub fn display_name(&self, language: Language) -> String {
        self.item.display_name(self.option.as_ref(), language)
    }
}

/// The order being assembled: cart lines plus free-text notes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    lines: Vec<CartLine>,
    notes: String,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of an item, merging into an existing line with the same identity
    ///
    /// Options that do not belong to the item are ignored. Returns the id
    /// of the affected line, or `None` when `quantity` is 0.
    pub fn add(
        &mut self,
        item: &MenuItem,
        quantity: u32,
        option: Option<&ItemOption>,
    ) -> Option<CartLineId> {
        if quantity == 0 {
            return None;
        }

        let option = option.and_then(|o| item.find_option(o.key()));
        let id = CartLineId::for_item(item, option);

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                id: id.clone(),
                item: item.clone(),
                option: option.cloned(),
                unit_price: item.unit_price(option),
                quantity,
            });
        }
        Some(id)
    }

    /// Set a line's quantity exactly; `quantity <= 0` removes the line
    pub fn update_quantity(&mut self, id: &CartLineId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|l| &l.id == id) {
            line.quantity = quantity;
        }
    }

    /// Remove a line; returns whether anything was removed
    pub fn remove(&mut self, id: &CartLineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.id != id);
        self.lines.len() != before
    }

    /// Empty the cart and the notes
    pub fn clear(&mut self) {
        self.lines.clear();
        self.notes.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: &CartLineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Sum of quantities across all lines
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `unit_price * quantity` across all lines
    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}
