//! Item prices and their display format
//!
//! A price is either a single amount or a range given as a list of
//! amounts. Resolution never yields a negative number: negative inputs
//! clamp to zero and an empty range resolves to zero.

use crate::config::CurrencyConfig;
use crate::core::language::Language;
use serde::{Deserialize, Serialize};

/// Price of a menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Fixed(f64),
    Range(Vec<f64>),
}

impl Price {
    /// Lowest amount (0 for an empty range)
    pub fn min(&self) -> f64 {
        match self {
            Price::Fixed(p) => clamp(*p),
            Price::Range(values) => values
                .iter()
                .copied()
                .map(clamp)
                .reduce(f64::min)
                .unwrap_or(0.0),
        }
    }

    /// Highest amount (0 for an empty range)
    pub fn max(&self) -> f64 {
        match self {
            Price::Fixed(p) => clamp(*p),
            Price::Range(values) => values
                .iter()
                .copied()
                .map(clamp)
                .reduce(f64::max)
                .unwrap_or(0.0),
        }
    }

    /// `(min, max)`, or `None` when there is nothing to show
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            Price::Range(values) if values.is_empty() => None,
            _ => Some((self.min(), self.max())),
        }
    }
}

fn clamp(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Minimum of an optional price; missing prices resolve to 0
pub fn min_price(price: Option<&Price>) -> f64 {
    price.map(Price::min).unwrap_or(0.0)
}

/// Maximum of an optional price; missing prices resolve to 0
pub fn max_price(price: Option<&Price>) -> f64 {
    price.map(Price::max).unwrap_or(0.0)
}

/// Format an amount with thousands separators and at most three
/// fraction digits (`1440` → `"1,440"`, `12.5` → `"12.5"`).
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }

    let negative = amount < 0.0;
    let scaled = (amount.abs() * 1000.0).round() as u64;
    let whole = scaled / 1000;
    let fraction = scaled % 1000;

    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if fraction > 0 {
        let fraction = format!("{:03}", fraction);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }

    if negative && scaled > 0 {
        out.insert(0, '-');
    }
    out
}

/// Format an amount with the currency symbol for the language
pub fn format_money(amount: f64, language: Language, currency: &CurrencyConfig) -> String {
    format!("{} {}", currency.symbol_for(language), format_amount(amount))
}

/// Format an item price for display
///
/// Missing prices and empty ranges render as zero; ranges whose ends
/// differ render as `"{symbol} {min} - {max}"`.
pub fn format_price(price: Option<&Price>, language: Language, currency: &CurrencyConfig) -> String {
    let symbol = currency.symbol_for(language);
    match price.and_then(Price::bounds) {
        None => format!("{} 0", symbol),
        Some((min, max)) if min == max => format!("{} {}", symbol, format_amount(min)),
        Some((min, max)) => format!(
            "{} {} - {}",
            symbol,
            format_amount(min),
            format_amount(max)
        ),
    }
}
