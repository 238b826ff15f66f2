//! Catalog filter engine
//!
//! Derives the visible items of a category from a search query and a
//! sort mode. Search is the union of four substring checks:
//!
//! | Field            | Match                          |
//! |------------------|--------------------------------|
//! | English name     | case-insensitive               |
//! | English desc.    | case-insensitive               |
//! | Arabic name      | case-sensitive, raw query      |
//! | Arabic desc.     | case-sensitive, raw query      |
//!
//! The display language plays no part in matching.

use super::entities::MenuItem;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Price ordering of the visible list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Catalog order
    #[default]
    #[serde(rename = "default")]
    Default,
    /// Ascending by minimum price
    #[serde(rename = "low-high")]
    LowHigh,
    /// Descending by maximum price
    #[serde(rename = "high-low")]
    HighLow,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::LowHigh => "low-high",
            SortMode::HighLow => "high-low",
        }
    }

    /// Next mode in the cycle default → low-high → high-low → default
    pub fn cycled(&self) -> SortMode {
        match self {
            SortMode::Default => SortMode::LowHigh,
            SortMode::LowHigh => SortMode::HighLow,
            SortMode::HighLow => SortMode::Default,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" | "none" => Ok(SortMode::Default),
            "low-high" | "low_high" | "asc" => Ok(SortMode::LowHigh),
            "high-low" | "high_low" | "desc" => Ok(SortMode::HighLow),
            _ => Err(DomainError::InvalidSortMode(s.to_string())),
        }
    }
}

/// Whether an item matches a free-text query
///
/// An empty query matches everything.
pub fn matches_query(item: &MenuItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let folded = query.to_lowercase();

    item.name.en.to_lowercase().contains(&folded)
        || item.name.ar().contains(query)
        || item
            .description
            .as_ref()
            .is_some_and(|d| d.en.to_lowercase().contains(&folded) || d.ar().contains(query))
}

/// Positions of the visible items within `items`
///
/// Filtering keeps catalog order; sorting is stable so equal prices keep
/// their relative order.
pub fn visible_indices(items: &[MenuItem], query: &str, sort: SortMode) -> Vec<usize> {
    let mut indices: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches_query(item, query))
        .map(|(i, _)| i)
        .collect();

    match sort {
        SortMode::Default => {}
        SortMode::LowHigh => {
            indices.sort_by(|&a, &b| items[a].min_price().total_cmp(&items[b].min_price()))
        }
        SortMode::HighLow => {
            indices.sort_by(|&a, &b| items[b].max_price().total_cmp(&items[a].max_price()))
        }
    }

    indices
}

/// Filter and sort a category's items
pub fn filter_items<'a>(items: &'a [MenuItem], query: &str, sort: SortMode) -> Vec<&'a MenuItem> {
    visible_indices(items, query, sort)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}
