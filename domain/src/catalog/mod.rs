//! Menu catalog and the filter engine over it
//!
//! - [`entities`] - [`MenuCatalog`], [`CategorySection`], [`MenuItem`], [`ItemOption`]
//! - [`price`] - [`Price`] resolution and display formatting
//! - [`filter`] - search and price sorting

pub mod entities;
pub mod filter;
pub mod price;

pub use entities::{CategorySection, ItemOption, MenuCatalog, MenuItem};
pub use filter::{SortMode, filter_items, matches_query, visible_indices};
pub use price::{Price, format_amount, format_money, format_price};
