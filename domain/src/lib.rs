//! Domain layer for whatsapp-menu
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! A static, ordered mapping of categories to items. The filter engine
//! derives the visible list from `(category, query, sort)`.
//!
//! ## Cart
//!
//! An [`OrderDraft`] keyed by `(item, option)` identity, with derived
//! totals.
//!
//! ## Checkout
//!
//! The draft is rendered into an [`OrderMessage`] and carried to the
//! restaurant through a [`WhatsAppLink`].

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use cart::{CartLine, CartLineId, OrderDraft};
pub use catalog::{
    CategorySection, ItemOption, MenuCatalog, MenuItem, Price, SortMode, filter_items,
    format_amount, format_money, format_price, matches_query, visible_indices,
};
pub use checkout::{OrderMessage, WhatsAppLink};
pub use config::{
    Branch, BrandConfig, ConfigIssue, ConfigIssueCode, CurrencyConfig, FeatureFlags, Severity,
};
pub use core::{
    error::DomainError,
    language::{Language, TextDirection},
    text::LocalizedText,
};
