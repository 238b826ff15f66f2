//! Menu state
//!
//! Single source of truth for everything a view renders. Only
//! [`reduce`](super::reducer::reduce) produces new states.

use menu_domain::{ItemOption, Language, OrderDraft, SortMode};
use std::collections::HashMap;

/// Which overlay is open
///
/// Item detail and cart are mutually exclusive: opening one replaces the other.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Browsing,
    ItemDetail(ItemDetail),
    Cart,
}

impl ViewState {
    pub fn is_browsing(&self) -> bool {
        matches!(self, ViewState::Browsing)
    }

    pub fn is_cart(&self) -> bool {
        matches!(self, ViewState::Cart)
    }

    pub fn detail(&self) -> Option<&ItemDetail> {
        match self {
            ViewState::ItemDetail(detail) => Some(detail),
            _ => None,
        }
    }
}

/// The item shown in the detail overlay and the option chosen there
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetail {
    pub category: String,
    pub item_name: String,
    pub option: Option<ItemOption>,
}

/// Complete menu state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuState {
    // -- Session --
    /// Ordering affordances enabled (read once at startup)
    pub order_mode: bool,
    pub language: Language,

    // -- Catalog view --
    pub selected_category: String,
    pub search_query: String,
    pub sort_mode: SortMode,

    // -- Overlays --
    pub view: ViewState,

    // -- Order --
    pub draft: OrderDraft,
    /// Last option chosen per item name
    pub remembered_options: HashMap<String, ItemOption>,
    pub selected_branch: Option<String>,
}

impl MenuState {
    pub fn remembered_option(&self, item_name: &str) -> Option<&ItemOption> {
        self.remembered_options.get(item_name)
    }

    pub fn total_items(&self) -> u64 {
        self.draft.total_items()
    }

    pub fn total_price(&self) -> f64 {
        self.draft.total_price()
    }
}
