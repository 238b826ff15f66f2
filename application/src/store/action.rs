//! Actions accepted by the menu store

use menu_domain::{CartLineId, Language, SortMode};

/// A user intent, applied by [`reduce`](super::reducer::reduce)
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    // -- Catalog --
    SelectCategory(String),
    NextCategory,
    PreviousCategory,
    SetSearchQuery(String),
    SetSortMode(SortMode),
    CycleSortMode,

    // -- Language --
    SetLanguage(Language),
    ToggleLanguage,

    // -- Item detail / options --
    OpenItem {
        item_name: String,
    },
    SelectOption {
        item_name: String,
        option_name: String,
    },
    /// Advance the option chosen in the open item detail
    CycleDetailOption,
    /// Add one of the detailed item with its chosen option
    AddDetailToCart,

    // -- Cart --
    AddToCart {
        item_name: String,
        quantity: u32,
        option_name: Option<String>,
    },
    UpdateQuantity {
        line_id: CartLineId,
        quantity: i64,
    },
    IncrementLine(CartLineId),
    DecrementLine(CartLineId),
    RemoveFromCart(CartLineId),
    ClearCart,
    SetNotes(String),

    // -- Overlays --
    OpenCart,
    CloseOverlay,

    // -- Branches --
    SelectBranch(String),
    CycleBranch,
}

impl MenuAction {
    /// Whether this action changes the order and therefore needs order mode
    pub fn requires_order_mode(&self) -> bool {
        matches!(
            self,
            MenuAction::AddDetailToCart
                | MenuAction::AddToCart { .. }
                | MenuAction::UpdateQuantity { .. }
                | MenuAction::IncrementLine(_)
                | MenuAction::DecrementLine(_)
                | MenuAction::RemoveFromCart(_)
                | MenuAction::ClearCart
                | MenuAction::SetNotes(_)
                | MenuAction::OpenCart
        )
    }

    /// Convenience constructor for adding a single unit
    pub fn add_one(item_name: impl Into<String>, option_name: Option<String>) -> Self {
        MenuAction::AddToCart {
            item_name: item_name.into(),
            quantity: 1,
            option_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_actions_require_order_mode() {
        assert!(MenuAction::ClearCart.requires_order_mode());
        assert!(MenuAction::OpenCart.requires_order_mode());
        assert!(MenuAction::add_one("Hummus", None).requires_order_mode());
        assert!(MenuAction::SetNotes("x".into()).requires_order_mode());
    }

    #[test]
    fn test_browse_actions_do_not_require_order_mode() {
        assert!(!MenuAction::NextCategory.requires_order_mode());
        assert!(!MenuAction::ToggleLanguage.requires_order_mode());
        assert!(!MenuAction::CloseOverlay.requires_order_mode());
        assert!(
            !MenuAction::OpenItem {
                item_name: "Hummus".into()
            }
            .requires_order_mode()
        );
        assert!(
            !MenuAction::SelectOption {
                item_name: "Mandi".into(),
                option_name: "Half".into()
            }
            .requires_order_mode()
        );
    }
}
