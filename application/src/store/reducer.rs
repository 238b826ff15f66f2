//! Pure state transition function
//!
//! `reduce(ctx, state, action) -> state` never performs I/O. Actions that
//! do not apply (unknown names, disabled features, order mode off) return
//! the state unchanged.

use super::action::MenuAction;
use super::state::{ItemDetail, MenuState, ViewState};
use menu_domain::{BrandConfig, CartLineId, ItemOption, MenuCatalog, MenuItem};
use std::sync::Arc;

/// Immutable inputs shared by every transition
#[derive(Debug, Clone)]
pub struct StoreContext {
    pub catalog: Arc<MenuCatalog>,
    pub config: Arc<BrandConfig>,
}

impl StoreContext {
    pub fn new(catalog: Arc<MenuCatalog>, config: Arc<BrandConfig>) -> Self {
        Self { catalog, config }
    }

    /// Look up an item, preferring the active category
    pub fn find_item(&self, state: &MenuState, name: &str) -> Option<&MenuItem> {
        self.catalog
            .find_item(Some(state.selected_category.as_str()), name)
    }

    /// Category id holding the item, preferring the active category
    fn category_of(&self, state: &MenuState, name: &str) -> Option<String> {
        let in_selected = self
            .catalog
            .section(&state.selected_category)
            .is_some_and(|s| s.items.iter().any(|i| i.key() == name));
        if in_selected {
            return Some(state.selected_category.clone());
        }
        self.catalog
            .sections()
            .find(|(_, s)| s.items.iter().any(|i| i.key() == name))
            .map(|(id, _)| id.to_string())
    }
}

/// Build the initial state for a session
///
/// The first catalog category is selected and, when product options are
/// enabled, every item with options remembers its first option.
pub fn initial_state(ctx: &StoreContext, order_mode: bool) -> MenuState {
    let config = &ctx.config;
    let remembered_options = if config.features.product_options {
        ctx.catalog
            .items()
            .filter_map(|item| {
                item.options
                    .first()
                    .map(|opt| (item.key().to_string(), opt.clone()))
            })
            .collect()
    } else {
        Default::default()
    };

    MenuState {
        order_mode,
        language: config.default_language,
        selected_category: ctx.catalog.first_category().unwrap_or_default().to_string(),
        remembered_options,
        selected_branch: config.initial_branch().map(|b| b.id.clone()),
        ..Default::default()
    }
}

/// Apply one action
pub fn reduce(ctx: &StoreContext, mut state: MenuState, action: MenuAction) -> MenuState {
    let features = ctx.config.features;

    if action.requires_order_mode() && !(state.order_mode && features.cart) {
        return state;
    }

    match action {
        // -- Catalog --
        MenuAction::SelectCategory(id) => {
            if ctx.catalog.contains_category(&id) {
                state.selected_category = id;
            }
        }
        MenuAction::NextCategory => step_category(ctx, &mut state, 1),
        MenuAction::PreviousCategory => step_category(ctx, &mut state, -1),
        MenuAction::SetSearchQuery(query) => {
            if features.search {
                state.search_query = query;
            }
        }
        MenuAction::SetSortMode(mode) => {
            if features.price_sorting {
                state.sort_mode = mode;
            }
        }
        MenuAction::CycleSortMode => {
            if features.price_sorting {
                state.sort_mode = state.sort_mode.cycled();
            }
        }

        // -- Language --
        MenuAction::SetLanguage(language) => {
            if features.language_switcher {
                state.language = language;
            }
        }
        MenuAction::ToggleLanguage => {
            if features.language_switcher {
                state.language = state.language.toggled();
            }
        }

        // -- Item detail / options --
        MenuAction::OpenItem { item_name } => {
            if !features.item_modal {
                return state;
            }
            if let Some(category) = ctx.category_of(&state, &item_name) {
                let option = if features.product_options {
                    state.remembered_option(&item_name).cloned()
                } else {
                    None
                };
                state.view = ViewState::ItemDetail(ItemDetail {
                    category,
                    item_name,
                    option,
                });
            }
        }
        MenuAction::SelectOption {
            item_name,
            option_name,
        } => {
            if !features.product_options {
                return state;
            }
            let Some(option) = ctx
                .find_item(&state, &item_name)
                .and_then(|item| item.find_option(&option_name))
                .cloned()
            else {
                return state;
            };
            remember_option(&mut state, &item_name, &option);
        }
        MenuAction::CycleDetailOption => {
            if !features.product_options {
                return state;
            }
            let Some(detail) = state.view.detail() else {
                return state;
            };
            let Some(item) = ctx.find_item(&state, &detail.item_name) else {
                return state;
            };
            if !item.has_options() {
                return state;
            }
            let next = detail
                .option
                .as_ref()
                .and_then(|current| item.options.iter().position(|o| o.key() == current.key()))
                .map(|i| (i + 1) % item.options.len())
                .unwrap_or(0);
            let option = item.options[next].clone();
            let item_name = item.key().to_string();
            remember_option(&mut state, &item_name, &option);
        }
        MenuAction::AddDetailToCart => {
            let Some(detail) = state.view.detail().cloned() else {
                return state;
            };
            if let Some(item) = ctx.find_item(&state, &detail.item_name).cloned() {
                add_to_cart(&mut state, &item, 1, detail.option.as_ref());
            }
            state.view = ViewState::Browsing;
        }

        // -- Cart --
        MenuAction::AddToCart {
            item_name,
            quantity,
            option_name,
        } => {
            let Some(item) = ctx.find_item(&state, &item_name).cloned() else {
                return state;
            };
            let option = option_name
                .as_deref()
                .filter(|_| features.product_options)
                .and_then(|name| item.find_option(name))
                .cloned();
            add_to_cart(&mut state, &item, quantity, option.as_ref());
        }
        MenuAction::UpdateQuantity { line_id, quantity } => {
            state.draft.update_quantity(&line_id, quantity);
        }
        MenuAction::IncrementLine(line_id) => {
            if let Some(quantity) = line_quantity(&state, &line_id) {
                state.draft.update_quantity(&line_id, quantity + 1);
            }
        }
        MenuAction::DecrementLine(line_id) => {
            if let Some(quantity) = line_quantity(&state, &line_id) {
                state.draft.update_quantity(&line_id, quantity - 1);
            }
        }
        MenuAction::RemoveFromCart(line_id) => {
            state.draft.remove(&line_id);
        }
        MenuAction::ClearCart => {
            state.draft.clear();
        }
        MenuAction::SetNotes(notes) => {
            state.draft.set_notes(notes);
        }

        // -- Overlays --
        MenuAction::OpenCart => {
            state.view = ViewState::Cart;
        }
        MenuAction::CloseOverlay => {
            state.view = ViewState::Browsing;
        }

        // -- Branches --
        MenuAction::SelectBranch(id) => {
            if features.branch_selection && ctx.config.branch(&id).is_some() {
                state.selected_branch = Some(id);
            }
        }
        MenuAction::CycleBranch => {
            if features.branch_selection
                && let Some(branch) = ctx.config.next_branch(state.selected_branch.as_deref())
            {
                state.selected_branch = Some(branch.id.clone());
            }
        }
    }

    state
}

fn step_category(ctx: &StoreContext, state: &mut MenuState, offset: isize) {
    if let Some(id) = ctx
        .catalog
        .neighbor_category(&state.selected_category, offset)
    {
        state.selected_category = id.to_string();
    }
}

fn line_quantity(state: &MenuState, id: &CartLineId) -> Option<i64> {
    state.draft.line(id).map(|l| i64::from(l.quantity))
}

/// Record an option choice, keeping an open detail for the same item in sync
fn remember_option(state: &mut MenuState, item_name: &str, option: &ItemOption) {
    state
        .remembered_options
        .insert(item_name.to_string(), option.clone());
    if let ViewState::ItemDetail(detail) = &mut state.view
        && detail.item_name == item_name
    {
        detail.option = Some(option.clone());
    }
}

fn add_to_cart(state: &mut MenuState, item: &MenuItem, quantity: u32, option: Option<&ItemOption>) {
    if state.draft.add(item, quantity, option).is_some()
        && let Some(option) = option
    {
        state
            .remembered_options
            .insert(item.key().to_string(), option.clone());
    }
}
