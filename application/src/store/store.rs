//! Menu store
//!
//! Owns the current [`MenuState`], applies actions through the pure
//! reducer and notifies subscribed observers. Derived values (the visible
//! item list) are memoized on the inputs that determine them.

use super::action::MenuAction;
use super::reducer::{StoreContext, initial_state, reduce};
use super::state::MenuState;
use crate::config::SessionOptions;
use crate::ports::state_observer::StateObserver;
use menu_domain::{
    Branch, BrandConfig, CartLineId, ItemOption, MenuCatalog, MenuItem, SortMode, visible_indices,
};
use std::cell::RefCell;
use std::sync::Arc;
use tracing::debug;

/// Inputs the visible list depends on
#[derive(Debug, Clone, PartialEq, Eq)]
struct VisibleKey {
    category: String,
    query: String,
    sort: SortMode,
}

pub struct MenuStore {
    ctx: StoreContext,
    state: MenuState,
    observers: Vec<Arc<dyn StateObserver>>,
    visible_cache: RefCell<Option<(VisibleKey, Arc<[usize]>)>>,
}

impl MenuStore {
    pub fn new(catalog: Arc<MenuCatalog>, config: Arc<BrandConfig>, order_mode: bool) -> Self {
        let ctx = StoreContext::new(catalog, config);
        let state = initial_state(&ctx, order_mode);
        Self {
            ctx,
            state,
            observers: Vec::new(),
            visible_cache: RefCell::new(None),
        }
    }

    /// Build a store for a session, applying its language override
    pub fn from_session(
        catalog: Arc<MenuCatalog>,
        config: Arc<BrandConfig>,
        session: &SessionOptions,
    ) -> Self {
        let mut store = Self::new(catalog, config, session.order_mode);
        if let Some(language) = session.language {
            store.state.language = language;
        }
        store
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.ctx.catalog
    }

    pub fn config(&self) -> &BrandConfig {
        &self.ctx.config
    }

    pub fn context(&self) -> &StoreContext {
        &self.ctx
    }

    /// Register an observer notified after every dispatch that changed state
    pub fn subscribe(&mut self, observer: Arc<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// Apply an action; returns whether the state changed
    pub fn dispatch(&mut self, action: MenuAction) -> bool {
        let previous = std::mem::take(&mut self.state);
        let next = reduce(&self.ctx, previous.clone(), action.clone());
        let changed = next != previous;
        self.state = next;

        if changed {
            debug!(?action, "State changed");
            for observer in &self.observers {
                observer.on_state_changed(&self.state, &action);
            }
        } else {
            debug!(?action, "Action ignored");
        }
        changed
    }

    /// Effective `(category, query, sort)` after feature flags are applied
    fn visible_key(&self) -> VisibleKey {
        let features = self.ctx.config.features;
        VisibleKey {
            category: self.state.selected_category.clone(),
            query: if features.search {
                self.state.search_query.clone()
            } else {
                String::new()
            },
            sort: if features.price_sorting {
                self.state.sort_mode
            } else {
                SortMode::Default
            },
        }
    }

    /// Indices into the selected category's items, filtered, sorted and capped
    ///
    /// Recomputed only when the selected category, query or sort changes.
    pub fn visible_indices(&self) -> Arc<[usize]> {
        let key = self.visible_key();
        if let Some((cached_key, indices)) = self.visible_cache.borrow().as_ref()
            && *cached_key == key
        {
            return Arc::clone(indices);
        }

        let items = self
            .ctx
            .catalog
            .section(&key.category)
            .map(|s| s.items.as_slice())
            .unwrap_or_default();
        let mut indices = visible_indices(items, &key.query, key.sort);
        indices.truncate(self.ctx.config.visible_item_cap);
        let indices: Arc<[usize]> = indices.into();

        debug!(
            category = %key.category,
            query = %key.query,
            sort = %key.sort,
            count = indices.len(),
            "Recomputed visible items"
        );
        *self.visible_cache.borrow_mut() = Some((key, Arc::clone(&indices)));
        indices
    }

    /// Visible items of the selected category
    pub fn visible_items(&self) -> Vec<&MenuItem> {
        let Some(section) = self.ctx.catalog.section(&self.state.selected_category) else {
            return Vec::new();
        };
        self.visible_indices()
            .iter()
            .filter_map(|&i| section.items.get(i))
            .collect()
    }

    /// Item shown in the detail overlay
    pub fn detail_item(&self) -> Option<&MenuItem> {
        let detail = self.state.view.detail()?;
        self.ctx
            .catalog
            .find_item(Some(detail.category.as_str()), &detail.item_name)
    }

    /// Option that a list-level add would use for this item
    pub fn current_option(&self, item: &MenuItem) -> Option<&ItemOption> {
        if !self.ctx.config.features.product_options || !item.has_options() {
            return None;
        }
        self.state.remembered_option(item.key())
    }

    /// Line id a list-level add would target for this item
    pub fn current_line_id(&self, item: &MenuItem) -> CartLineId {
        CartLineId::for_item(item, self.current_option(item))
    }

    /// Quantity in the cart for the line a list-level add would target
    pub fn cart_quantity(&self, item: &MenuItem) -> u32 {
        self.state
            .draft
            .line(&self.current_line_id(item))
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    pub fn selected_branch(&self) -> Option<&Branch> {
        self.state
            .selected_branch
            .as_deref()
            .and_then(|id| self.ctx.config.branch(id))
    }

    /// Whether ordering affordances should be shown
    pub fn ordering_enabled(&self) -> bool {
        self.state.order_mode && self.ctx.config.features.cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_domain::{CategorySection, LocalizedText, Price};
    use std::sync::Mutex;

    struct RecordingObserver {
        actions: Mutex<Vec<MenuAction>>,
    }

    impl StateObserver for RecordingObserver {
        fn on_state_changed(&self, _state: &MenuState, action: &MenuAction) {
            self.actions.lock().unwrap().push(action.clone());
        }
    }

    fn catalog() -> MenuCatalog {
        MenuCatalog::default()
            .with_section(
                "grills",
                CategorySection::new("Grills")
                    .with_item(MenuItem::new("Chicken Shawarma", Price::Fixed(650.0)))
                    .with_item(
                        MenuItem::new(
                            LocalizedText::bilingual("Beef Kebab", "كباب لحم"),
                            Price::Fixed(900.0),
                        )
                        .with_description("Grilled skewers, shawarma spices"),
                    )
                    .with_item(MenuItem::new("Falafel Wrap", Price::Fixed(350.0))),
            )
            .with_section(
                "mains",
                CategorySection::new("Mains").with_item(
                    MenuItem::new("Mandi", Price::Range(vec![900.0, 1200.0]))
                        .with_option(ItemOption::new("Quarter", 900.0))
                        .with_option(ItemOption::new("Half", 1200.0)),
                ),
            )
    }

    fn store_with(config: BrandConfig, order_mode: bool) -> MenuStore {
        MenuStore::new(Arc::new(catalog()), Arc::new(config), order_mode)
    }

    fn store() -> MenuStore {
        store_with(BrandConfig::default(), true)
    }

    fn names(store: &MenuStore) -> Vec<String> {
        store
            .visible_items()
            .iter()
            .map(|i| i.key().to_string())
            .collect()
    }

    #[test]
    fn test_initial_category_is_first() {
        let store = store();
        assert_eq!(store.state().selected_category, "grills");
        assert_eq!(names(&store).len(), 3);
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let mut store = store();
        store.dispatch(MenuAction::SetSearchQuery("shawa".into()));
        assert_eq!(names(&store), vec!["Chicken Shawarma", "Beef Kebab"]);
    }

    #[test]
    fn test_sort_low_high() {
        let mut store = store();
        store.dispatch(MenuAction::SetSortMode(SortMode::LowHigh));
        assert_eq!(
            names(&store),
            vec!["Falafel Wrap", "Chicken Shawarma", "Beef Kebab"]
        );
    }

    #[test]
    fn test_visible_cap() {
        let config = BrandConfig {
            visible_item_cap: 2,
            ..Default::default()
        };
        let store = store_with(config, false);
        assert_eq!(names(&store).len(), 2);
    }

    #[test]
    fn test_visible_indices_memoized() {
        let mut store = store();
        let first = store.visible_indices();
        // Unrelated change keeps the cached list
        store.dispatch(MenuAction::ToggleLanguage);
        let second = store.visible_indices();
        assert!(Arc::ptr_eq(&first, &second));

        store.dispatch(MenuAction::SetSearchQuery("kebab".into()));
        let third = store.visible_indices();
        assert!(!Arc::ptr_eq(&second, &third));
        assert_eq!(&*third, &[1]);
    }

    #[test]
    fn test_disabled_search_ignores_query() {
        let mut config = BrandConfig::default();
        config.features.search = false;
        let mut store = store_with(config, false);
        assert!(!store.dispatch(MenuAction::SetSearchQuery("kebab".into())));
        assert_eq!(names(&store).len(), 3);
    }

    #[test]
    fn test_observers_notified_on_change_only() {
        let mut store = store();
        let observer = Arc::new(RecordingObserver {
            actions: Mutex::new(Vec::new()),
        });
        store.subscribe(observer.clone());

        assert!(store.dispatch(MenuAction::add_one("Falafel Wrap", None)));
        assert!(!store.dispatch(MenuAction::SelectCategory("unknown".into())));

        let actions = observer.actions.lock().unwrap();
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn test_cart_quantity_follows_remembered_option() {
        let mut store = store();
        store.dispatch(MenuAction::SelectCategory("mains".into()));
        let mandi = store.catalog().find_item(None, "Mandi").cloned().unwrap();
        assert_eq!(store.current_option(&mandi).unwrap().key(), "Quarter");

        store.dispatch(MenuAction::add_one("Mandi", Some("Quarter".into())));
        assert_eq!(store.cart_quantity(&mandi), 1);

        store.dispatch(MenuAction::SelectOption {
            item_name: "Mandi".into(),
            option_name: "Half".into(),
        });
        assert_eq!(store.current_line_id(&mandi).as_str(), "Mandi_Half");
        assert_eq!(store.cart_quantity(&mandi), 0);
    }

    #[test]
    fn test_detail_item_lookup() {
        let mut store = store();
        store.dispatch(MenuAction::OpenItem {
            item_name: "Mandi".into(),
        });
        assert_eq!(store.detail_item().unwrap().key(), "Mandi");
        store.dispatch(MenuAction::CloseOverlay);
        assert!(store.detail_item().is_none());
    }

    #[test]
    fn test_from_session_language_override() {
        let session = SessionOptions::default().with_language(Some(menu_domain::Language::Ar));
        let store = MenuStore::from_session(
            Arc::new(catalog()),
            Arc::new(BrandConfig::default()),
            &session,
        );
        assert_eq!(store.state().language, menu_domain::Language::Ar);
        assert!(!store.state().order_mode);
    }

    #[test]
    fn test_ordering_enabled() {
        assert!(store().ordering_enabled());
        assert!(!store_with(BrandConfig::default(), false).ordering_enabled());
    }
}
