//! Localized snapshot of the visible menu, used by listing mode

use menu_application::{MenuAction, MenuStore};
use menu_domain::{MenuItem, SortMode, format_money, format_price};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedOption {
    pub name: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedItem {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ListedOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<ListedItem>,
}

/// What to list and how
#[derive(Debug, Clone, Default)]
pub struct ListingRequest {
    /// `None` lists every category
    pub categories: Option<Vec<String>>,
    pub query: String,
    pub sort: SortMode,
}

impl ListingRequest {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(id: impl Into<String>) -> Self {
        Self {
            categories: Some(vec![id.into()]),
            ..Default::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }
}

/// Drive the store through each requested category and snapshot what it shows
pub fn build_listing(store: &mut MenuStore, request: &ListingRequest) -> Vec<ListedCategory> {
    let ids: Vec<String> = match &request.categories {
        Some(ids) => ids.clone(),
        None => store.catalog().category_ids().map(str::to_string).collect(),
    };

    store.dispatch(MenuAction::SetSearchQuery(request.query.clone()));
    store.dispatch(MenuAction::SetSortMode(request.sort));

    let mut listed = Vec::with_capacity(ids.len());
    for id in ids {
        if !store.catalog().contains_category(&id) {
            continue;
        }
        store.dispatch(MenuAction::SelectCategory(id.clone()));
        listed.push(snapshot_category(store, &id));
    }
    listed
}

fn snapshot_category(store: &MenuStore, id: &str) -> ListedCategory {
    let language = store.state().language;
    let name = store
        .catalog()
        .section(id)
        .map(|s| s.name.get(language).to_string())
        .unwrap_or_default();
    let items = store
        .visible_items()
        .into_iter()
        .map(|item| snapshot_item(store, id, item))
        .collect();
    ListedCategory {
        id: id.to_string(),
        name,
        items,
    }
}

fn snapshot_item(store: &MenuStore, category: &str, item: &MenuItem) -> ListedItem {
    let config = store.config();
    let language = store.state().language;
    let options = if config.features.product_options {
        item.options
            .iter()
            .map(|o| ListedOption {
                name: o.name.get(language).to_string(),
                price: format_money(item.unit_price(Some(o)), language, &config.currency),
            })
            .collect()
    } else {
        Vec::new()
    };
    ListedItem {
        name: item.name.get(language).to_string(),
        description: item.description_text(language).to_string(),
        price: format_price(item.price.as_ref(), language, &config.currency),
        image: config.image_url(category, item),
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_domain::{
        BrandConfig, CategorySection, ItemOption, Language, LocalizedText, MenuCatalog, Price,
    };
    use std::sync::Arc;

    fn store(language: Language) -> MenuStore {
        let catalog = MenuCatalog::default()
            .with_section(
                "grills",
                CategorySection::new(LocalizedText::bilingual("Grills", "مشاوي"))
                    .with_item(
                        MenuItem::new(
                            LocalizedText::bilingual("Chicken Shawarma", "شاورما دجاج"),
                            Price::Fixed(650.0),
                        )
                        .with_image("shawarma.jpg"),
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
            );
        let config = BrandConfig {
            default_language: language,
            ..Default::default()
        };
        MenuStore::new(Arc::new(catalog), Arc::new(config), false)
    }

    #[test]
    fn test_lists_every_category() {
        let mut store = store(Language::En);
        let listed = build_listing(&mut store, &ListingRequest::all());
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].items[0].price, "Ksh 900 - 1,200");
        assert_eq!(listed[1].items[0].options.len(), 2);
        assert_eq!(listed[1].items[0].options[1].price, "Ksh 1,200");
    }

    #[test]
    fn test_query_and_sort_applied() {
        let mut store = store(Language::En);
        let request = ListingRequest::category("grills").with_sort(SortMode::LowHigh);
        let listed = build_listing(&mut store, &request);
        assert_eq!(listed[0].items[0].name, "Falafel Wrap");

        let request = ListingRequest::category("grills").with_query("shawa");
        let listed = build_listing(&mut store, &request);
        assert_eq!(listed[0].items.len(), 1);
        assert_eq!(
            listed[0].items[0].image.as_deref(),
            Some("images/grills/shawarma.jpg")
        );
    }

    #[test]
    fn test_localized_names() {
        let mut store = store(Language::Ar);
        let listed = build_listing(&mut store, &ListingRequest::category("grills"));
        assert_eq!(listed[0].name, "مشاوي");
        assert_eq!(listed[0].items[0].name, "شاورما دجاج");
        // No Arabic name: falls back to English
        assert_eq!(listed[0].items[1].name, "Falafel Wrap");
    }

    #[test]
    fn test_unknown_category_skipped() {
        let mut store = store(Language::En);
        let listed = build_listing(&mut store, &ListingRequest::category("desserts"));
        assert!(listed.is_empty());
    }
}
