//! JSON menu file reader
//!
//! The file is an object keyed by category id, in display order:
//!
//! ```json
//! {
//!   "starters": {
//!     "name": "Starters",
//!     "name_ar": "المقبلات",
//!     "items": [
//!       { "name": "Hummus", "name_ar": "حمص", "price": 480, "image": "hummus.jpg" },
//!       { "name": "Mandi", "price": [900, 1200],
//!         "options": [ { "name": "Quarter", "price": 900 }, { "name": "Half", "price": 1200 } ] }
//!     ]
//!   }
//! }
//! ```
//!
//! A missing or non-text `name` loads as an empty string.
//! `price` may be a number, an array of numbers, a numeric string, an
//! empty string or absent. Anything that is not a number is treated as
//! missing.

use indexmap::IndexMap;
use menu_application::{CatalogSource, CatalogSourceError};
use menu_domain::{CategorySection, ItemOption, LocalizedText, MenuCatalog, MenuItem, Price};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct RawSection {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    name_ar: Option<String>,
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default, deserialize_with = "lenient_text")]
    name: Option<String>,
    #[serde(default)]
    name_ar: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    description_ar: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default, deserialize_with = "lenient_price")]
    price: Option<Price>,
    #[serde(default)]
    options: Vec<RawOption>,
}

#[derive(Debug, Deserialize)]
struct RawOption {
    #[serde(default, deserialize_with = "lenient_text")]
    name: Option<String>,
    #[serde(default)]
    name_ar: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    price: f64,
}

fn amount_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|amount| amount.is_finite())
}

fn price_from_value(value: &Value) -> Option<Price> {
    match value {
        Value::Array(values) => {
            let amounts: Vec<f64> = values.iter().filter_map(amount_from_value).collect();
            (!amounts.is_empty()).then_some(Price::Range(amounts))
        }
        other => amount_from_value(other).map(Price::Fixed),
    }
}

fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Price>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(price_from_value(&value))
}

fn lenient_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(amount_from_value(&value).unwrap_or(0.0))
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn localized(en: &str, ar: Option<String>) -> LocalizedText {
    match ar {
        Some(ar) => LocalizedText::new(en).with_ar(ar),
        None => LocalizedText::new(en),
    }
}

impl RawItem {
    fn into_item(self) -> MenuItem {
        let description = match (self.description, self.description_ar) {
            (None, None) => None,
            (en, ar) => Some(localized(en.as_deref().unwrap_or_default(), ar)),
        };
        MenuItem {
            name: localized(self.name.as_deref().unwrap_or_default(), self.name_ar),
            description,
            image: self.image.filter(|i| !i.trim().is_empty()),
            price: self.price,
            options: self
                .options
                .into_iter()
                .map(|o| {
                    let name = o.name.as_deref().unwrap_or_default();
                    ItemOption::new(localized(name, o.name_ar), o.price)
                })
                .collect(),
        }
    }
}

/// Reads the catalog from a JSON file
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse catalog JSON, keeping category order
    pub fn parse(json: &str) -> Result<MenuCatalog, serde_json::Error> {
        let raw: IndexMap<String, RawSection> = serde_json::from_str(json)?;
        let sections = raw
            .into_iter()
            .map(|(id, section)| {
                let name = localized(section.name.as_deref().unwrap_or(&id), section.name_ar);
                let items: Vec<MenuItem> = section.items.into_iter().map(RawItem::into_item).collect();
                for item in items.iter().filter(|i| i.price.is_none()) {
                    debug!("Item '{}' in '{}' has no price", item.key(), id);
                }
                let nameless = items.iter().filter(|i| i.key().is_empty()).count();
                if nameless > 0 {
                    warn!("{} item(s) in '{}' have no name", nameless, id);
                }
                (id, CategorySection { name, items })
            })
            .collect();
        Ok(MenuCatalog::new(sections))
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self) -> Result<MenuCatalog, CatalogSourceError> {
        let path = self.path.display().to_string();
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            warn!("Could not read catalog {}: {}", path, e);
            CatalogSourceError::Io {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;
        Self::parse(&content).map_err(|e| CatalogSourceError::Parse {
            path,
            message: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_domain::Language;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "starters": {
            "name": "Starters",
            "name_ar": "المقبلات",
            "items": [
                { "name": "Hummus", "name_ar": "حمص", "price": 480, "image": "hummus.jpg" },
                { "name": "Moutabal", "price": "520" },
                { "name": "Water", "price": "" }
            ]
        },
        "mains": {
            "name": "Mains",
            "items": [
                {
                    "name": "Mandi",
                    "description": "Slow-cooked rice and lamb",
                    "description_ar": "أرز ولحم مطهو ببطء",
                    "price": [900, 1200],
                    "options": [
                        { "name": "Quarter", "name_ar": "ربع", "price": 900 },
                        { "name": "Half", "price": "1200" }
                    ]
                }
            ]
        },
        "drinks": { "items": [] }
    }"#;

    #[test]
    fn test_parse_keeps_category_order() {
        let catalog = JsonCatalogSource::parse(SAMPLE).unwrap();
        let ids: Vec<_> = catalog.category_ids().collect();
        assert_eq!(ids, vec!["starters", "mains", "drinks"]);
        assert_eq!(catalog.first_category(), Some("starters"));
    }

    #[test]
    fn test_parse_lenient_prices() {
        let catalog = JsonCatalogSource::parse(SAMPLE).unwrap();
        let hummus = catalog.find_item(None, "Hummus").unwrap();
        assert_eq!(hummus.price, Some(Price::Fixed(480.0)));
        let moutabal = catalog.find_item(None, "Moutabal").unwrap();
        assert_eq!(moutabal.price, Some(Price::Fixed(520.0)));
        let water = catalog.find_item(None, "Water").unwrap();
        assert!(water.price.is_none());
        assert_eq!(water.unit_price(None), 0.0);

        let mandi = catalog.find_item(None, "Mandi").unwrap();
        assert_eq!(mandi.price, Some(Price::Range(vec![900.0, 1200.0])));
        assert_eq!(mandi.find_option("Half").unwrap().price, 1200.0);
    }

    #[test]
    fn test_parse_localized_fields() {
        let catalog = JsonCatalogSource::parse(SAMPLE).unwrap();
        let starters = catalog.section("starters").unwrap();
        assert_eq!(starters.name.get(Language::Ar), "المقبلات");
        // Missing category name falls back to the id
        assert_eq!(catalog.section("drinks").unwrap().name.get(Language::En), "drinks");

        let mandi = catalog.find_item(None, "Mandi").unwrap();
        assert_eq!(mandi.description_text(Language::Ar), "أرز ولحم مطهو ببطء");
        assert_eq!(mandi.options[0].name.get(Language::Ar), "ربع");
        // Arabic falls back to English when absent
        assert_eq!(mandi.options[1].name.get(Language::Ar), "Half");
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(JsonCatalogSource::parse("{ not json").is_err());
    }

    #[test]
    fn test_parse_nameless_entries_degrade_to_empty_text() {
        let json = r#"{
            "starters": {
                "items": [
                    { "name": "Hummus", "price": 480 },
                    { "price": 300 },
                    { "name": null, "name_ar": "مشاوي", "price": 700 },
                    { "name": "Mandi", "price": [900, 1200], "options": [ { "price": 1200 } ] }
                ]
            }
        }"#;
        let catalog = JsonCatalogSource::parse(json).unwrap();
        assert_eq!(catalog.item_count(), 4);

        let items = &catalog.section("starters").unwrap().items;
        assert_eq!(items[1].name.get(Language::En), "");
        assert_eq!(items[1].name.get(Language::Ar), "");
        assert_eq!(items[1].price, Some(Price::Fixed(300.0)));
        assert_eq!(items[2].name.get(Language::En), "");
        assert_eq!(items[2].name.get(Language::Ar), "مشاوي");

        let mandi = catalog.find_item(None, "Mandi").unwrap();
        assert_eq!(mandi.options.len(), 1);
        assert_eq!(mandi.options[0].name.get(Language::En), "");
        assert_eq!(mandi.options[0].price, 1200.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let source = JsonCatalogSource::new(file.path());
        let catalog = source.load().unwrap();
        assert_eq!(catalog.item_count(), 4);
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonCatalogSource::new(dir.path().join("missing.json"));
        assert!(matches!(
            source.load(),
            Err(CatalogSourceError::Io { .. })
        ));
    }
}
