//! Feature switches from TOML (`[features]` section)

use menu_domain::FeatureFlags;
use serde::{Deserialize, Serialize};

/// Raw feature switches
///
/// ```toml
/// [features]
/// search = true
/// price_sorting = true
/// cart = true
/// whatsapp_order = true
/// item_modal = true
/// product_options = true
/// branch_selection = false
/// language_switcher = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFeaturesConfig {
    pub search: bool,
    pub price_sorting: bool,
    pub cart: bool,
    pub whatsapp_order: bool,
    pub item_modal: bool,
    pub product_options: bool,
    pub branch_selection: bool,
    pub language_switcher: bool,
}

impl Default for FileFeaturesConfig {
    fn default() -> Self {
        let flags = FeatureFlags::default();
        Self {
            search: flags.search,
            price_sorting: flags.price_sorting,
            cart: flags.cart,
            whatsapp_order: flags.whatsapp_order,
            item_modal: flags.item_modal,
            product_options: flags.product_options,
            branch_selection: flags.branch_selection,
            language_switcher: flags.language_switcher,
        }
    }
}

impl FileFeaturesConfig {
    pub fn to_flags(&self) -> FeatureFlags {
        FeatureFlags {
            search: self.search,
            price_sorting: self.price_sorting,
            cart: self.cart,
            whatsapp_order: self.whatsapp_order,
            item_modal: self.item_modal,
            product_options: self.product_options,
            branch_selection: self.branch_selection,
            language_switcher: self.language_switcher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;

    #[test]
    fn test_partial_features_keep_defaults() {
        let toml_str = r#"
[features]
search = false
branch_selection = true
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let flags = config.features.to_flags();
        assert!(!flags.search);
        assert!(flags.branch_selection);
        assert!(flags.cart);
        assert!(flags.product_options);
    }
}
