//! Display configuration from TOML (`[display]` section)

use menu_domain::{ConfigIssue, ConfigIssueCode, Language};
use serde::{Deserialize, Serialize};

/// Raw display settings
///
/// ```toml
/// [display]
/// default_language = "en"      # "en" or "ar"
/// visible_item_cap = 1000
/// image_base_path = "images/"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDisplayConfig {
    pub default_language: String,
    pub visible_item_cap: usize,
    pub image_base_path: String,
}

impl Default for FileDisplayConfig {
    fn default() -> Self {
        let defaults = menu_domain::BrandConfig::default();
        Self {
            default_language: defaults.default_language.code().to_string(),
            visible_item_cap: defaults.visible_item_cap,
            image_base_path: defaults.image_base_path,
        }
    }
}

impl FileDisplayConfig {
    /// Parse default_language, falling back to English with a warning
    pub fn parse_default_language(&self) -> (Language, Vec<ConfigIssue>) {
        match self.default_language.parse::<Language>() {
            Ok(language) => (language, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "display.default_language".to_string(),
                        value: self.default_language.clone(),
                        valid_values: Language::ALL
                            .iter()
                            .map(|l| l.code().to_string())
                            .collect(),
                    },
                    format!(
                        "display.default_language: unknown value '{}', falling back to 'en'",
                        self.default_language
                    ),
                );
                (Language::default(), vec![issue])
            }
        }
    }

    /// The cap must let at least one item through
    pub fn parse_visible_item_cap(&self) -> (usize, Vec<ConfigIssue>) {
        if self.visible_item_cap == 0 {
            let issue = ConfigIssue::error(
                ConfigIssueCode::ZeroVisibleCap,
                "display.visible_item_cap: must be at least 1",
            );
            return (Self::default().visible_item_cap, vec![issue]);
        }
        (self.visible_item_cap, vec![])
    }
}
