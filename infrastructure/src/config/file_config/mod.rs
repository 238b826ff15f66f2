//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into the domain
//! [`BrandConfig`] together with any issues found on the way.

mod brand;
mod catalog;
mod contact;
mod display;
mod features;
mod order_log;

pub use brand::{FileBrandConfig, FileCurrencyConfig};
pub use catalog::FileCatalogConfig;
pub use contact::{FileBranchConfig, FileContactConfig};
pub use display::FileDisplayConfig;
pub use features::FileFeaturesConfig;
pub use order_log::FileOrderLogConfig;

use menu_domain::{BrandConfig, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration that cannot be used at all
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Brand identity and greeting
    pub brand: FileBrandConfig,
    /// Currency symbols
    pub currency: FileCurrencyConfig,
    /// Fallback WhatsApp number and default branch
    pub contact: FileContactConfig,
    /// Physical branches
    pub branches: Vec<FileBranchConfig>,
    /// Feature switches
    pub features: FileFeaturesConfig,
    /// Language, list cap and image base path
    pub display: FileDisplayConfig,
    /// Catalog file location
    pub catalog: FileCatalogConfig,
    /// Structured order log
    pub order_log: FileOrderLogConfig,
}

impl FileConfig {
    /// Convert into the domain configuration, collecting every issue
    ///
    /// Invalid values fall back to their defaults; the returned issues say
    /// which ones did.
    pub fn to_brand_config(&self) -> (BrandConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let (default_language, language_issues) = self.display.parse_default_language();
        issues.extend(language_issues);
        let (visible_item_cap, cap_issues) = self.display.parse_visible_item_cap();
        issues.extend(cap_issues);

        let config = BrandConfig {
            brand_name: self.brand.to_brand_name(),
            currency: self.currency.to_currency(),
            whatsapp_number: self.contact.whatsapp_number.clone(),
            greeting: self.brand.to_greeting(),
            features: self.features.to_flags(),
            branches: self
                .branches
                .iter()
                .map(FileBranchConfig::to_branch)
                .collect(),
            default_branch: self.contact.default_branch.clone(),
            default_language,
            visible_item_cap,
            image_base_path: self.display.image_base_path.clone(),
        };

        issues.extend(Self::check_branches(&config));
        issues.extend(Self::check_whatsapp_number(&config));

        (config, issues)
    }

    /// Validate the entire configuration, returning all detected issues
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.to_brand_config().1
    }

    /// Build the domain configuration, failing on error-level issues
    ///
    /// Warnings are returned alongside the configuration.
    pub fn build(&self) -> Result<(BrandConfig, Vec<ConfigIssue>), ConfigValidationError> {
        let (config, issues) = self.to_brand_config();
        let errors: Vec<String> = issues
            .iter()
            .filter(|i| i.is_error())
            .map(|i| i.message.clone())
            .collect();
        if !errors.is_empty() {
            return Err(ConfigValidationError::Invalid(errors));
        }
        Ok((config, issues))
    }

    fn check_branches(config: &BrandConfig) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if let Some(id) = config.default_branch.as_deref()
            && config.branch(id).is_none()
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnknownBranch { id: id.to_string() },
                format!(
                    "contact.default_branch: no branch with id '{}', using the first branch",
                    id
                ),
            ));
        }
        issues
    }

    fn check_whatsapp_number(config: &BrandConfig) -> Vec<ConfigIssue> {
        let features = config.features;
        if !(features.cart && features.whatsapp_order) {
            return vec![];
        }
        let has_digits = |n: &str| n.chars().any(|c| c.is_ascii_digit());
        let branch_numbers = features.branch_selection
            && !config.branches.is_empty()
            && config.branches.iter().all(|b| has_digits(&b.whatsapp_number));
        if has_digits(&config.whatsapp_number) || branch_numbers {
            return vec![];
        }
        vec![ConfigIssue::error(
            ConfigIssueCode::MissingWhatsAppNumber,
            "contact.whatsapp_number: WhatsApp ordering is enabled but no number is configured",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_domain::{Language, Severity};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[brand]
name = "Damascus House"
name_ar = "بيت دمشق"

[currency]
symbol = "ك.ش"
symbol_en = "Ksh"

[contact]
whatsapp_number = "+254 712 345 678"
default_branch = "westlands"

[[branches]]
id = "westlands"
name = "Westlands"
whatsapp_number = "+254 711 000 111"

[features]
branch_selection = true

[display]
default_language = "ar"
visible_item_cap = 50

[catalog]
path = "menus/main.json"

[order_log]
enabled = true
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (brand, issues) = config.to_brand_config();
        assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
        assert_eq!(brand.brand_name.get(Language::Ar), "بيت دمشق");
        assert_eq!(brand.default_language, Language::Ar);
        assert_eq!(brand.visible_item_cap, 50);
        assert_eq!(brand.initial_branch().unwrap().id, "westlands");
        assert_eq!(
            brand.whatsapp_number_for(brand.initial_branch()),
            "+254 711 000 111"
        );
        assert_eq!(config.catalog.path.to_str(), Some("menus/main.json"));
        assert!(config.order_log.enabled);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[contact]
whatsapp_number = "+971 50 000 0000"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.contact.whatsapp_number, "+971 50 000 0000");
        // Defaults should apply
        assert_eq!(config.brand, FileBrandConfig::default());
        assert!(config.features.cart);
        assert!(!config.order_log.enabled);
    }

    #[test]
    fn test_default_config_matches_domain_defaults() {
        let (brand, issues) = FileConfig::default().to_brand_config();
        assert!(issues.is_empty());
        assert_eq!(brand, BrandConfig::default());
    }

    #[test]
    fn test_unknown_default_branch_warns() {
        let config = FileConfig {
            contact: FileContactConfig {
                default_branch: Some("airport".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::UnknownBranch {
                id: "airport".into()
            }
        );
    }

    #[test]
    fn test_missing_number_is_error() {
        let config = FileConfig {
            contact: FileContactConfig {
                whatsapp_number: "TBD".into(),
                default_branch: None,
            },
            ..Default::default()
        };
        let err = config.build().unwrap_err();
        assert!(err.to_string().contains("contact.whatsapp_number"));
    }

    #[test]
    fn test_missing_number_ok_without_ordering() {
        let mut config = FileConfig {
            contact: FileContactConfig {
                whatsapp_number: String::new(),
                default_branch: None,
            },
            ..Default::default()
        };
        config.features.whatsapp_order = false;
        assert!(config.build().is_ok());
    }

    #[test]
    fn test_branch_numbers_cover_missing_contact_number() {
        let mut config = FileConfig {
            contact: FileContactConfig {
                whatsapp_number: String::new(),
                default_branch: None,
            },
            branches: vec![FileBranchConfig {
                id: "main".into(),
                name: "Main".into(),
                whatsapp_number: "+254 700 000 001".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        config.features.branch_selection = true;
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_build_returns_warnings() {
        let config = FileConfig {
            display: FileDisplayConfig {
                default_language: "de".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let (brand, warnings) = config.build().unwrap();
        assert_eq!(brand.default_language, Language::En);
        assert_eq!(warnings.len(), 1);
    }
}
