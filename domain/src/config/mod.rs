//! Configuration value objects for the domain layer
//!
//! Built by the infrastructure layer from config files and passed
//! explicitly into the catalog and cart layers.

mod brand;
pub mod validation;

pub use brand::{Branch, BrandConfig, CurrencyConfig, FeatureFlags};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
