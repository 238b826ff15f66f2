//! Infrastructure layer for whatsapp-menu
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod launcher;
pub mod logging;

// Re-export commonly used types
pub use catalog::JsonCatalogSource;
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use launcher::{DeferredLinkLauncher, SystemLinkLauncher};
pub use logging::JsonlOrderLogger;
