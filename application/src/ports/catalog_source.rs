//! Port for loading the menu catalog

use menu_domain::{DomainError, MenuCatalog};
use thiserror::Error;

/// Errors from reading a catalog
#[derive(Error, Debug)]
pub enum CatalogSourceError {
    #[error("Failed to read catalog from {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed catalog in {path}: {message}")]
    Parse { path: String, message: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Produces the static catalog at startup
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<MenuCatalog, CatalogSourceError>;

    /// Human-readable origin, used in logs
    fn describe(&self) -> String;
}
