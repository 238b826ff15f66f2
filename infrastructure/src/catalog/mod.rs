//! Catalog loading
//!
//! Provides [`JsonCatalogSource`], which implements the
//! [`CatalogSource`](menu_application::CatalogSource) port for the JSON
//! menu file.

mod json_source;

pub use json_source::JsonCatalogSource;
