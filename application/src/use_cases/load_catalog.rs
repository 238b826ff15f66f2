//! Load catalog use case
//!
//! Reads the catalog once at startup and rejects catalogs with nothing
//! to browse.

use crate::ports::catalog_source::{CatalogSource, CatalogSourceError};
use menu_domain::MenuCatalog;
use std::sync::Arc;
use tracing::{info, warn};

pub struct LoadCatalogUseCase {
    source: Arc<dyn CatalogSource>,
}

impl LoadCatalogUseCase {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    pub fn execute(&self) -> Result<MenuCatalog, CatalogSourceError> {
        let catalog = self.source.load()?;
        catalog.ensure_not_empty()?;

        for (id, section) in catalog.sections() {
            if section.items.is_empty() {
                warn!("Category '{}' has no items", id);
            }
        }

        info!(
            source = %self.source.describe(),
            categories = catalog.len(),
            items = catalog.item_count(),
            "Catalog loaded"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_domain::{CategorySection, DomainError, MenuItem, Price};

    struct StaticSource(MenuCatalog);

    impl CatalogSource for StaticSource {
        fn load(&self) -> Result<MenuCatalog, CatalogSourceError> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    #[test]
    fn test_loads_non_empty_catalog() {
        let catalog = MenuCatalog::default().with_section(
            "starters",
            CategorySection::new("Starters").with_item(MenuItem::new("Hummus", Price::Fixed(480.0))),
        );
        let use_case = LoadCatalogUseCase::new(Arc::new(StaticSource(catalog)));
        let loaded = use_case.execute().unwrap();
        assert_eq!(loaded.first_category(), Some("starters"));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let use_case = LoadCatalogUseCase::new(Arc::new(StaticSource(MenuCatalog::default())));
        assert!(matches!(
            use_case.execute(),
            Err(CatalogSourceError::Domain(DomainError::EmptyCatalog))
        ));
    }
}
