//! Configuration file loading for whatsapp-menu
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `WHATSAPP_MENU_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./menu.toml` or `./.menu.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/whatsapp-menu/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBranchConfig, FileBrandConfig, FileCatalogConfig, FileConfig,
    FileContactConfig, FileCurrencyConfig, FileDisplayConfig, FileFeaturesConfig,
    FileOrderLogConfig,
};
pub use loader::ConfigLoader;
