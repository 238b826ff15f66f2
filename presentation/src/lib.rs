//! Presentation layer for whatsapp-menu
//!
//! This crate contains CLI definitions, the listing-mode console
//! formatter, and the interactive terminal UI.

pub mod cli;
pub mod labels;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, LanguageArg, SortArg};
pub use labels::Label;
pub use output::console::ConsoleFormatter;
pub use output::listing::{ListedCategory, ListedItem, ListedOption, ListingRequest, build_listing};
pub use tui::TuiApp;
