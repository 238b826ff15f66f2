//! CLI command definitions

use clap::{Parser, ValueEnum};
use menu_domain::{Language, SortMode};
use std::path::PathBuf;

/// Price ordering accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Catalog order
    Default,
    /// Cheapest first
    LowHigh,
    /// Most expensive first
    HighLow,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Default => SortMode::Default,
            SortArg::LowHigh => SortMode::LowHigh,
            SortArg::HighLow => SortMode::HighLow,
        }
    }
}

/// Display language accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    En,
    Ar,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => Language::En,
            LanguageArg::Ar => Language::Ar,
        }
    }
}

/// CLI arguments for whatsapp-menu
#[derive(Parser, Debug)]
#[command(name = "whatsapp-menu")]
#[command(author, version, about = "Bilingual restaurant menu with WhatsApp ordering")]
#[command(long_about = r#"
Browse a bilingual (English / Arabic) restaurant menu in the terminal and
send the assembled order to the restaurant as a WhatsApp message.

Ordering is off unless the session is started in order mode, either with
--order or with a menu URL whose query string carries order=true.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./menu.toml         Project-level config
3. ~/.config/whatsapp-menu/config.toml   Global config

Example:
  whatsapp-menu --order
  whatsapp-menu --url "https://menu.example.com/?order=true" --lang ar
  whatsapp-menu --list --category grills --search shawa --sort low-high
"#)]
pub struct Cli {
    /// Path to the catalog JSON file (overrides catalog.path)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Enable ordering for this session
    #[arg(long)]
    pub order: bool,

    /// Menu URL; order mode is enabled when its query has order=true
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Initial display language (defaults to display.default_language)
    #[arg(long, value_enum, value_name = "LANG")]
    pub lang: Option<LanguageArg>,

    /// Print the menu to stdout instead of starting the terminal UI
    #[arg(short, long)]
    pub list: bool,

    /// List every category (listing mode)
    #[arg(long, conflicts_with = "category")]
    pub all: bool,

    /// Category id to list (defaults to the first category)
    #[arg(short, long, value_name = "ID")]
    pub category: Option<String>,

    /// Search query applied to the listing
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Price ordering applied to the listing
    #[arg(long, value_enum, default_value = "default")]
    pub sort: SortArg,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,

    /// Print order links after exit instead of opening them
    #[arg(long)]
    pub print_link: bool,

    /// Write logs to this file while the terminal UI is running
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether listing mode was requested, explicitly or through a listing flag
    pub fn listing_mode(&self) -> bool {
        self.list || self.all || self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["whatsapp-menu"]);
        assert!(!cli.order);
        assert!(!cli.listing_mode());
        assert_eq!(cli.sort, SortArg::Default);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_listing_flags() {
        let cli = Cli::parse_from([
            "whatsapp-menu",
            "--list",
            "--category",
            "grills",
            "--search",
            "shawa",
            "--sort",
            "low-high",
            "--lang",
            "ar",
            "-vv",
        ]);
        assert!(cli.listing_mode());
        assert_eq!(cli.category.as_deref(), Some("grills"));
        assert_eq!(SortMode::from(cli.sort), SortMode::LowHigh);
        assert_eq!(cli.lang.map(Language::from), Some(Language::Ar));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_json_implies_listing() {
        let cli = Cli::parse_from(["whatsapp-menu", "--json"]);
        assert!(cli.listing_mode());
    }

    #[test]
    fn test_all_conflicts_with_category() {
        let result = Cli::try_parse_from(["whatsapp-menu", "--all", "--category", "grills"]);
        assert!(result.is_err());
    }
}
