//! Console output formatter for listing mode

use super::listing::ListedCategory;
use crate::labels::Label;
use colored::Colorize;
use menu_domain::{ConfigIssue, Language, Severity};

const WIDTH: usize = 60;

/// Formats menu listings for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the listed categories under a brand header
    pub fn format(brand_name: &str, categories: &[ListedCategory], language: Language) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(brand_name));
        output.push('\n');

        for category in categories {
            output.push_str(&Self::section_header(&category.name));
            if category.items.is_empty() {
                output.push_str(&format!(
                    "\n  {}\n",
                    Label::NoResults.text(language).dimmed()
                ));
                continue;
            }
            for item in &category.items {
                output.push_str(&Self::item_line(&item.name, &item.price, language));
                if !item.description.is_empty() {
                    output.push_str(&format!(
                        "{}\n",
                        Self::indent(&item.description, "    ").dimmed()
                    ));
                }
                for option in &item.options {
                    output.push_str(&format!(
                        "    {} {}  {}\n",
                        "-".dimmed(),
                        option.name,
                        option.price.green()
                    ));
                }
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(categories: &[ListedCategory]) -> String {
        serde_json::to_string_pretty(categories).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format configuration issues, one per line
    pub fn format_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
                Severity::Warning => format!("{} {}", "warning:".yellow().bold(), issue.message),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format order links that were not opened
    pub fn format_links(links: &[String]) -> String {
        let mut output = Self::section_header("WhatsApp order links");
        for link in links {
            output.push_str(&format!("\n{}\n", link.underline()));
        }
        output
    }

    /// Name and price on one line; Arabic listings put the price first
    fn item_line(name: &str, price: &str, language: Language) -> String {
        let pad = WIDTH
            .saturating_sub(name.chars().count() + price.chars().count() + 2)
            .max(1);
        if language.is_rtl() {
            format!("  {}{}{}\n", price.green(), " ".repeat(pad), name.bold())
        } else {
            format!("  {}{}{}\n", name.bold(), " ".repeat(pad), price.green())
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(WIDTH).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::listing::{ListedItem, ListedOption};
    use menu_domain::ConfigIssueCode;

    fn listing() -> Vec<ListedCategory> {
        vec![
            ListedCategory {
                id: "mains".into(),
                name: "Mains".into(),
                items: vec![ListedItem {
                    name: "Mandi".into(),
                    description: "Slow-cooked rice and lamb".into(),
                    price: "Ksh 900 - 1,200".into(),
                    image: None,
                    options: vec![ListedOption {
                        name: "Half".into(),
                        price: "Ksh 1,200".into(),
                    }],
                }],
            },
            ListedCategory {
                id: "desserts".into(),
                name: "Desserts".into(),
                items: vec![],
            },
        ]
    }

    #[test]
    fn test_format_contains_items_and_empty_notice() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format("Damascus House", &listing(), Language::En);
        assert!(output.contains("Damascus House"));
        assert!(output.contains("Mandi"));
        assert!(output.contains("Ksh 900 - 1,200"));
        assert!(output.contains("    Slow-cooked rice and lamb"));
        assert!(output.contains("- Half  Ksh 1,200"));
        assert!(output.contains("No dishes found matching your search."));
    }

    #[test]
    fn test_rtl_puts_price_first() {
        colored::control::set_override(false);
        let line = ConsoleFormatter::item_line("حمص", "ك.ش 480", Language::Ar);
        assert!(line.trim_start().starts_with("ك.ش 480"));
        assert!(line.trim_end().ends_with("حمص"));
    }

    #[test]
    fn test_format_json() {
        let json = ConsoleFormatter::format_json(&listing());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["items"][0]["name"], "Mandi");
        assert!(value[0]["items"][0].get("image").is_none());
    }

    #[test]
    fn test_format_issues() {
        colored::control::set_override(false);
        let issues = vec![ConfigIssue::warning(
            ConfigIssueCode::UnknownBranch { id: "x".into() },
            "contact.default_branch: no branch with id 'x'",
        )];
        assert_eq!(
            ConsoleFormatter::format_issues(&issues),
            "warning: contact.default_branch: no branch with id 'x'"
        );
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
