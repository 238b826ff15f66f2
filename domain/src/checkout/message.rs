//! Order message template
//!
//! ```text
//! Hello! I'd like to place an order from Damascus House
//! Branch: Main Branch            (branch selection only)
//!
//! 1x Hummus - Ksh 480
//! 2x Mandi (Half) - Ksh 2,400
//!
//! Total: Ksh 2,880
//! Notes: extra garlic            (non-blank notes only)
//! ```
//!
//! Every label and name follows the display language.

use crate::cart::entities::OrderDraft;
use crate::catalog::price::format_money;
use crate::config::{Branch, BrandConfig};
use crate::core::language::Language;
use serde::{Deserialize, Serialize};

/// Composed text of an order, ready to be encoded into a deep link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderMessage {
    text: String,
}

impl OrderMessage {
    pub fn compose(
        draft: &OrderDraft,
        config: &BrandConfig,
        branch: Option<&Branch>,
        language: Language,
    ) -> Self {
        let money = |amount: f64| format_money(amount, language, &config.currency);
        let mut lines: Vec<String> = Vec::new();

        lines.push(
            format!(
                "{} {}",
                config.greeting.get(language),
                config.brand_name.get(language)
            )
            .trim()
            .to_string(),
        );
        if config.features.branch_selection
            && let Some(branch) = branch
        {
            lines.push(format!(
                "{}: {}",
                label(Label::Branch, language),
                branch.name.get(language)
            ));
        }
        lines.push(String::new());

        for line in draft.lines() {
            lines.push(format!(
                "{}x {} - {}",
                line.quantity,
                line.display_name(language),
                money(line.line_total())
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "{}: {}",
            label(Label::Total, language),
            money(draft.total_price())
        ));

        let notes = draft.notes().trim();
        if !notes.is_empty() {
            lines.push(format!("{}: {}", label(Label::Notes, language), notes));
        }

        Self {
            text: lines.join("\n"),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[derive(Clone, Copy)]
enum Label {
    Branch,
    Total,
    Notes,
}

fn label(label: Label, language: Language) -> &'static str {
    match (label, language) {
        (Label::Branch, Language::En) => "Branch",
        (Label::Branch, Language::Ar) => "الفرع",
        (Label::Total, Language::En) => "Total",
        (Label::Total, Language::Ar) => "المجموع",
        (Label::Notes, Language::En) => "Notes",
        (Label::Notes, Language::Ar) => "ملاحظات",
    }
}
