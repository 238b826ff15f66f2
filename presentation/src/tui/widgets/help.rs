//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Widget for rendering help overlay
pub struct HelpWidget {
    ordering: bool,
}

impl HelpWidget {
    pub fn new(ordering: bool) -> Self {
        Self { ordering }
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
    }

    fn key(keys: &'static str, description: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {:<10}", keys), Style::default().fg(Color::Yellow)),
            Span::raw(description),
        ])
    }

    fn build_help_text(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Self::section("Menu"),
            Self::key("j/k", "Move between dishes"),
            Self::key("h/l Tab", "Previous / next category"),
            Self::key("/", "Search dishes"),
            Self::key("Esc", "Clear the search"),
            Self::key("s", "Cycle price sorting"),
            Self::key("L", "Switch language"),
            Self::key("Enter", "Dish details"),
        ];
        if self.ordering {
            lines.extend([
                Self::key("+ / a", "Add one to the order"),
                Self::key("- / x", "Remove one from the order"),
                Self::key("o", "Next option for this dish"),
                Self::key("b", "Switch branch"),
                Self::key("c", "Open the order"),
                Line::from(""),
                Self::section("Order"),
                Self::key("+/-", "Change quantity"),
                Self::key("d", "Remove line"),
                Self::key("C", "Clear all"),
                Self::key("n", "Edit special instructions"),
                Self::key("Enter", "Send via WhatsApp"),
            ]);
        }
        lines.extend([
            Line::from(""),
            Self::section("General"),
            Self::key("?", "Toggle this help"),
            Self::key("q", "Close overlay / quit"),
            Self::key("Ctrl+C", "Exit"),
        ]);
        lines
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Keyboard Shortcuts ")
            .border_style(Style::default().fg(Color::Cyan));

        Paragraph::new(self.build_help_text())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
