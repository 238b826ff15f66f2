//! Header widget: brand, language, branch and order summary

use crate::labels::Label;
use menu_application::MenuStore;
use menu_domain::format_money;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    store: &'a MenuStore,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(store: &'a MenuStore) -> Self {
        Self { store }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.store.state();
        let config = self.store.config();
        let language = state.language;

        let mut lead = vec![Span::styled("◉ ", Style::default().fg(Color::Green))];
        if self.store.ordering_enabled() {
            lead.push(Span::styled(
                format!(
                    "{} {} · {}",
                    Label::YourOrder.text(language),
                    state.total_items(),
                    format_money(state.total_price(), language, &config.currency)
                ),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            lead.push(Span::styled(
                Label::ViewOnly.text(language),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let mut trail = Vec::new();
        if config.features.branch_selection
            && let Some(branch) = self.store.selected_branch()
        {
            trail.push(Span::styled(
                format!("{}: {}", Label::Branch.text(language), branch.name.get(language)),
                Style::default().fg(Color::Cyan),
            ));
            trail.push(Span::raw(" | "));
        }
        if config.features.language_switcher {
            trail.push(Span::styled(
                language.toggled().native_name(),
                Style::default().fg(Color::White),
            ));
        }

        let inner_width = area.width.saturating_sub(2);
        let line: Line = super::spread_line(lead, trail, inner_width, language);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", config.brand_name.get(language)))
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
