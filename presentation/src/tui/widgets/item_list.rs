//! Item list for the selected category

use super::{alignment_for, spread_line};
use crate::labels::Label;
use crate::tui::state::TuiState;
use menu_application::MenuStore;
use menu_domain::{MenuItem, format_price};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap,
    },
};

pub struct ItemListWidget<'a> {
    store: &'a MenuStore,
    tui: &'a TuiState,
}

impl<'a> ItemListWidget<'a> {
    pub fn new(store: &'a MenuStore, tui: &'a TuiState) -> Self {
        Self { store, tui }
    }

    fn item_text(&self, item: &'a MenuItem, width: u16) -> Text<'a> {
        let state = self.store.state();
        let config = self.store.config();
        let language = state.language;

        let mut lead = vec![Span::styled(
            item.name.get(language),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        let quantity = self.store.cart_quantity(item);
        if self.store.ordering_enabled() && quantity > 0 {
            lead.push(Span::styled(
                format!(" ×{}", quantity),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ));
        }
        let trail = vec![Span::styled(
            format_price(item.price.as_ref(), language, &config.currency),
            Style::default().fg(Color::Green),
        )];

        let mut lines = vec![spread_line(lead, trail, width, language)];

        let description = item.description_text(language);
        if !description.is_empty() {
            lines.push(
                Line::styled(description, Style::default().fg(Color::DarkGray))
                    .alignment(alignment_for(language)),
            );
        }

        if let Some(option) = self.store.current_option(item) {
            lines.push(
                Line::from(vec![
                    Span::styled(
                        Label::SelectOption.text(language),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(" "),
                    Span::styled(option.name.get(language), Style::default().fg(Color::Cyan)),
                    Span::styled(
                        format!(" ({}/{})", option_position(item, option.key()), item.options.len()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
                .alignment(alignment_for(language)),
            );
        }

        Text::from(lines)
    }
}

fn option_position(item: &MenuItem, key: &str) -> usize {
    item.options
        .iter()
        .position(|o| o.key() == key)
        .map(|i| i + 1)
        .unwrap_or(0)
}

impl<'a> Widget for ItemListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let language = self.store.state().language;
        let block = Block::default().borders(Borders::NONE);
        let items = self.store.visible_items();

        if items.is_empty() {
            Paragraph::new(Label::NoResults.text(language))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block)
                .render(area, buf);
            return;
        }

        // Leave room for the highlight symbol
        let width = area.width.saturating_sub(2);
        let list_items: Vec<ListItem> = items
            .into_iter()
            .map(|item| ListItem::new(self.item_text(item, width)))
            .collect();

        let list = List::new(list_items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
            .highlight_symbol("▌ ");

        let mut list_state = ListState::default().with_selected(Some(self.tui.cursor));
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
