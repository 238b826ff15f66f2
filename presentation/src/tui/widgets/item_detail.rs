//! Item detail overlay

use super::alignment_for;
use crate::labels::Label;
use menu_application::MenuStore;
use menu_domain::{format_money, format_price};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ItemDetailWidget<'a> {
    store: &'a MenuStore,
}

impl<'a> ItemDetailWidget<'a> {
    pub fn new(store: &'a MenuStore) -> Self {
        Self { store }
    }
}

impl<'a> Widget for ItemDetailWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (Some(detail), Some(item)) = (self.store.state().view.detail(), self.store.detail_item())
        else {
            return;
        };
        let config = self.store.config();
        let language = self.store.state().language;
        let align = alignment_for(language);

        let mut lines = vec![
            Line::styled(
                format_price(item.price.as_ref(), language, &config.currency),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
            .alignment(align),
            Line::from(""),
        ];

        let description = item.description_text(language);
        if !description.is_empty() {
            lines.push(Line::from(description).alignment(align));
            lines.push(Line::from(""));
        }

        if let Some(image) = config.image_url(&detail.category, item) {
            lines.push(
                Line::styled(image, Style::default().fg(Color::DarkGray)).alignment(align),
            );
            lines.push(Line::from(""));
        }

        if config.features.product_options && item.has_options() {
            lines.push(
                Line::styled(
                    Label::SelectOption.text(language),
                    Style::default().fg(Color::Cyan),
                )
                .alignment(align),
            );
            for option in &item.options {
                let chosen = detail
                    .option
                    .as_ref()
                    .is_some_and(|o| o.key() == option.key());
                let marker = if chosen { "(●)" } else { "( )" };
                let style = if chosen {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                lines.push(
                    Line::from(vec![
                        Span::styled(format!("{} {}", marker, option.name.get(language)), style),
                        Span::raw("  "),
                        Span::styled(
                            format_money(item.unit_price(Some(option)), language, &config.currency),
                            Style::default().fg(Color::Green),
                        ),
                    ])
                    .alignment(align),
                );
            }
            lines.push(Line::from(""));
        }

        let mut hints = Vec::new();
        if self.store.ordering_enabled() {
            hints.push(Span::styled(
                format!("[Enter] {}", Label::AddToOrder.text(language)),
                Style::default().fg(Color::Black).bg(Color::Green),
            ));
            hints.push(Span::raw("  "));
        }
        hints.push(Span::styled(
            format!("[Esc] {}", Label::Close.text(language)),
            Style::default().fg(Color::Gray),
        ));
        lines.push(Line::from(hints).alignment(align));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", item.name.get(language)))
            .border_style(Style::default().fg(Color::Cyan));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
