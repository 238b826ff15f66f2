//! Cart overlay: lines, notes, branch and total

use super::{alignment_for, spread_line};
use crate::labels::Label;
use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use menu_application::MenuStore;
use menu_domain::format_money;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct CartWidget<'a> {
    store: &'a MenuStore,
    tui: &'a TuiState,
}

impl<'a> CartWidget<'a> {
    pub fn new(store: &'a MenuStore, tui: &'a TuiState) -> Self {
        Self { store, tui }
    }
}

impl<'a> Widget for CartWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.store.state();
        let config = self.store.config();
        let language = state.language;
        let align = alignment_for(language);
        let width = area.width.saturating_sub(2);
        let money = |amount: f64| format_money(amount, language, &config.currency);

        let mut lines: Vec<Line> = Vec::new();

        if config.features.branch_selection
            && let Some(branch) = self.store.selected_branch()
        {
            lines.push(
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", Label::Branch.text(language)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(branch.name.get(language), Style::default().fg(Color::Cyan)),
                ])
                .alignment(align),
            );
            lines.push(Line::from(""));
        }

        if state.draft.is_empty() {
            lines.push(
                Line::styled(
                    Label::EmptyOrder.text(language),
                    Style::default().fg(Color::DarkGray),
                )
                .alignment(align),
            );
        }

        for (i, line) in state.draft.lines().iter().enumerate() {
            let selected = i == self.tui.cart_cursor;
            let name_style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let marker = if selected { "▌ " } else { "  " };
            lines.push(spread_line(
                vec![
                    Span::raw(marker),
                    Span::styled(line.display_name(language), name_style),
                ],
                vec![Span::styled(
                    format!("{}: {}", Label::LineTotal.text(language), money(line.line_total())),
                    Style::default().fg(Color::Green),
                )],
                width,
                language,
            ));
            lines.push(
                Line::styled(
                    format!(
                        "    [-] {} [+]  × {} {}",
                        line.quantity,
                        money(line.unit_price),
                        Label::Each.text(language)
                    ),
                    Style::default().fg(Color::Gray),
                )
                .alignment(align),
            );
        }

        lines.push(Line::from(""));
        lines.push(
            Line::styled(
                Label::SpecialInstructions.text(language),
                Style::default().fg(Color::Cyan),
            )
            .alignment(align),
        );
        let editing = self.tui.mode == InputMode::Notes;
        let notes = if editing {
            format!("{}▏", self.tui.notes_input)
        } else {
            state.draft.notes().to_string()
        };
        let notes_style = if editing {
            Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 45))
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::styled(notes, notes_style).alignment(align));

        lines.push(Line::from(""));
        lines.push(spread_line(
            vec![Span::styled(
                Label::GrandTotal.text(language),
                Style::default().add_modifier(Modifier::BOLD),
            )],
            vec![Span::styled(
                money(state.total_price()),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )],
            width,
            language,
        ));
        lines.push(Line::from(""));

        let mut hints = Vec::new();
        if !state.draft.is_empty() && config.features.whatsapp_order {
            hints.push(Span::styled(
                format!("[Enter] {}", Label::OrderViaWhatsApp.text(language)),
                Style::default().fg(Color::Black).bg(Color::Green),
            ));
            hints.push(Span::raw("  "));
        }
        hints.push(Span::styled(
            format!("[C] {}", Label::ClearAll.text(language)),
            Style::default().fg(Color::Red),
        ));
        hints.push(Span::raw("  "));
        hints.push(Span::styled(
            format!("[Esc] {}", Label::Close.text(language)),
            Style::default().fg(Color::Gray),
        ));
        lines.push(Line::from(hints).alignment(align));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", Label::YourOrder.text(language)))
            .border_style(Style::default().fg(Color::Yellow));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
