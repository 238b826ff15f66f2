//! Search box and sort indicator

use crate::labels::Label;
use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use menu_application::MenuStore;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct SearchBarWidget<'a> {
    store: &'a MenuStore,
    tui: &'a TuiState,
}

impl<'a> SearchBarWidget<'a> {
    pub fn new(store: &'a MenuStore, tui: &'a TuiState) -> Self {
        Self { store, tui }
    }
}

impl<'a> Widget for SearchBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.store.state();
        let features = self.store.config().features;
        let language = state.language;
        let editing = self.tui.mode == InputMode::Search;

        let mut lead = Vec::new();
        if features.search {
            let query = if editing {
                self.tui.search_input.as_str()
            } else {
                state.search_query.as_str()
            };
            if query.is_empty() && !editing {
                lead.push(Span::styled(
                    Label::SearchPlaceholder.text(language),
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                lead.push(Span::styled(
                    query.to_string(),
                    Style::default().fg(Color::White),
                ));
            }
            if editing {
                lead.push(Span::styled(
                    "▏",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
            }
        }

        let mut trail = Vec::new();
        if features.price_sorting {
            trail.push(Span::styled(
                Label::for_sort(state.sort_mode).text(language),
                Style::default().fg(Color::Cyan),
            ));
        }

        let border = if editing { Color::Green } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let line = super::spread_line(lead, trail, area.width.saturating_sub(2), language);

        Paragraph::new(line).block(block).render(area, buf);
    }
}
