//! Category tabs

use menu_application::MenuStore;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

pub struct CategoryBarWidget<'a> {
    store: &'a MenuStore,
}

impl<'a> CategoryBarWidget<'a> {
    pub fn new(store: &'a MenuStore) -> Self {
        Self { store }
    }
}

impl<'a> Widget for CategoryBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.store.state();
        let language = state.language;

        let mut titles: Vec<Line> = Vec::new();
        let mut selected = 0;
        for (i, (id, section)) in self.store.catalog().sections().enumerate() {
            if id == state.selected_category {
                selected = i;
            }
            titles.push(Line::from(section.name.get(language).to_string()));
        }
        // Arabic reads the tabs right to left
        if language.is_rtl() {
            titles.reverse();
            selected = titles.len().saturating_sub(1 + selected);
        }

        Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|")
            .render(area, buf);
    }
}
