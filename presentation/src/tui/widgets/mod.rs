//! TUI widgets: ratatui components for the menu screen
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Category bar (1) ──────────────────────────────┤
//! ├── Search / sort (3) ─────────────────────────────┤
//! ├── Item list (flex) ──────────────────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘
//!
//! Item detail, cart and help render as centered overlays.

pub mod cart;
pub mod category_bar;
pub mod header;
pub mod help;
pub mod item_detail;
pub mod item_list;
pub mod search_bar;
pub mod status_bar;

use menu_domain::Language;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub category_bar: Rect,
    /// `None` when neither search nor price sorting is enabled
    pub search_bar: Option<Rect>,
    pub item_list: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect, show_search_bar: bool) -> Self {
        let search_h: u16 = if show_search_bar { 3 } else { 0 };
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(search_h),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            category_bar: vertical[1],
            search_bar: show_search_bar.then_some(vertical[2]),
            item_list: vertical[3],
            status_bar: vertical[4],
        }
    }

    /// Rect of `percent_x` by `percent_y` centered in `area`
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

/// Text alignment for the reading direction of a language
pub fn alignment_for(language: Language) -> Alignment {
    if language.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

/// One line with `lead` at the reading start and `trail` at the reading end
///
/// Arabic swaps the two sides so the name stays at the right edge.
pub fn spread_line<'a>(
    lead: Vec<Span<'a>>,
    trail: Vec<Span<'a>>,
    width: u16,
    language: Language,
) -> Line<'a> {
    let used: usize = lead.iter().chain(trail.iter()).map(Span::width).sum();
    let gap = (width as usize).saturating_sub(used).max(1);
    let (left, right) = if language.is_rtl() {
        (trail, lead)
    } else {
        (lead, trail)
    };
    let mut spans = left;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right);
    Line::from(spans)
}
