//! Status bar widget: mode indicator + key hints + flash messages

use crate::tui::mode::{InputMode, Screen};
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
    screen: Screen,
    ordering: bool,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState, screen: Screen, ordering: bool) -> Self {
        Self {
            state,
            screen,
            ordering,
        }
    }

    fn hints(&self) -> &'static str {
        match (self.state.mode, self.screen) {
            (InputMode::Search, _) => "type to filter  Enter:done  Esc:done  Ctrl+U:clear",
            (InputMode::Notes, _) => "Enter:save  Esc:save  Ctrl+U:clear",
            (InputMode::Normal, Screen::Menu) if self.ordering => {
                "j/k:move  h/l:category  /:search  +/-:qty  o:option  c:cart  ?:help  q:quit"
            }
            (InputMode::Normal, Screen::Menu) => {
                "j/k:move  h/l:category  /:search  s:sort  Enter:details  ?:help  q:quit"
            }
            (InputMode::Normal, Screen::Detail) => "o:option  Enter:add  Esc:close",
            (InputMode::Normal, Screen::Cart) => {
                "j/k:move  +/-:qty  d:remove  n:notes  Enter:send  Esc:close"
            }
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mode = self.state.mode;

        // Left: mode indicator
        let mode_text = mode.indicator();
        let mode_style = Style::default()
            .fg(Color::Black)
            .bg(mode.color())
            .add_modifier(Modifier::BOLD);
        let mode_line = Line::from(vec![Span::styled(format!(" {} ", mode_text), mode_style)]);
        let mode_width = mode_text.len() as u16 + 2;
        buf.set_line(area.x, area.y, &mode_line, mode_width);

        // Flash message or key hints on the right
        let right_text = match &self.state.flash_message {
            Some((flash, _)) => flash.clone(),
            None => self.hints().to_string(),
        };
        let right_span = Span::styled(
            right_text,
            Style::default().fg(Color::White).bg(Color::DarkGray),
        );
        let right_width = right_span.width() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + mode_width {
            buf.set_line(right_x, area.y, &Line::from(right_span), right_width + 1);
        }
    }
}
