//! TUI-local state
//!
//! Everything here is view state that the menu store does not own:
//! cursors, the text being typed, the flash line and the help toggle.

use super::mode::InputMode;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct TuiState {
    // -- Input --
    pub mode: InputMode,
    pub search_input: String,
    pub notes_input: String,

    // -- Selection --
    /// Row in the visible item list
    pub cursor: usize,
    /// Row in the cart line list
    pub cart_cursor: usize,

    // -- Display --
    pub show_help: bool,
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move a cursor by `delta` within `0..len`, clamping at both ends
    pub fn step(cursor: &mut usize, delta: isize, len: usize) {
        if len == 0 {
            *cursor = 0;
            return;
        }
        let next = (*cursor as isize + delta).clamp(0, len as isize - 1);
        *cursor = next as usize;
    }

    /// Keep both cursors inside their lists after the lists changed
    pub fn clamp_cursors(&mut self, items: usize, lines: usize) {
        self.cursor = self.cursor.min(items.saturating_sub(1));
        self.cart_cursor = self.cart_cursor.min(lines.saturating_sub(1));
    }

    /// Buffer edited by the current insert mode
    pub fn input_mut(&mut self) -> Option<&mut String> {
        match self.mode {
            InputMode::Normal => None,
            InputMode::Search => Some(&mut self.search_input),
            InputMode::Notes => Some(&mut self.notes_input),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(input) = self.input_mut() {
            input.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(input) = self.input_mut() {
            input.pop();
        }
    }

    pub fn clear_input(&mut self) {
        if let Some(input) = self.input_mut() {
            input.clear();
        }
    }

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clamps() {
        let mut cursor = 0;
        TuiState::step(&mut cursor, -1, 3);
        assert_eq!(cursor, 0);
        TuiState::step(&mut cursor, 5, 3);
        assert_eq!(cursor, 2);
        TuiState::step(&mut cursor, 1, 0);
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_clamp_cursors() {
        let mut state = TuiState::new();
        state.cursor = 7;
        state.cart_cursor = 2;
        state.clamp_cursors(3, 0);
        assert_eq!(state.cursor, 2);
        assert_eq!(state.cart_cursor, 0);
    }

    #[test]
    fn test_input_follows_mode() {
        let mut state = TuiState::new();
        state.insert_char('x');
        assert!(state.search_input.is_empty());

        state.mode = InputMode::Search;
        for c in "kebab".chars() {
            state.insert_char(c);
        }
        state.delete_char();
        assert_eq!(state.search_input, "keba");

        state.mode = InputMode::Notes;
        state.insert_char('n');
        assert_eq!(state.notes_input, "n");
        state.clear_input();
        assert!(state.notes_input.is_empty());
        assert_eq!(state.search_input, "keba");
    }

    #[test]
    fn test_flash_message() {
        let mut state = TuiState::new();
        state.set_flash("test");
        assert!(state.flash_message.is_some());

        // Should not expire immediately
        state.expire_flash(Duration::from_secs(5));
        assert!(state.flash_message.is_some());

        std::thread::sleep(Duration::from_millis(2));
        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }
}
