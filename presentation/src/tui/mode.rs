//! TUI mode system (vim-like mode switching)
//!
//! - Normal mode: navigation and ordering shortcuts
//! - Search mode: live text input for the search box
//! - Notes mode: text input for the special instructions
//!
//! Normal-mode keys depend on which screen is in front (menu, item
//! detail, or cart).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

/// Input mode (vim-like)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    Notes,
}

impl InputMode {
    /// Mode indicator for the status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Search => "SEARCH",
            Self::Notes => "NOTES",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Normal => Color::Blue,
            Self::Search => Color::Green,
            Self::Notes => Color::Yellow,
        }
    }

    pub fn is_insert(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// Screen receiving normal-mode keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Detail,
    Cart,
}

/// Semantic action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    ShowHelp,
    /// Close the overlay in front
    Close,

    // -- Menu --
    CursorUp,
    CursorDown,
    NextCategory,
    PreviousCategory,
    EnterSearch,
    ClearSearch,
    CycleSort,
    ToggleLanguage,
    CycleBranch,
    OpenItem,
    AddOne,
    RemoveOne,
    NextOption,
    OpenCart,

    // -- Item detail --
    AddDetail,

    // -- Cart --
    IncrementLine,
    DecrementLine,
    RemoveLine,
    ClearCart,
    EditNotes,
    Checkout,

    // -- Text input --
    InsertChar(char),
    DeleteChar,
    ClearInput,
    Submit,
    ExitToNormal,
}

/// Map a key event to an action for the given mode and screen
pub fn handle_key_event(mode: InputMode, screen: Screen, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    match mode {
        InputMode::Normal => match screen {
            Screen::Menu => handle_menu(key),
            Screen::Detail => handle_detail(key),
            Screen::Cart => handle_cart(key),
        },
        InputMode::Search | InputMode::Notes => handle_input(key),
    }
}

fn handle_menu(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
        (KeyCode::Char('?'), _) => KeyAction::ShowHelp,

        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => KeyAction::CursorUp,
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => KeyAction::CursorDown,
        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) | (KeyCode::Tab, _) => {
            KeyAction::NextCategory
        }
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) | (KeyCode::BackTab, _) => {
            KeyAction::PreviousCategory
        }

        (KeyCode::Char('/'), _) => KeyAction::EnterSearch,
        (KeyCode::Esc, _) => KeyAction::ClearSearch,
        (KeyCode::Char('s'), KeyModifiers::NONE) => KeyAction::CycleSort,
        (KeyCode::Char('L'), _) => KeyAction::ToggleLanguage,
        (KeyCode::Char('b'), KeyModifiers::NONE) => KeyAction::CycleBranch,

        (KeyCode::Enter, _) => KeyAction::OpenItem,
        (KeyCode::Char('+'), _) | (KeyCode::Char('a'), KeyModifiers::NONE) => KeyAction::AddOne,
        (KeyCode::Char('-'), _) | (KeyCode::Char('x'), KeyModifiers::NONE) => KeyAction::RemoveOne,
        (KeyCode::Char('o'), KeyModifiers::NONE) => KeyAction::NextOption,
        (KeyCode::Char('c'), KeyModifiers::NONE) => KeyAction::OpenCart,

        _ => KeyAction::None,
    }
}

fn handle_detail(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Close,
        (KeyCode::Char('?'), _) => KeyAction::ShowHelp,
        (KeyCode::Char('o'), KeyModifiers::NONE)
        | (KeyCode::Tab, _)
        | (KeyCode::Char('j'), KeyModifiers::NONE)
        | (KeyCode::Down, _) => KeyAction::NextOption,
        (KeyCode::Enter, _) | (KeyCode::Char('a'), KeyModifiers::NONE) | (KeyCode::Char('+'), _) => {
            KeyAction::AddDetail
        }
        (KeyCode::Char('L'), _) => KeyAction::ToggleLanguage,
        _ => KeyAction::None,
    }
}

fn handle_cart(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Close,
        (KeyCode::Char('?'), _) => KeyAction::ShowHelp,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => KeyAction::CursorUp,
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => KeyAction::CursorDown,
        (KeyCode::Char('+'), _) | (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) => {
            KeyAction::IncrementLine
        }
        (KeyCode::Char('-'), _) | (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) => {
            KeyAction::DecrementLine
        }
        (KeyCode::Char('d'), KeyModifiers::NONE) | (KeyCode::Delete, _) => KeyAction::RemoveLine,
        (KeyCode::Char('C'), _) => KeyAction::ClearCart,
        (KeyCode::Char('n'), KeyModifiers::NONE) | (KeyCode::Char('i'), KeyModifiers::NONE) => {
            KeyAction::EditNotes
        }
        (KeyCode::Char('b'), KeyModifiers::NONE) => KeyAction::CycleBranch,
        (KeyCode::Char('L'), _) => KeyAction::ToggleLanguage,
        (KeyCode::Enter, _) | (KeyCode::Char('w'), KeyModifiers::NONE) => KeyAction::Checkout,
        _ => KeyAction::None,
    }
}

fn handle_input(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => KeyAction::ExitToNormal,
        (KeyCode::Enter, _) => KeyAction::Submit,
        (KeyCode::Backspace, _) => KeyAction::DeleteChar,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::ClearInput,
        (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => KeyAction::InsertChar(c),
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_mode_default() {
        assert_eq!(InputMode::default(), InputMode::Normal);
    }

    #[test]
    fn test_mode_indicator() {
        assert_eq!(InputMode::Normal.indicator(), "NORMAL");
        assert_eq!(InputMode::Search.indicator(), "SEARCH");
        assert_eq!(InputMode::Notes.indicator(), "NOTES");
        assert!(InputMode::Notes.is_insert());
        assert!(!InputMode::Normal.is_insert());
    }

    #[test]
    fn test_menu_key_handling() {
        let handle = |code| handle_key_event(InputMode::Normal, Screen::Menu, key(code));

        assert_eq!(handle(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(handle(KeyCode::Char('j')), KeyAction::CursorDown);
        assert_eq!(handle(KeyCode::Up), KeyAction::CursorUp);
        assert_eq!(handle(KeyCode::Tab), KeyAction::NextCategory);
        assert_eq!(handle(KeyCode::Char('h')), KeyAction::PreviousCategory);
        assert_eq!(handle(KeyCode::Char('/')), KeyAction::EnterSearch);
        assert_eq!(handle(KeyCode::Char('s')), KeyAction::CycleSort);
        assert_eq!(handle(KeyCode::Enter), KeyAction::OpenItem);
        assert_eq!(handle(KeyCode::Char('+')), KeyAction::AddOne);
        assert_eq!(handle(KeyCode::Char('-')), KeyAction::RemoveOne);
        assert_eq!(handle(KeyCode::Char('o')), KeyAction::NextOption);
        assert_eq!(handle(KeyCode::Char('c')), KeyAction::OpenCart);
        assert_eq!(handle(KeyCode::Char('z')), KeyAction::None);

        let shift_l = KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT);
        assert_eq!(
            handle_key_event(InputMode::Normal, Screen::Menu, shift_l),
            KeyAction::ToggleLanguage
        );
    }

    #[test]
    fn test_detail_key_handling() {
        let handle = |code| handle_key_event(InputMode::Normal, Screen::Detail, key(code));

        assert_eq!(handle(KeyCode::Esc), KeyAction::Close);
        assert_eq!(handle(KeyCode::Char('q')), KeyAction::Close);
        assert_eq!(handle(KeyCode::Tab), KeyAction::NextOption);
        assert_eq!(handle(KeyCode::Enter), KeyAction::AddDetail);
        assert_eq!(handle(KeyCode::Char('c')), KeyAction::None);
    }

    #[test]
    fn test_cart_key_handling() {
        let handle = |code| handle_key_event(InputMode::Normal, Screen::Cart, key(code));

        assert_eq!(handle(KeyCode::Esc), KeyAction::Close);
        assert_eq!(handle(KeyCode::Char('+')), KeyAction::IncrementLine);
        assert_eq!(handle(KeyCode::Char('-')), KeyAction::DecrementLine);
        assert_eq!(handle(KeyCode::Char('d')), KeyAction::RemoveLine);
        assert_eq!(handle(KeyCode::Char('n')), KeyAction::EditNotes);
        assert_eq!(handle(KeyCode::Char('w')), KeyAction::Checkout);
        assert_eq!(handle(KeyCode::Enter), KeyAction::Checkout);

        let shift_c = KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT);
        assert_eq!(
            handle_key_event(InputMode::Normal, Screen::Cart, shift_c),
            KeyAction::ClearCart
        );
    }

    #[test]
    fn test_input_key_handling() {
        for mode in [InputMode::Search, InputMode::Notes] {
            let handle = |code| handle_key_event(mode, Screen::Menu, key(code));
            assert_eq!(handle(KeyCode::Esc), KeyAction::ExitToNormal);
            assert_eq!(handle(KeyCode::Enter), KeyAction::Submit);
            assert_eq!(handle(KeyCode::Backspace), KeyAction::DeleteChar);
            // Normal-mode shortcuts are plain text here
            assert_eq!(handle(KeyCode::Char('q')), KeyAction::InsertChar('q'));
            assert_eq!(handle(KeyCode::Char('ش')), KeyAction::InsertChar('ش'));
        }

        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(
            handle_key_event(InputMode::Search, Screen::Menu, ctrl_u),
            KeyAction::ClearInput
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [InputMode::Normal, InputMode::Search, InputMode::Notes] {
            for screen in [Screen::Menu, Screen::Detail, Screen::Cart] {
                assert_eq!(handle_key_event(mode, screen, ctrl_c), KeyAction::Quit);
            }
        }
    }
}
