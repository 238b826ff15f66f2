//! TUI application: terminal setup, event loop and action handling
//!
//! ```text
//! TuiApp (select! loop)
//!   ├─ crossterm EventStream  → KeyAction → MenuAction → MenuStore::dispatch
//!   └─ tick_interval          → flash expiry
//! ```
//!
//! Rendering reads the store and the TUI-local state; nothing else
//! mutates the order.

use super::mode::{InputMode, KeyAction, Screen, handle_key_event};
use super::observer::ListChangeFlag;
use super::state::TuiState;
use super::widgets::{
    MainLayout, cart::CartWidget, category_bar::CategoryBarWidget, header::HeaderWidget,
    help::HelpWidget, item_detail::ItemDetailWidget, item_list::ItemListWidget,
    search_bar::SearchBarWidget, status_bar::StatusBarWidget,
};
use crate::labels::Label;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use menu_application::{
    CheckoutInput, CheckoutUseCase, LaunchOutcome, MenuAction, MenuStore, ViewState,
};
use ratatui::{Terminal, backend::CrosstermBackend, widgets::Clear};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub struct TuiApp {
    store: MenuStore,
    checkout: CheckoutUseCase,
    list_flag: Arc<ListChangeFlag>,
}

impl TuiApp {
    pub fn new(mut store: MenuStore, checkout: CheckoutUseCase) -> Self {
        let list_flag = Arc::new(ListChangeFlag::new());
        store.subscribe(list_flag.clone());
        Self {
            store,
            checkout,
            list_flag,
        }
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = TuiState::new();
        state.search_input = self.store.state().search_query.clone();
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        info!(
            order_mode = self.store.state().order_mode,
            language = %self.store.state().language,
            "Menu started"
        );

        loop {
            terminal.draw(|frame| self.render(frame, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                // Tick for flash expiry
                _ = tick.tick() => {
                    state.expire_flash(Duration::from_secs(5));
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Screen currently in front
    pub fn screen(&self) -> Screen {
        match self.store.state().view {
            ViewState::Browsing => Screen::Menu,
            ViewState::ItemDetail(_) => Screen::Detail,
            ViewState::Cart => Screen::Cart,
        }
    }

    /// Render all widgets
    fn render(&self, frame: &mut ratatui::Frame, state: &TuiState) {
        let features = self.store.config().features;
        let layout =
            MainLayout::compute(frame.area(), features.search || features.price_sorting);

        frame.render_widget(HeaderWidget::new(&self.store), layout.header);
        frame.render_widget(CategoryBarWidget::new(&self.store), layout.category_bar);
        if let Some(area) = layout.search_bar {
            frame.render_widget(SearchBarWidget::new(&self.store, state), area);
        }
        frame.render_widget(ItemListWidget::new(&self.store, state), layout.item_list);
        frame.render_widget(
            StatusBarWidget::new(state, self.screen(), self.store.ordering_enabled()),
            layout.status_bar,
        );

        match self.screen() {
            Screen::Menu => {}
            Screen::Detail => {
                let area = MainLayout::centered_overlay(60, 60, frame.area());
                frame.render_widget(Clear, area);
                frame.render_widget(ItemDetailWidget::new(&self.store), area);
            }
            Screen::Cart => {
                let area = MainLayout::centered_overlay(70, 80, frame.area());
                frame.render_widget(Clear, area);
                frame.render_widget(CartWidget::new(&self.store, state), area);
            }
        }

        if state.show_help {
            let area = MainLayout::centered_overlay(60, 70, frame.area());
            frame.render_widget(Clear, area);
            frame.render_widget(HelpWidget::new(self.store.ordering_enabled()), area);
        }
    }

    pub fn handle_terminal_event(&mut self, state: &mut TuiState, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                // Help overlay swallows keys until closed
                if state.show_help {
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                        state.show_help = false;
                    }
                    return;
                }
                let action = handle_key_event(state.mode, self.screen(), key);
                self.handle_action(state, action);
            }
            Event::Resize(_, _) => {
                // Terminal auto-resizes on next draw
            }
            _ => {}
        }
    }

    /// Handle a semantic key action
    pub fn handle_action(&mut self, state: &mut TuiState, action: KeyAction) {
        debug!(?action, "Key action");
        let language = self.store.state().language;

        match action {
            KeyAction::None => {}
            KeyAction::Quit => state.should_quit = true,
            KeyAction::ShowHelp => state.show_help = !state.show_help,
            KeyAction::Close => {
                self.store.dispatch(MenuAction::CloseOverlay);
            }

            // -- Menu --
            KeyAction::CursorUp | KeyAction::CursorDown => {
                let delta = if action == KeyAction::CursorUp { -1 } else { 1 };
                match self.screen() {
                    Screen::Cart => {
                        let len = self.store.state().draft.lines().len();
                        TuiState::step(&mut state.cart_cursor, delta, len);
                    }
                    _ => {
                        let len = self.store.visible_indices().len();
                        TuiState::step(&mut state.cursor, delta, len);
                    }
                }
            }
            KeyAction::NextCategory => {
                self.store.dispatch(MenuAction::NextCategory);
            }
            KeyAction::PreviousCategory => {
                self.store.dispatch(MenuAction::PreviousCategory);
            }
            KeyAction::EnterSearch => {
                if self.store.config().features.search {
                    state.search_input = self.store.state().search_query.clone();
                    state.mode = InputMode::Search;
                }
            }
            KeyAction::ClearSearch => {
                state.search_input.clear();
                self.store.dispatch(MenuAction::SetSearchQuery(String::new()));
            }
            KeyAction::CycleSort => {
                self.store.dispatch(MenuAction::CycleSortMode);
            }
            KeyAction::ToggleLanguage => {
                self.store.dispatch(MenuAction::ToggleLanguage);
            }
            KeyAction::CycleBranch => {
                self.store.dispatch(MenuAction::CycleBranch);
            }
            KeyAction::OpenItem => {
                if let Some(item_name) = self.selected_item_name(state) {
                    self.store.dispatch(MenuAction::OpenItem { item_name });
                }
            }
            KeyAction::AddOne => {
                if !self.require_ordering(state) {
                    return;
                }
                if let Some(action) = self.list_add_action(state) {
                    self.store.dispatch(action);
                }
            }
            KeyAction::RemoveOne => {
                if !self.require_ordering(state) {
                    return;
                }
                let line_id = self
                    .selected_item(state)
                    .map(|item| self.store.current_line_id(item));
                if let Some(line_id) = line_id {
                    self.store.dispatch(MenuAction::DecrementLine(line_id));
                }
            }
            KeyAction::NextOption => match self.screen() {
                Screen::Detail => {
                    self.store.dispatch(MenuAction::CycleDetailOption);
                }
                _ => {
                    if let Some(action) = self.next_option_action(state) {
                        self.store.dispatch(action);
                    }
                }
            },
            KeyAction::OpenCart => {
                if self.require_ordering(state) {
                    state.cart_cursor = 0;
                    self.store.dispatch(MenuAction::OpenCart);
                }
            }

            // -- Item detail --
            KeyAction::AddDetail => {
                if self.require_ordering(state) && self.store.dispatch(MenuAction::AddDetailToCart)
                {
                    state.set_flash(format!("+1 · {}", Label::YourOrder.text(language)));
                }
            }

            // -- Cart --
            KeyAction::IncrementLine | KeyAction::DecrementLine | KeyAction::RemoveLine => {
                let Some(line_id) = self
                    .store
                    .state()
                    .draft
                    .lines()
                    .get(state.cart_cursor)
                    .map(|l| l.id.clone())
                else {
                    return;
                };
                let action = match action {
                    KeyAction::IncrementLine => MenuAction::IncrementLine(line_id),
                    KeyAction::DecrementLine => MenuAction::DecrementLine(line_id),
                    _ => MenuAction::RemoveFromCart(line_id),
                };
                self.store.dispatch(action);
            }
            KeyAction::ClearCart => {
                self.store.dispatch(MenuAction::ClearCart);
            }
            KeyAction::EditNotes => {
                state.notes_input = self.store.state().draft.notes().to_string();
                state.mode = InputMode::Notes;
            }
            KeyAction::Checkout => self.checkout(state),

            // -- Text input --
            KeyAction::InsertChar(c) => {
                state.insert_char(c);
                self.sync_search(state);
            }
            KeyAction::DeleteChar => {
                state.delete_char();
                self.sync_search(state);
            }
            KeyAction::ClearInput => {
                state.clear_input();
                self.sync_search(state);
            }
            KeyAction::Submit | KeyAction::ExitToNormal => {
                if state.mode == InputMode::Notes {
                    self.store
                        .dispatch(MenuAction::SetNotes(state.notes_input.clone()));
                }
                state.mode = InputMode::Normal;
            }
        }

        if self.list_flag.take() {
            state.cursor = 0;
        }
        state.clamp_cursors(
            self.store.visible_indices().len(),
            self.store.state().draft.lines().len(),
        );
    }

    /// Search is live: every edit re-filters the list
    fn sync_search(&mut self, state: &TuiState) {
        if state.mode == InputMode::Search {
            self.store
                .dispatch(MenuAction::SetSearchQuery(state.search_input.clone()));
        }
    }

    fn require_ordering(&self, state: &mut TuiState) -> bool {
        if self.store.ordering_enabled() {
            return true;
        }
        state.set_flash(Label::ViewOnly.text(self.store.state().language));
        false
    }

    fn selected_item(&self, state: &TuiState) -> Option<&menu_domain::MenuItem> {
        self.store.visible_items().get(state.cursor).copied()
    }

    fn selected_item_name(&self, state: &TuiState) -> Option<String> {
        self.selected_item(state).map(|item| item.key().to_string())
    }

    /// Add one of the highlighted item with its remembered option
    fn list_add_action(&self, state: &TuiState) -> Option<MenuAction> {
        let item = self.selected_item(state)?;
        let option = self
            .store
            .current_option(item)
            .map(|o| o.key().to_string());
        Some(MenuAction::add_one(item.key(), option))
    }

    /// Select the option after the remembered one for the highlighted item
    fn next_option_action(&self, state: &TuiState) -> Option<MenuAction> {
        let item = self.selected_item(state)?;
        if !item.has_options() {
            return None;
        }
        let next = self
            .store
            .current_option(item)
            .and_then(|current| item.options.iter().position(|o| o.key() == current.key()))
            .map(|i| (i + 1) % item.options.len())
            .unwrap_or(0);
        let option = item.options.get(next)?;
        Some(MenuAction::SelectOption {
            item_name: item.key().to_string(),
            option_name: option.key().to_string(),
        })
    }

    fn checkout(&mut self, state: &mut TuiState) {
        let language = self.store.state().language;
        let input = CheckoutInput::from_state(self.store.state());
        match self.checkout.execute(input) {
            Ok(receipt) => {
                let message = match &receipt.outcome {
                    Some(LaunchOutcome::Opened { program }) => {
                        format!("{} {}", Label::OpenedWhatsApp.text(language), program)
                    }
                    Some(LaunchOutcome::Deferred) => Label::LinkSaved.text(language).to_string(),
                    None => format!(
                        "{} {}",
                        Label::OpenLinkToSend.text(language),
                        receipt.url()
                    ),
                };
                state.set_flash(message);
            }
            Err(e) => {
                debug!("Checkout rejected: {}", e);
                state.set_flash(Label::for_checkout_error(&e).text(language));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use menu_application::{LaunchError, LinkLauncher};
    use menu_domain::{BrandConfig, CategorySection, ItemOption, MenuCatalog, MenuItem, Price};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLauncher {
        urls: Mutex<Vec<String>>,
    }

    impl LinkLauncher for RecordingLauncher {
        fn launch(&self, url: &str) -> Result<LaunchOutcome, LaunchError> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(LaunchOutcome::Deferred)
        }
    }

    fn catalog() -> MenuCatalog {
        MenuCatalog::default()
            .with_section(
                "starters",
                CategorySection::new("Starters")
                    .with_item(MenuItem::new("Hummus", Price::Fixed(480.0)))
                    .with_item(MenuItem::new("Moutabal", Price::Fixed(520.0))),
            )
            .with_section(
                "mains",
                CategorySection::new("Mains").with_item(
                    MenuItem::new("Mandi", Price::Range(vec![900.0, 1200.0]))
                        .with_option(ItemOption::new("Quarter", 900.0))
                        .with_option(ItemOption::new("Half", 1200.0)),
                ),
            )
    }

    fn app(order_mode: bool) -> (TuiApp, Arc<RecordingLauncher>) {
        let config = Arc::new(BrandConfig::default());
        let launcher = Arc::new(RecordingLauncher::default());
        let store = MenuStore::new(Arc::new(catalog()), config.clone(), order_mode);
        let checkout = CheckoutUseCase::new(config, launcher.clone());
        (TuiApp::new(store, checkout), launcher)
    }

    fn press(app: &mut TuiApp, state: &mut TuiState, code: KeyCode) {
        app.handle_terminal_event(state, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut TuiApp, state: &mut TuiState, text: &str) {
        for c in text.chars() {
            press(app, state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_from_list_and_checkout() {
        let (mut app, launcher) = app(true);
        let mut state = TuiState::new();

        press(&mut app, &mut state, KeyCode::Char('+'));
        press(&mut app, &mut state, KeyCode::Char('+'));
        assert_eq!(app.store().state().total_items(), 2);

        press(&mut app, &mut state, KeyCode::Char('c'));
        assert_eq!(app.screen(), Screen::Cart);

        press(&mut app, &mut state, KeyCode::Char('n'));
        type_text(&mut app, &mut state, "no garlic");
        press(&mut app, &mut state, KeyCode::Enter);
        assert_eq!(app.store().state().draft.notes(), "no garlic");
        assert_eq!(state.mode, InputMode::Normal);

        press(&mut app, &mut state, KeyCode::Enter);
        let urls = launcher.urls.lock().unwrap();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].contains("2x%20Hummus"));
        assert!(state.flash_message.is_some());
    }

    #[test]
    fn test_view_mode_blocks_ordering() {
        let (mut app, _) = app(false);
        let mut state = TuiState::new();

        press(&mut app, &mut state, KeyCode::Char('+'));
        press(&mut app, &mut state, KeyCode::Char('c'));
        assert_eq!(app.store().state().total_items(), 0);
        assert_eq!(app.screen(), Screen::Menu);
        let (flash, _) = state.flash_message.clone().unwrap();
        assert!(flash.starts_with("View Mode"));
    }

    #[test]
    fn test_live_search_resets_cursor() {
        let (mut app, _) = app(true);
        let mut state = TuiState::new();

        press(&mut app, &mut state, KeyCode::Char('j'));
        assert_eq!(state.cursor, 1);

        press(&mut app, &mut state, KeyCode::Char('/'));
        assert_eq!(state.mode, InputMode::Search);
        type_text(&mut app, &mut state, "hum");
        assert_eq!(app.store().state().search_query, "hum");
        assert_eq!(state.cursor, 0);
        assert_eq!(app.store().visible_items().len(), 1);

        press(&mut app, &mut state, KeyCode::Esc);
        assert_eq!(state.mode, InputMode::Normal);
        press(&mut app, &mut state, KeyCode::Esc);
        assert!(app.store().state().search_query.is_empty());
    }

    #[test]
    fn test_option_cycle_then_add_uses_remembered_option() {
        let (mut app, _) = app(true);
        let mut state = TuiState::new();

        press(&mut app, &mut state, KeyCode::Tab);
        press(&mut app, &mut state, KeyCode::Char('o'));
        press(&mut app, &mut state, KeyCode::Char('+'));

        let lines = app.store().state().draft.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id.as_str(), "Mandi_Half");
        assert_eq!(lines[0].unit_price, 1200.0);

        press(&mut app, &mut state, KeyCode::Char('-'));
        assert!(app.store().state().draft.is_empty());
    }

    #[test]
    fn test_detail_add_closes_overlay() {
        let (mut app, _) = app(true);
        let mut state = TuiState::new();

        press(&mut app, &mut state, KeyCode::Tab);
        press(&mut app, &mut state, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Detail);

        press(&mut app, &mut state, KeyCode::Tab);
        press(&mut app, &mut state, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(
            app.store().state().draft.lines()[0].id.as_str(),
            "Mandi_Half"
        );
    }

    #[test]
    fn test_cart_line_editing() {
        let (mut app, _) = app(true);
        let mut state = TuiState::new();

        press(&mut app, &mut state, KeyCode::Char('+'));
        press(&mut app, &mut state, KeyCode::Char('j'));
        press(&mut app, &mut state, KeyCode::Char('+'));
        press(&mut app, &mut state, KeyCode::Char('c'));

        press(&mut app, &mut state, KeyCode::Char('j'));
        assert_eq!(state.cart_cursor, 1);
        press(&mut app, &mut state, KeyCode::Char('+'));
        assert_eq!(app.store().state().draft.lines()[1].quantity, 2);

        press(&mut app, &mut state, KeyCode::Char('d'));
        assert_eq!(app.store().state().draft.lines().len(), 1);
        assert_eq!(state.cart_cursor, 0);

        app.handle_terminal_event(
            &mut state,
            Event::Key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT)),
        );
        assert!(app.store().state().draft.is_empty());
    }

    #[test]
    fn test_help_swallows_keys() {
        let (mut app, _) = app(true);
        let mut state = TuiState::new();

        press(&mut app, &mut state, KeyCode::Char('?'));
        assert!(state.show_help);
        press(&mut app, &mut state, KeyCode::Char('+'));
        assert_eq!(app.store().state().total_items(), 0);
        press(&mut app, &mut state, KeyCode::Esc);
        assert!(!state.show_help);
    }

    #[test]
    fn test_checkout_empty_cart_flashes_error() {
        let (mut app, launcher) = app(true);
        let mut state = TuiState::new();
        app.handle_action(&mut state, KeyAction::Checkout);
        assert!(launcher.urls.lock().unwrap().is_empty());
        let (flash, _) = state.flash_message.clone().unwrap();
        assert_eq!(flash, "Cart is empty");
    }

    #[test]
    fn test_checkout_messages_follow_language() {
        let (mut app, _) = app(true);
        let mut state = TuiState::new();
        press(&mut app, &mut state, KeyCode::Char('L'));
        assert_eq!(app.store().state().language, menu_domain::Language::Ar);

        app.handle_action(&mut state, KeyAction::Checkout);
        let (flash, _) = state.flash_message.clone().unwrap();
        assert_eq!(flash, "السلة فارغة");

        press(&mut app, &mut state, KeyCode::Char('+'));
        app.handle_action(&mut state, KeyAction::Checkout);
        let (flash, _) = state.flash_message.clone().unwrap();
        assert_eq!(flash, Label::LinkSaved.text(menu_domain::Language::Ar));
    }
}
