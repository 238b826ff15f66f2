//! Terminal UI for browsing the menu and assembling an order
//!
//! Built on ratatui. Key events become [`KeyAction`]s, which the app turns
//! into store actions; every widget renders from the store plus the
//! TUI-local [`TuiState`].

mod app;
mod mode;
mod observer;
mod state;
mod widgets;

pub use app::TuiApp;
pub use mode::{InputMode, KeyAction, Screen, handle_key_event};
pub use observer::ListChangeFlag;
pub use state::TuiState;
pub use widgets::MainLayout;
