//! Port for reacting to store changes
//!
//! Views subscribe to the [`MenuStore`](crate::store::MenuStore) through
//! this trait instead of polling it.

use crate::store::{MenuAction, MenuState};

/// Receives the new state after every dispatch that changed it
pub trait StateObserver: Send + Sync {
    fn on_state_changed(&self, state: &MenuState, action: &MenuAction);
}
