//! Store observer that tells the TUI when the item list was replaced

use menu_application::{MenuAction, MenuState, StateObserver};
use std::sync::atomic::{AtomicBool, Ordering};

/// Raised when an action changed which items are listed
#[derive(Debug, Default)]
pub struct ListChangeFlag {
    changed: AtomicBool,
}

impl ListChangeFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and reset the flag
    pub fn take(&self) -> bool {
        self.changed.swap(false, Ordering::AcqRel)
    }
}

impl StateObserver for ListChangeFlag {
    fn on_state_changed(&self, _state: &MenuState, action: &MenuAction) {
        if matches!(
            action,
            MenuAction::SelectCategory(_)
                | MenuAction::NextCategory
                | MenuAction::PreviousCategory
                | MenuAction::SetSearchQuery(_)
                | MenuAction::SetSortMode(_)
                | MenuAction::CycleSortMode
        ) {
            self.changed.store(true, Ordering::Release);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_raised_by_list_actions_only() {
        let flag = ListChangeFlag::new();
        let state = MenuState::default();

        flag.on_state_changed(&state, &MenuAction::ToggleLanguage);
        assert!(!flag.take());

        flag.on_state_changed(&state, &MenuAction::NextCategory);
        assert!(flag.take());
        // Reset after take
        assert!(!flag.take());

        flag.on_state_changed(&state, &MenuAction::SetSearchQuery("kebab".into()));
        assert!(flag.take());
    }
}
