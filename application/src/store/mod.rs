//! State store
//!
//! Every state change flows through [`MenuStore::dispatch`], which applies
//! the pure [`reduce`] function to a [`MenuAction`].

pub mod action;
pub mod reducer;
pub mod state;
#[allow(clippy::module_inception)]
pub mod store;

pub use action::MenuAction;
pub use reducer::{StoreContext, initial_state, reduce};
pub use state::{ItemDetail, MenuState, ViewState};
pub use store::MenuStore;
