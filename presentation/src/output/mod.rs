//! Output formatting for listing mode

pub mod console;
pub mod listing;
