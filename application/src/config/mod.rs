//! Application-level configuration
//!
//! - [`SessionOptions`]: values fixed for a session (order mode, language override)

pub mod session;

pub use session::{SessionOptions, order_mode_from_url};
