//! Deep link launchers
//!
//! Implementations of the [`LinkLauncher`](menu_application::LinkLauncher)
//! port: the platform opener, or a deferred list printed on exit.

mod deferred;
mod system;

pub use deferred::DeferredLinkLauncher;
pub use system::SystemLinkLauncher;
