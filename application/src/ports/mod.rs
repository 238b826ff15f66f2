//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod catalog_source;
pub mod link_launcher;
pub mod order_logger;
pub mod state_observer;
