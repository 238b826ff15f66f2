//! Logging infrastructure: structured order logging
//!
//! Provides [`JsonlOrderLogger`], a JSONL file writer that implements the
//! [`OrderLogger`](menu_application::OrderLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlOrderLogger;
