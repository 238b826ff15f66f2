//! Port for structured order logging
//!
//! Separate from `tracing` diagnostics: this records every dispatched
//! order in a machine-readable form (one JSON object per line).

use serde_json::Value;

/// A structured order event
pub struct OrderEvent {
    /// Event type identifier (e.g. "order_sent")
    pub event_type: &'static str,
    pub payload: Value,
}

impl OrderEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Records order events. Failures are swallowed by implementations.
pub trait OrderLogger: Send + Sync {
    fn log(&self, event: OrderEvent);
}

/// No-op implementation for tests and when logging is disabled
pub struct NoOrderLogger;

impl OrderLogger for NoOrderLogger {
    fn log(&self, _event: OrderEvent) {}
}
