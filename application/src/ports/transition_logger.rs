//! Port for structured transition logging.
//!
//! Defines the [`TransitionLogger`] trait for recording each step of a mode
//! change to a machine-readable journal (JSONL).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port keeps an audit trail
//! of what was written to the firmware and what the user decided.

use serde_json::Value;

/// A structured transition event for logging.
pub struct TransitionEvent {
    /// Event type identifier (e.g., "state_committed", "restart_declined").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl TransitionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging transition events.
///
/// The `log` method is synchronous and non-fallible: a broken journal must
/// never interrupt a mode change.
pub trait TransitionLogger: Send + Sync {
    fn log(&self, event: TransitionEvent);
}

/// No-op implementation for tests and when the journal is disabled.
pub struct NoTransitionLogger;

impl TransitionLogger for NoTransitionLogger {
    fn log(&self, _event: TransitionEvent) {}
}
