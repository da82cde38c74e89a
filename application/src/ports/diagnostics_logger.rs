//! Port for structured diagnostics logging.
//!
//! Defines the [`DiagnosticsLogger`] trait for recording backend exchanges
//! (requests issued, payloads received, failure reasons) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable messages, while this port keeps the failure detail users
//! never see in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured diagnostics event.
pub struct DiagnosticEvent {
    /// Event type identifier (e.g., "generation_requested", "generation_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl DiagnosticEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging diagnostics events.
///
/// `log` is synchronous and infallible; logging failures never disturb the
/// request flow.
pub trait DiagnosticsLogger: Send + Sync {
    fn log(&self, event: DiagnosticEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoDiagnosticsLogger;

impl DiagnosticsLogger for NoDiagnosticsLogger {
    fn log(&self, _event: DiagnosticEvent) {}
}
