//! Logging infrastructure - structured diagnostics logging.
//!
//! Provides [`JsonlDiagnosticsLogger`], a JSONL file writer that implements
//! the [`DiagnosticsLogger`](survey_application::DiagnosticsLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlDiagnosticsLogger;
