//! Application layer for survey-assist
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ApiClientConfig, DEFAULT_BASE_URL, NotificationParams};
pub use ports::{
    diagnostics_logger::{DiagnosticEvent, DiagnosticsLogger, NoDiagnosticsLogger},
    generation_observer::{GenerationObserver, NoGenerationObserver},
    http_client::{HttpClient, HttpError, HttpMethod},
};
pub use use_cases::generation_controller::{GenerationController, SubmitOutcome};
pub use use_cases::survey_generation::{GENERATE_PATH, HEALTH_PATH, SurveyGenerationClient};
