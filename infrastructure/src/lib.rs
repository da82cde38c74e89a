//! Infrastructure layer for survey-assist
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    BASE_URL_ENV, ConfigLoader, FileApiConfig, FileConfig, FileLoggingConfig,
    FileNotificationConfig, FileOutputConfig, FileOutputFormat,
};
pub use http::{HttpClientError, ReqwestHttpClient};
pub use logging::JsonlDiagnosticsLogger;
