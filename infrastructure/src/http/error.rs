//! Error types for the HTTP adapter

use thiserror::Error;

/// Errors raised while setting up the HTTP adapter.
///
/// Per-request failures are reported through
/// [`HttpError`](survey_application::HttpError) instead.
#[derive(Error, Debug)]
pub enum HttpClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
