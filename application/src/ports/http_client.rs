//! HTTP client port
//!
//! Defines the single-request JSON exchange the survey client is built on.
//! The reqwest-backed adapter lives in the infrastructure layer.

use async_trait::async_trait;
use serde_json::Value;
use survey_domain::GenerationFailure;
use thiserror::Error;

/// HTTP methods used by the survey backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during an HTTP exchange
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// Transport could not complete the exchange
    #[error("Network error: {0}")]
    Network(String),

    /// Response status outside 2xx
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Response body is not valid JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<HttpError> for GenerationFailure {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Network(detail) => GenerationFailure::network(detail),
            HttpError::Status(code) => GenerationFailure::http_status(code),
            HttpError::Decode(detail) => GenerationFailure::decode(detail),
        }
    }
}

/// Issues one HTTP request and parses the JSON response.
///
/// No retries. `path` is relative to the configured base URL.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, HttpError>;
}
