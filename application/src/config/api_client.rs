//! Backend connection settings.
//!
//! Injected into the HTTP adapter at construction instead of a process-wide
//! constant, so tests can point the client at a local server.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Backend connection parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiClientConfig {
    /// Scheme, host and optional port (and path prefix) of the backend.
    pub base_url: String,
    /// Request timeout. `None` keeps the transport's default.
    pub timeout: Option<Duration>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join the base URL and an absolute endpoint path
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
