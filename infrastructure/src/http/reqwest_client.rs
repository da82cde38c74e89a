//! reqwest-backed [`HttpClient`] adapter

use super::error::HttpClientError;
use async_trait::async_trait;
use serde_json::Value;
use survey_application::{ApiClientConfig, HttpClient, HttpError, HttpMethod};
use tracing::debug;

/// Sends JSON requests to the configured backend.
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    config: ApiClientConfig,
}

impl ReqwestHttpClient {
    /// Build the adapter from injected connection settings.
    pub fn new(config: ApiClientConfig) -> Result<Self, HttpClientError> {
        let parsed =
            reqwest::Url::parse(&config.base_url).map_err(|e| HttpClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(HttpClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("survey-assist/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, HttpError> {
        let url = self.config.url_for(path);
        debug!("{} {}", method, url);

        let mut request = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        if let Some(body) = body {
            // Sets Content-Type: application/json
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!("{} {} -> {}", method, url, status);
            return Err(HttpError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| HttpError::Network(format!("Failed to read response body: {}", e)))?;

        serde_json::from_slice(&bytes).map_err(|e| HttpError::Decode(e.to_string()))
    }
}
