//! Survey generation client.
//!
//! Wraps the two backend calls the form needs on top of the [`HttpClient`]
//! port: survey generation and a diagnostic health check.
//!
//! The client does not validate its input (the controller does) and does not
//! interpret the success payload; it only normalizes transport outcomes into
//! a [`GenerationResult`].

use crate::ports::diagnostics_logger::{DiagnosticEvent, DiagnosticsLogger, NoDiagnosticsLogger};
use crate::ports::http_client::{HttpClient, HttpMethod};
use serde_json::{Value, json};
use std::sync::Arc;
use survey_domain::core::string::truncate;
use survey_domain::{GenerationFailure, GenerationRequest, GenerationResult};
use tracing::{debug, error, info};

/// Endpoint for survey generation
pub const GENERATE_PATH: &str = "/api/surveys/generate";

/// Endpoint for the health check
pub const HEALTH_PATH: &str = "/health";

/// Client for the survey generation backend.
pub struct SurveyGenerationClient {
    http: Arc<dyn HttpClient>,
    diagnostics: Arc<dyn DiagnosticsLogger>,
}

impl Clone for SurveyGenerationClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            diagnostics: self.diagnostics.clone(),
        }
    }
}

impl SurveyGenerationClient {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            diagnostics: Arc::new(NoDiagnosticsLogger),
        }
    }

    /// Create with a diagnostics logger.
    pub fn with_diagnostics_logger(mut self, logger: Arc<dyn DiagnosticsLogger>) -> Self {
        self.diagnostics = logger;
        self
    }

    /// Request a survey for the given draft.
    ///
    /// Every transport, status and decode failure becomes
    /// [`GenerationResult::Failure`]; nothing is retried.
    pub async fn generate_survey(&self, request: &GenerationRequest) -> GenerationResult {
        info!(
            "Requesting survey generation: {}",
            truncate(request.title(), 60)
        );
        self.diagnostics.log(DiagnosticEvent::new(
            "generation_requested",
            json!({
                "title": request.title(),
                "description": request.description(),
            }),
        ));

        let body = request.to_json();
        match self
            .http
            .request(HttpMethod::Post, GENERATE_PATH, Some(&body))
            .await
        {
            Ok(payload) => {
                debug!("Generated survey: {}", payload);
                self.diagnostics.log(DiagnosticEvent::new(
                    "generation_succeeded",
                    json!({ "payload": payload }),
                ));
                GenerationResult::Success(payload)
            }
            Err(e) => {
                error!("Error generating survey: {}", e);
                let failure = GenerationFailure::from(e);
                self.diagnostics.log(DiagnosticEvent::new(
                    "generation_failed",
                    json!({ "reason": failure.kind, "detail": failure.detail }),
                ));
                GenerationResult::Failure(failure)
            }
        }
    }

    /// Query the backend's health endpoint. Diagnostic use only.
    pub async fn health_check(&self) -> Result<Value, GenerationFailure> {
        match self.http.request(HttpMethod::Get, HEALTH_PATH, None).await {
            Ok(payload) => {
                self.diagnostics.log(DiagnosticEvent::new(
                    "health_checked",
                    json!({ "payload": payload }),
                ));
                Ok(payload)
            }
            Err(e) => {
                error!("Health check failed: {}", e);
                let failure = GenerationFailure::from(e);
                self.diagnostics.log(DiagnosticEvent::new(
                    "health_check_failed",
                    json!({ "reason": failure.kind, "detail": failure.detail }),
                ));
                Err(failure)
            }
        }
    }
}
