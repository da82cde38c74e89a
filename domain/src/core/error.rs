//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please provide both title and description")]
    IncompleteDraft,

    #[error("Payload does not match the survey schema: {0}")]
    InvalidSurveyPayload(String),

    #[error("Payload does not match the health schema: {0}")]
    InvalidHealthPayload(String),

    #[error("Unknown question type: {0}")]
    UnknownQuestionType(String),
}

impl DomainError {
    /// Check if this error comes from client-side draft validation
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::IncompleteDraft)
    }
}
