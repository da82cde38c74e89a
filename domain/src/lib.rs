//! Domain layer for survey-assist
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Draft
//!
//! The survey title/description pair being edited. Fields are clipped to
//! their limits as they are written, and a [`GenerationRequest`] can only be
//! built from a draft whose fields are both non-empty.
//!
//! ## Generation
//!
//! - **[`GenerationResult`]**: opaque JSON payload or a typed failure
//! - **[`GenerationState`]**: the per-form state machine
//!   (Idle → Validating → InFlight → Succeeded/Failed)
//!
//! ## Notification
//!
//! Short-lived messages with a category used for styling only.

pub mod config;
pub mod core;
pub mod draft;
pub mod generation;
pub mod notification;
pub mod survey;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use draft::{DraftField, FieldUpdate, GenerationRequest, SurveyDraftInput};
pub use generation::{
    FAILURE_MESSAGE, FailureKind, GenerationFailure, GenerationResult, GenerationState,
    SUCCESS_MESSAGE, VALIDATION_MESSAGE,
};
pub use notification::{
    DEFAULT_NOTIFICATION_DURATION, DismissReason, NotificationCategory, NotificationId,
    NotificationState,
};
pub use survey::{GeneratedSurvey, HealthStatus, Question, QuestionOption, QuestionType};
