//! Survey schema shared with the generation backend.
//!
//! These types are an optional interpretation of the opaque payloads the
//! client returns; nothing in the request path depends on them.

pub mod entities;
pub mod health;

pub use entities::{GeneratedSurvey, Question, QuestionOption, QuestionType};
pub use health::HealthStatus;
