//! Generation request state machine

use serde::{Deserialize, Serialize};

/// Shown when a submit is attempted with an empty field
pub const VALIDATION_MESSAGE: &str = "Please provide both title and description";

/// Shown after a successful generation
pub const SUCCESS_MESSAGE: &str = "Survey generated successfully! Check the console for details.";

/// Shown after any network-layer failure
pub const FAILURE_MESSAGE: &str = "Failed to generate survey. Please try again.";

/// State of one form's generation control.
///
/// ```text
/// Idle ──submit──▶ Validating ──empty field──▶ Failed(validation)
///                      │
///                      └──complete──▶ InFlight ──ok──▶ Succeeded
///                                         └──err──▶ Failed
/// ```
///
/// `Succeeded` and `Failed` hold until the next submit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum GenerationState {
    #[default]
    Idle,
    Validating,
    InFlight,
    Succeeded(String),
    Failed(String),
}

impl GenerationState {
    pub fn validation_failed() -> Self {
        GenerationState::Failed(VALIDATION_MESSAGE.to_string())
    }

    pub fn succeeded() -> Self {
        GenerationState::Succeeded(SUCCESS_MESSAGE.to_string())
    }

    pub fn failed() -> Self {
        GenerationState::Failed(FAILURE_MESSAGE.to_string())
    }

    /// A submit is being processed; the triggering control is disabled
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            GenerationState::Validating | GenerationState::InFlight
        )
    }

    /// Whether this state only changes on a new submit
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GenerationState::Succeeded(_) | GenerationState::Failed(_)
        )
    }

    /// Success banner text, if any
    pub fn success_message(&self) -> Option<&str> {
        match self {
            GenerationState::Succeeded(m) => Some(m),
            _ => None,
        }
    }

    /// Error banner text, if any
    pub fn error_message(&self) -> Option<&str> {
        match self {
            GenerationState::Failed(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationState::Idle => "idle",
            GenerationState::Validating => "validating",
            GenerationState::InFlight => "in_flight",
            GenerationState::Succeeded(_) => "succeeded",
            GenerationState::Failed(_) => "failed",
        }
    }
}

impl std::fmt::Display for GenerationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
