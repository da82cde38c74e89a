//! Survey entities as produced by the generation backend

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kinds of survey question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    SingleChoice,
    OpenQuestion,
    ShortAnswer,
    Scale,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multipleChoice",
            QuestionType::SingleChoice => "singleChoice",
            QuestionType::OpenQuestion => "openQuestion",
            QuestionType::ShortAnswer => "shortAnswer",
            QuestionType::Scale => "scale",
        }
    }

    /// Whether answers are picked from a list of options
    pub fn has_options(&self) -> bool {
        matches!(self, QuestionType::MultipleChoice | QuestionType::SingleChoice)
    }

    pub fn all() -> &'static [QuestionType] {
        &[
            QuestionType::MultipleChoice,
            QuestionType::SingleChoice,
            QuestionType::OpenQuestion,
            QuestionType::ShortAnswer,
            QuestionType::Scale,
        ]
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuestionType {
    type Err = DomainError;

    /// Accepts the wire names (`multipleChoice`) as well as
    /// `multiple-choice` / `multiple_choice` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        QuestionType::all()
            .iter()
            .copied()
            .find(|t| t.as_str().to_lowercase() == normalized)
            .ok_or_else(|| DomainError::UnknownQuestionType(s.to_string()))
    }
}

/// An answer option of a choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
}

/// A survey question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub title: String,
    pub saved: bool,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// An empty, unsaved question as added from the form's "Add Question" control
    pub fn placeholder(id: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            id: id.into(),
            question_type,
            title: String::new(),
            saved: false,
            options: Vec::new(),
        }
    }
}

/// A complete survey returned by the generation backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSurvey {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl GeneratedSurvey {
    /// Interpret an opaque generation payload as a survey.
    ///
    /// Optional: callers that only need the raw payload never call this.
    pub fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        Self::deserialize(payload).map_err(|e| DomainError::InvalidSurveyPayload(e.to_string()))
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
