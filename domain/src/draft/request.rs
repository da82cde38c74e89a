//! Generation request (Value Object)

use super::input::SurveyDraftInput;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Wire payload for `POST /api/surveys/generate`.
///
/// Can only be built from a complete [`SurveyDraftInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    title: String,
    description: String,
}

impl GenerationRequest {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Serialize to the JSON body sent to the backend
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.title,
            "description": self.description,
        })
    }
}

impl TryFrom<&SurveyDraftInput> for GenerationRequest {
    type Error = DomainError;

    fn try_from(draft: &SurveyDraftInput) -> Result<Self, Self::Error> {
        if !draft.is_complete() {
            return Err(DomainError::IncompleteDraft);
        }
        Ok(Self {
            title: draft.title().to_string(),
            description: draft.description().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_complete_draft() {
        let draft = SurveyDraftInput::from_raw("Team pulse", "Weekly morale check");
        let request = GenerationRequest::try_from(&draft).unwrap();
        assert_eq!(request.title(), "Team pulse");
        assert_eq!(request.description(), "Weekly morale check");
    }

    #[test]
    fn test_request_rejects_missing_field() {
        let draft = SurveyDraftInput::from_raw("Team pulse", "");
        assert_eq!(
            GenerationRequest::try_from(&draft),
            Err(DomainError::IncompleteDraft)
        );

        let draft = SurveyDraftInput::from_raw("", "Weekly morale check");
        assert!(GenerationRequest::try_from(&draft).is_err());
    }

    #[test]
    fn test_wire_shape() {
        let draft = SurveyDraftInput::from_raw("T", "D");
        let request = GenerationRequest::try_from(&draft).unwrap();
        assert_eq!(
            request.to_json(),
            serde_json::json!({"title": "T", "description": "D"})
        );
        let serialized = serde_json::to_value(&request).unwrap();
        assert_eq!(serialized, request.to_json());
    }
}
