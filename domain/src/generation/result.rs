//! Generation result value objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Why a backend exchange failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "status", rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport could not complete the exchange
    Network,
    /// Server answered with a non-2xx status
    HttpStatus(u16),
    /// Response body was not valid JSON
    Decode,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Network => "network",
            FailureKind::HttpStatus(_) => "http_status",
            FailureKind::Decode => "decode",
        }
    }
}

/// A failed backend exchange with its diagnostic detail.
///
/// The detail is for logs only; users see a fixed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationFailure {
    pub kind: FailureKind,
    pub detail: String,
}

impl GenerationFailure {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self::new(FailureKind::Network, detail)
    }

    pub fn http_status(status: u16) -> Self {
        Self::new(
            FailureKind::HttpStatus(status),
            format!("HTTP error! status: {}", status),
        )
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        Self::new(FailureKind::Decode, detail)
    }
}

impl std::fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failure: {}", self.kind.as_str(), self.detail)
    }
}

/// Outcome of a survey generation call.
///
/// The success payload is kept opaque here; interpreting it is the job of an
/// explicit consumer such as [`GeneratedSurvey::from_payload`](crate::survey::GeneratedSurvey::from_payload).
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    Success(Value),
    Failure(GenerationFailure),
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success(_))
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            GenerationResult::Success(v) => Some(v),
            GenerationResult::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&GenerationFailure> {
        match self {
            GenerationResult::Success(_) => None,
            GenerationResult::Failure(f) => Some(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_detail_matches_wire_message() {
        let failure = GenerationFailure::http_status(502);
        assert_eq!(failure.kind, FailureKind::HttpStatus(502));
        assert_eq!(failure.detail, "HTTP error! status: 502");
    }

    #[test]
    fn test_result_accessors() {
        let ok = GenerationResult::Success(serde_json::json!({"questions": []}));
        assert!(ok.is_success());
        assert!(ok.payload().is_some());
        assert!(ok.failure().is_none());

        let err = GenerationResult::Failure(GenerationFailure::network("refused"));
        assert!(!err.is_success());
        assert_eq!(err.failure().unwrap().kind, FailureKind::Network);
    }

    #[test]
    fn test_failure_kind_serializes_with_status() {
        let json = serde_json::to_value(FailureKind::HttpStatus(404)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "http_status", "status": 404}));
        let json = serde_json::to_value(FailureKind::Network).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "network"}));
    }
}
