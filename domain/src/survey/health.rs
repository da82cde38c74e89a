//! Backend health status

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub openai_configured: bool,
    #[serde(default)]
    pub database_status: Option<String>,
}

impl HealthStatus {
    pub fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        Self::deserialize(payload).map_err(|e| DomainError::InvalidHealthPayload(e.to_string()))
    }

    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }

    /// Healthy and able to generate surveys
    pub fn can_generate(&self) -> bool {
        self.is_healthy() && self.openai_configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_health() {
        let health =
            HealthStatus::from_payload(&json!({"status": "healthy", "openai_configured": true}))
                .unwrap();
        assert!(health.is_healthy());
        assert!(health.can_generate());
        assert!(health.database_status.is_none());
    }

    #[test]
    fn test_healthy_without_key_cannot_generate() {
        let health = HealthStatus::from_payload(&json!({
            "status": "healthy",
            "openai_configured": false,
            "database_status": "disconnected"
        }))
        .unwrap();
        assert!(!health.can_generate());
        assert_eq!(health.database_status.as_deref(), Some("disconnected"));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(HealthStatus::from_payload(&json!({"message": "Hello World"})).is_err());
    }
}
