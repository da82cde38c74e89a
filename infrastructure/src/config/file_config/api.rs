//! Backend connection configuration from TOML (`[api]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use survey_application::{ApiClientConfig, DEFAULT_BASE_URL};
use survey_domain::{ConfigIssue, ConfigIssueCode};

/// Raw `[api]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Backend base URL
    pub base_url: String,
    /// Request timeout in seconds (unset = transport default)
    pub timeout_secs: Option<u64>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl FileApiConfig {
    /// Convert to the application's connection settings
    pub fn to_api_client_config(&self) -> ApiClientConfig {
        ApiClientConfig::new(self.base_url.trim()).with_timeout(
            self.timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        )
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let base_url = self.base_url.trim();

        if base_url.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "api.base_url".to_string(),
                },
                "api.base_url is empty",
            ));
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::UnsupportedScheme {
                    field: "api.base_url".to_string(),
                    value: base_url.to_string(),
                },
                format!(
                    "api.base_url: '{}' must start with http:// or https://",
                    base_url
                ),
            ));
        }

        if self.timeout_secs == Some(0) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroDuration {
                    field: "api.timeout_secs".to_string(),
                },
                "api.timeout_secs = 0 is ignored; the transport default applies",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        let config = FileApiConfig::default().to_api_client_config();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_timeout_conversion() {
        let api = FileApiConfig {
            timeout_secs: Some(15),
            ..Default::default()
        };
        assert_eq!(
            api.to_api_client_config().timeout,
            Some(Duration::from_secs(15))
        );

        let api = FileApiConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(api.to_api_client_config().timeout.is_none());
        assert_eq!(api.validate().len(), 1);
    }

    #[test]
    fn test_validate_base_url() {
        assert!(FileApiConfig::default().validate().is_empty());

        let api = FileApiConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        let issues = api.validate();
        assert!(issues[0].is_error());
        assert!(matches!(issues[0].code, ConfigIssueCode::EmptyValue { .. }));

        let api = FileApiConfig {
            base_url: "localhost:8000".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            api.validate()[0].code,
            ConfigIssueCode::UnsupportedScheme { .. }
        ));
    }
}
