//! Notification configuration from TOML (`[notification]` section)

use serde::{Deserialize, Serialize};
use survey_application::NotificationParams;
use survey_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_NOTIFICATION_DURATION};

/// Raw `[notification]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNotificationConfig {
    /// Display duration before auto-dismissal, in milliseconds
    pub duration_ms: u64,
}

impl Default for FileNotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_NOTIFICATION_DURATION.as_millis() as u64,
        }
    }
}

impl FileNotificationConfig {
    pub fn to_params(&self) -> NotificationParams {
        NotificationParams::default().with_duration_ms(self.duration_ms)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.duration_ms == 0 {
            vec![ConfigIssue::warning(
                ConfigIssueCode::ZeroDuration {
                    field: "notification.duration_ms".to_string(),
                },
                "notification.duration_ms = 0 dismisses notifications immediately",
            )]
        } else {
            Vec::new()
        }
    }
}
