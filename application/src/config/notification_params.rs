//! Notification display parameters.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use survey_domain::DEFAULT_NOTIFICATION_DURATION;

/// How notifications behave once shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationParams {
    /// Time on screen before auto-dismissal.
    pub duration: Duration,
}

impl Default for NotificationParams {
    fn default() -> Self {
        Self {
            duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }
}

impl NotificationParams {
    pub fn with_duration_ms(mut self, millis: u64) -> Self {
        self.duration = Duration::from_millis(millis);
        self
    }
}
