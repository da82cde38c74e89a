//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod logging;
mod notification;
mod output;

pub use api::FileApiConfig;
pub use logging::FileLoggingConfig;
pub use notification::FileNotificationConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use serde::{Deserialize, Serialize};
use survey_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend connection settings
    pub api: FileApiConfig,
    /// Notification settings
    pub notification: FileNotificationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Diagnostics logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Apply the command-line backend URL, which beats every file and
    /// environment source.
    pub fn apply_base_url_override(&mut self, base_url: Option<&str>) {
        if let Some(base_url) = base_url {
            self.api.base_url = base_url.to_string();
        }
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.api.validate());
        issues.extend(self.notification.validate());
        issues
    }
}
