//! Notification entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Display duration used when none is given
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

/// Categorical styling of a notification. Affects presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    #[default]
    Success,
    Error,
    Info,
}

impl NotificationCategory {
    /// Heading shown above the message
    pub fn label(&self) -> &'static str {
        match self {
            NotificationCategory::Success => "Success",
            NotificationCategory::Error => "Error",
            NotificationCategory::Info => "Info",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::Success => "success",
            NotificationCategory::Error => "error",
            NotificationCategory::Info => "info",
        }
    }
}

impl std::fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NotificationCategory {
    type Err = std::convert::Infallible;

    /// Unrecognized names fall back to `Info` styling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "success" => NotificationCategory::Success,
            "error" => NotificationCategory::Error,
            _ => NotificationCategory::Info,
        })
    }
}

/// Identifier of a shown notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A notification currently on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationState {
    pub id: NotificationId,
    pub message: String,
    pub category: NotificationCategory,
    pub created_at: DateTime<Utc>,
}

impl NotificationState {
    pub fn new(id: NotificationId, message: impl Into<String>, category: NotificationCategory) -> Self {
        Self {
            id,
            message: message.into(),
            category,
            created_at: Utc::now(),
        }
    }
}

/// How a notification left the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DismissReason {
    /// Display duration elapsed
    Expired,
    /// User closed it
    Closed,
}
