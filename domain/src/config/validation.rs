//! Structured configuration issues.
//!
//! Config loaders report problems as [`ConfigIssue`]s instead of failing, so
//! the caller decides which severities abort startup.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A required value is empty.
    EmptyValue { field: String },
    /// A URL does not start with `http://` or `https://`.
    UnsupportedScheme { field: String, value: String },
    /// A duration of zero disables the feature it controls.
    ZeroDuration { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let e = ConfigIssue::error(
            ConfigIssueCode::EmptyValue {
                field: "api.base_url".to_string(),
            },
            "api.base_url is empty",
        );
        assert!(e.is_error());

        let w = ConfigIssue::warning(
            ConfigIssueCode::ZeroDuration {
                field: "notification.duration_ms".to_string(),
            },
            "notifications close immediately",
        );
        assert!(!w.is_error());
        assert_eq!(w.severity, Severity::Warning);
    }
}
