//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw `[logging]` configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving diagnostics events (disabled when unset)
    pub diagnostics_file: Option<String>,
}

impl FileLoggingConfig {
    /// Diagnostics file path with a leading `~/` expanded to the home directory
    pub fn diagnostics_path(&self) -> Option<PathBuf> {
        let raw = self.diagnostics_file.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_is_disabled() {
        assert!(FileLoggingConfig::default().diagnostics_path().is_none());
        let config = FileLoggingConfig {
            diagnostics_file: Some("  ".to_string()),
        };
        assert!(config.diagnostics_path().is_none());
    }

    #[test]
    fn test_plain_path() {
        let config = FileLoggingConfig {
            diagnostics_file: Some("/tmp/diag.jsonl".to_string()),
        };
        assert_eq!(
            config.diagnostics_path(),
            Some(PathBuf::from("/tmp/diag.jsonl"))
        );
    }

    #[test]
    fn test_home_expansion() {
        let config = FileLoggingConfig {
            diagnostics_file: Some("~/survey/diag.jsonl".to_string()),
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                config.diagnostics_path(),
                Some(home.join("survey/diag.jsonl"))
            );
        }
    }
}
