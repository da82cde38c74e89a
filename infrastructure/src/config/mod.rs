//! Configuration file loading for survey-assist
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SURVEY_API_BASE_URL` environment variable
//! 2. `--config <path>` specified file
//! 3. Project root: `./survey.toml` or `./.survey.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/survey-assist/config.toml`
//! 5. Default values
//!
//! The `--base-url` CLI flag is applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    FileApiConfig, FileConfig, FileLoggingConfig, FileNotificationConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use loader::{BASE_URL_ENV, ConfigLoader};
