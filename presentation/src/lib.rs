//! Presentation layer for survey-assist
//!
//! This crate contains CLI definitions, the interactive survey form,
//! notifications, output formatters and progress reporters.

pub mod cli;
pub mod form;
pub mod notification;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use form::{FormCommand, FormRepl, SurveyForm};
pub use notification::{NotificationEvent, NotificationPresenter};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressMode, ProgressReporter, SimpleProgress};
