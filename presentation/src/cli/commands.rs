//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for survey-assist
#[derive(Parser, Debug)]
#[command(name = "survey-assist")]
#[command(author, version, about = "Draft surveys and generate them with AI")]
#[command(long_about = r#"
survey-assist drafts a survey title and description and asks the survey
backend to generate a complete survey from them.

Configuration files are loaded from (in priority order):
1. --base-url <URL>          Backend URL override
2. SURVEY_API_BASE_URL       Environment override for the backend URL
3. --config <path>           Explicit config file
4. ./survey.toml             Project-level config
5. ~/.config/survey-assist/config.toml   Global config

Example:
  survey-assist generate -t "Employee engagement" -d "Quarterly pulse survey"
  survey-assist health
  survey-assist form
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Backend base URL (overrides configuration)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate a survey from a title and description
    Generate {
        /// Survey title (clipped to 100 characters)
        #[arg(short, long)]
        title: String,

        /// Survey description (clipped to 500 characters)
        #[arg(short, long)]
        description: String,

        /// Print only the raw JSON payload
        #[arg(long)]
        json: bool,
    },

    /// Check backend health
    Health,

    /// Interactive survey form (default)
    Form,
}

impl Cli {
    /// The requested command, defaulting to the interactive form
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_form() {
        let cli = Cli::try_parse_from(["survey-assist"]).unwrap();
        assert_eq!(cli.resolved_command(), Command::Form);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::try_parse_from([
            "survey-assist",
            "generate",
            "-t",
            "Pulse",
            "-d",
            "Weekly check-in",
            "--json",
            "--base-url",
            "http://example.com",
            "-vv",
        ])
        .unwrap();
        assert_eq!(
            cli.resolved_command(),
            Command::Generate {
                title: "Pulse".to_string(),
                description: "Weekly check-in".to_string(),
                json: true,
            }
        );
        assert_eq!(cli.base_url.as_deref(), Some("http://example.com"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_generate_requires_both_fields() {
        assert!(Cli::try_parse_from(["survey-assist", "generate", "-t", "Pulse"]).is_err());
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        <Cli as CommandFactory>::command().debug_assert();
    }
}
