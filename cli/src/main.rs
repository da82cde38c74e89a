//! CLI entrypoint for survey-assist
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use survey_application::{GenerationController, SubmitOutcome, SurveyGenerationClient};
use survey_domain::{DraftField, OutputFormat, SurveyDraftInput};
use survey_infrastructure::{ConfigLoader, FileConfig, JsonlDiagnosticsLogger, ReqwestHttpClient};
use survey_presentation::{
    Cli, Command, ConsoleFormatter, FormRepl, NotificationPresenter, ProgressMode,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_tracing(cli.verbose, cli.log_file.as_deref());

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting survey-assist");

    let config = load_config(&cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let http = Arc::new(ReqwestHttpClient::new(config.api.to_api_client_config())?);
    info!("Using backend {}", http.config().base_url);

    let mut client = SurveyGenerationClient::new(http);
    if let Some(path) = config.logging.diagnostics_path()
        && let Some(logger) = JsonlDiagnosticsLogger::new(&path)
    {
        info!("Diagnostics log: {}", logger.path().display());
        client = client.with_diagnostics_logger(Arc::new(logger));
    }

    let observer = ProgressMode::select(cli.quiet, std::io::stderr().is_terminal()).observer();
    let controller = Arc::new(GenerationController::new(client).with_observer(observer));
    let notifications = NotificationPresenter::new(config.notification.to_params());
    let json_output = config.output.format == Some(OutputFormat::Json);

    match cli.resolved_command() {
        Command::Generate {
            title,
            description,
            json,
        } => {
            run_generate(
                &controller,
                &notifications,
                &title,
                &description,
                json || json_output,
            )
            .await
        }
        Command::Health => run_health(&controller, json_output).await,
        Command::Form => {
            FormRepl::new(controller, notifications).run().await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr unless a log file is given.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return None;
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "survey-assist.log".into());
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Some(guard)
}

/// Load configuration files, apply the `--base-url` override and validate.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    config.apply_base_url_override(cli.base_url.as_deref());

    let issues = config.validate();
    if !issues.is_empty() {
        eprintln!("{}", ConsoleFormatter::format_config_issues(&issues));
    }
    if issues.iter().any(|issue| issue.is_error()) {
        bail!("Invalid configuration");
    }

    Ok(config)
}

async fn run_generate(
    controller: &GenerationController,
    notifications: &NotificationPresenter,
    title: &str,
    description: &str,
    json: bool,
) -> Result<ExitCode> {
    let mut draft = SurveyDraftInput::new();
    for (field, value) in [
        (DraftField::Title, title),
        (DraftField::Description, description),
    ] {
        let update = draft.set_field(field, value);
        if update.was_clipped() {
            warn!("{} clipped by {} characters", field, update.clipped);
            eprintln!("{} {}", "warning:".yellow().bold(), field.limit_message());
        }
    }

    let outcome = controller.submit(&draft).await;
    let state = controller.state();

    let succeeded = match &outcome {
        SubmitOutcome::Generated(payload) if json => {
            println!("{}", ConsoleFormatter::format_json(payload));
            return Ok(ExitCode::SUCCESS);
        }
        SubmitOutcome::Generated(payload) => {
            println!("{}", ConsoleFormatter::format_survey(payload));
            true
        }
        SubmitOutcome::Rejected | SubmitOutcome::Failed(_) | SubmitOutcome::Busy => false,
    };

    notifications.show_generation_state(&state);
    let active = notifications.active();
    if !active.is_empty() {
        if succeeded {
            println!("{}", ConsoleFormatter::format_notifications(&active));
        } else {
            eprintln!("{}", ConsoleFormatter::format_notifications(&active));
        }
    }
    notifications.shutdown();

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run_health(controller: &GenerationController, json: bool) -> Result<ExitCode> {
    match controller.client().health_check().await {
        Ok(payload) if json => {
            println!("{}", ConsoleFormatter::format_json(&payload));
            Ok(ExitCode::SUCCESS)
        }
        Ok(payload) => {
            print!("{}", ConsoleFormatter::format_health(&payload));
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            eprintln!("{} {}", "Health check failed:".red().bold(), failure);
            Ok(ExitCode::FAILURE)
        }
    }
}
