//! Progress reporting for survey generation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use survey_application::{GenerationObserver, NoGenerationObserver};
use survey_domain::GenerationState;

/// How generation progress is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    Off,
    Spinner,
    Plain,
}

impl ProgressMode {
    /// Spinner on a terminal, plain lines otherwise, nothing with `--quiet`
    pub fn select(quiet: bool, stderr_is_terminal: bool) -> Self {
        match (quiet, stderr_is_terminal) {
            (true, _) => ProgressMode::Off,
            (false, true) => ProgressMode::Spinner,
            (false, false) => ProgressMode::Plain,
        }
    }

    pub fn observer(self) -> Arc<dyn GenerationObserver> {
        match self {
            ProgressMode::Off => Arc::new(NoGenerationObserver),
            ProgressMode::Spinner => Arc::new(ProgressReporter::new()),
            ProgressMode::Plain => Arc::new(SimpleProgress),
        }
    }
}

/// Shows a spinner while a generation request is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish(&self, message: String) {
        if let Some(pb) = self.lock_spinner().take() {
            pb.finish_with_message(message);
        }
    }

    fn lock_spinner(&self) -> std::sync::MutexGuard<'_, Option<ProgressBar>> {
        self.spinner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationObserver for ProgressReporter {
    fn on_state_change(&self, state: &GenerationState) {
        if matches!(state, GenerationState::InFlight) {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.set_message("Generating survey...");
            pb.enable_steady_tick(Duration::from_millis(100));
            *self.lock_spinner() = Some(pb);
        } else if state.is_terminal() {
            if state.success_message().is_some() {
                self.finish(format!("{} Survey generated", "v".green()));
            } else {
                self.finish(format!("{} Generation failed", "x".red()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Used when stderr is not a terminal, where a spinner would only
/// produce control sequences.
pub struct SimpleProgress;

impl SimpleProgress {
    /// Line printed for a state, if any
    pub fn line(state: &GenerationState) -> Option<String> {
        match state {
            GenerationState::InFlight => Some(format!("{} Generating survey...", "->".cyan())),
            GenerationState::Succeeded(_) => Some(format!("  {} done", "v".green())),
            GenerationState::Failed(_) => Some(format!("  {} failed", "x".red())),
            GenerationState::Idle | GenerationState::Validating => None,
        }
    }
}

impl GenerationObserver for SimpleProgress {
    fn on_state_change(&self, state: &GenerationState) {
        if let Some(line) = Self::line(state) {
            eprintln!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selection() {
        assert_eq!(ProgressMode::select(true, true), ProgressMode::Off);
        assert_eq!(ProgressMode::select(true, false), ProgressMode::Off);
        assert_eq!(ProgressMode::select(false, true), ProgressMode::Spinner);
        assert_eq!(ProgressMode::select(false, false), ProgressMode::Plain);
    }

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_state_change(&GenerationState::Validating);
        assert!(reporter.lock_spinner().is_none());

        reporter.on_state_change(&GenerationState::InFlight);
        assert!(reporter.lock_spinner().is_some());

        reporter.on_state_change(&GenerationState::failed());
        assert!(reporter.lock_spinner().is_none());
    }

    #[test]
    fn test_terminal_state_without_spinner_is_noop() {
        let reporter = ProgressReporter::new();
        reporter.on_state_change(&GenerationState::succeeded());
        assert!(reporter.lock_spinner().is_none());
    }

    #[test]
    fn test_simple_progress_lines() {
        assert!(SimpleProgress::line(&GenerationState::Idle).is_none());
        assert!(SimpleProgress::line(&GenerationState::Validating).is_none());
        assert!(
            SimpleProgress::line(&GenerationState::InFlight)
                .unwrap()
                .contains("Generating survey...")
        );
        assert!(SimpleProgress::line(&GenerationState::succeeded()).unwrap().contains("done"));
        assert!(SimpleProgress::line(&GenerationState::failed()).unwrap().contains("failed"));

        // Printing goes through the same lines
        SimpleProgress.on_state_change(&GenerationState::InFlight);
    }
}
