//! Interactive form session
//!
//! A line-oriented rendition of the survey creation form. Field edits,
//! question placeholders and generation requests are slash commands; the
//! active notifications are listed above every prompt.

use crate::form::command::FormCommand;
use crate::form::view::SurveyForm;
use crate::notification::NotificationPresenter;
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::Arc;
use survey_application::{GenerationController, SubmitOutcome};
use survey_domain::{DraftField, NotificationCategory};
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 500;

/// Interactive survey form
pub struct FormRepl {
    controller: Arc<GenerationController>,
    notifications: NotificationPresenter,
    form: SurveyForm,
    history_path: Option<PathBuf>,
}

impl FormRepl {
    pub fn new(controller: Arc<GenerationController>, notifications: NotificationPresenter) -> Self {
        Self {
            controller,
            notifications,
            form: SurveyForm::new(),
            history_path: dirs::data_dir().map(|p| p.join("survey-assist").join("history.txt")),
        }
    }

    /// Set the history file (None disables history)
    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    pub fn form(&self) -> &SurveyForm {
        &self.form
    }

    /// Run the interactive session until `/quit` or end of input
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();
        if let Some(history) = self.open_history() {
            editor = editor.with_history(Box::new(history));
        }
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("survey".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            let active = self.notifications.active();
            if !active.is_empty() {
                println!("{}", ConsoleFormatter::format_notifications(&active));
            }

            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let command = match FormCommand::parse(&line) {
                        Ok(command) => command,
                        Err(message) => {
                            println!("{}", message.yellow());
                            continue;
                        }
                    };
                    match self.execute(command).await {
                        ControlFlow::Continue(output) => {
                            if !output.is_empty() {
                                println!("{}", output);
                            }
                        }
                        ControlFlow::Break(farewell) => {
                            println!("{}", farewell);
                            break;
                        }
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        self.notifications.shutdown();
        Ok(())
    }

    /// Apply one command, returning what to print.
    ///
    /// `Break` ends the session.
    pub async fn execute(&mut self, command: FormCommand) -> ControlFlow<String, String> {
        match command {
            FormCommand::Title(text) => ControlFlow::Continue(self.edit(DraftField::Title, &text)),
            FormCommand::Description(text) => {
                ControlFlow::Continue(self.edit(DraftField::Description, &text))
            }
            FormCommand::AddQuestion(question_type) => {
                let question = self.form.add_question(question_type);
                ControlFlow::Continue(format!(
                    "Added question {} ({})",
                    question.id, question.question_type
                ))
            }
            FormCommand::Generate => ControlFlow::Continue(self.generate().await),
            FormCommand::Health => ControlFlow::Continue(self.health().await),
            FormCommand::Show => ControlFlow::Continue(self.render()),
            FormCommand::Dismiss(Some(id)) => {
                if self.notifications.dismiss(id) {
                    ControlFlow::Continue(format!("Dismissed notification {}", id))
                } else {
                    ControlFlow::Continue(format!("Notification {} is no longer shown", id))
                }
            }
            FormCommand::Dismiss(None) => {
                let count = self.notifications.dismiss_all();
                ControlFlow::Continue(format!("Dismissed {} notification(s)", count))
            }
            FormCommand::Help => ControlFlow::Continue(Self::help_text()),
            FormCommand::Quit => ControlFlow::Break("Bye!".to_string()),
        }
    }

    fn edit(&mut self, field: DraftField, text: &str) -> String {
        let update = self.form.set_field(field, text);
        let mut output = format!("{}: {}", field, self.form.counter(field));
        if update.was_clipped() {
            debug!("{} clipped by {} characters", field, update.clipped);
        }
        if let Some(notice) = self.form.limit_notice(field) {
            output.push_str(&format!("\n{}", notice.red()));
        } else if self.form.counter_warns(field) {
            output.push_str(&format!(
                "\n{}",
                format!(
                    "{} of {} characters used",
                    self.form.draft().len_of(field),
                    field.max_chars()
                )
                .yellow()
            ));
        }
        output
    }

    async fn generate(&mut self) -> String {
        let outcome = self.controller.submit(self.form.draft()).await;
        let state = self.controller.state();

        let mut output = match &outcome {
            SubmitOutcome::Busy => return "A survey is already being generated".yellow().to_string(),
            SubmitOutcome::Generated(payload) => ConsoleFormatter::format_survey(payload),
            SubmitOutcome::Rejected | SubmitOutcome::Failed(_) => String::new(),
        };

        self.notifications.show_generation_state(&state);
        if let Some(banner) = ConsoleFormatter::format_banner(&state) {
            output.push_str(&banner);
        }
        output
    }

    async fn health(&self) -> String {
        match self.controller.client().health_check().await {
            Ok(payload) => ConsoleFormatter::format_health(&payload),
            Err(failure) => {
                warn!("Health check failed: {}", failure);
                self.notifications
                    .show("Backend is not reachable", NotificationCategory::Error);
                format!("{} {}", "Health check failed:".red().bold(), failure)
            }
        }
    }

    fn render(&self) -> String {
        ConsoleFormatter::format_form(
            &self.form,
            &self.controller.state(),
            self.controller.is_submit_enabled(),
        )
    }

    fn open_history(&self) -> Option<FileBackedHistory> {
        let path = self.history_path.as_ref()?;
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => Some(history),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                None
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          survey-assist - New Survey         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", Self::help_text());
    }

    fn help_text() -> String {
        [
            "Commands:",
            "  /title TEXT         - Set the survey title (max 100 characters)",
            "  /description TEXT   - Set the description (alias /desc, max 500)",
            "  /add [TYPE]         - Add a question placeholder",
            "  /generate           - Generate a survey with AI",
            "  /health             - Check the backend",
            "  /show               - Show the form",
            "  /dismiss [ID]       - Close one or all notifications",
            "  /help               - Show this help",
            "  /quit               - Exit",
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use survey_application::{HttpClient, HttpError, HttpMethod, SurveyGenerationClient};
    use survey_domain::GenerationState;

    // ==================== Test Mocks ====================

    struct MockHttpClient {
        generate: Result<Value, HttpError>,
        health: Result<Value, HttpError>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn request(
            &self,
            method: HttpMethod,
            _path: &str,
            _body: Option<&Value>,
        ) -> Result<Value, HttpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match method {
                HttpMethod::Post => self.generate.clone(),
                HttpMethod::Get => self.health.clone(),
            }
        }
    }

    fn repl_with(
        generate: Result<Value, HttpError>,
        health: Result<Value, HttpError>,
    ) -> (FormRepl, Arc<MockHttpClient>) {
        let http = Arc::new(MockHttpClient {
            generate,
            health,
            calls: AtomicUsize::new(0),
        });
        let controller = Arc::new(GenerationController::new(SurveyGenerationClient::new(
            http.clone(),
        )));
        let repl = FormRepl::new(controller, NotificationPresenter::default())
            .with_history_path(None);
        (repl, http)
    }

    fn output(flow: ControlFlow<String, String>) -> String {
        match flow {
            ControlFlow::Continue(s) => s,
            ControlFlow::Break(s) => panic!("unexpected end of session: {}", s),
        }
    }

    // ==================== Editing ====================

    #[tokio::test(start_paused = true)]
    async fn test_edit_reports_counter_and_limit() {
        let (mut repl, _) = repl_with(Ok(json!({})), Ok(json!({})));

        let out = output(repl.execute(FormCommand::Title("Team pulse".into())).await);
        assert!(out.contains("10/100"));

        let out = output(repl.execute(FormCommand::Title("x".repeat(150))).await);
        assert!(out.contains("100/100"));
        assert!(out.contains("Title cannot exceed 100 characters."));
        assert_eq!(repl.form().draft().title().len(), 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_question() {
        let (mut repl, _) = repl_with(Ok(json!({})), Ok(json!({})));
        let out = output(
            repl.execute(FormCommand::AddQuestion(survey_domain::QuestionType::Scale))
                .await,
        );
        assert!(out.contains("q1"));
        assert_eq!(repl.form().questions().len(), 1);
    }

    // ==================== Generation ====================

    #[tokio::test(start_paused = true)]
    async fn test_generate_incomplete_draft_shows_validation_error() {
        let (mut repl, http) = repl_with(Ok(json!({})), Ok(json!({})));

        let out = output(repl.execute(FormCommand::Generate).await);
        assert!(out.contains("Please provide both title and description"));
        assert_eq!(http.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            repl.notifications.active()[0].category,
            NotificationCategory::Error
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_success_prints_payload_and_notifies() {
        let (mut repl, http) = repl_with(Ok(json!({"survey_id": 42})), Ok(json!({})));
        repl.execute(FormCommand::Title("Pulse".into())).await;
        repl.execute(FormCommand::Description("Weekly".into())).await;

        let out = output(repl.execute(FormCommand::Generate).await);
        assert!(out.contains("\"survey_id\": 42"));
        assert!(out.contains("Survey generated successfully!"));
        assert_eq!(http.calls.load(Ordering::SeqCst), 1);
        assert_eq!(repl.controller.state(), GenerationState::succeeded());

        // The success notification goes away on its own
        tokio::time::sleep(std::time::Duration::from_millis(3001)).await;
        assert!(repl.notifications.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_failure_shows_fixed_message() {
        let (mut repl, _) = repl_with(Err(HttpError::Status(503)), Ok(json!({})));
        repl.execute(FormCommand::Title("Pulse".into())).await;
        repl.execute(FormCommand::Description("Weekly".into())).await;

        let out = output(repl.execute(FormCommand::Generate).await);
        assert!(out.contains("Failed to generate survey. Please try again."));
        assert!(!out.contains("503"));
    }

    // ==================== Other commands ====================

    #[tokio::test(start_paused = true)]
    async fn test_health_failure_notifies() {
        let (mut repl, _) = repl_with(
            Ok(json!({})),
            Err(HttpError::Network("connection refused".into())),
        );
        let out = output(repl.execute(FormCommand::Health).await);
        assert!(out.contains("connection refused"));
        assert_eq!(repl.notifications.active().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_and_quit() {
        let (mut repl, _) = repl_with(Ok(json!({})), Ok(json!({})));
        repl.execute(FormCommand::Generate).await;

        let out = output(repl.execute(FormCommand::Dismiss(None)).await);
        assert!(out.contains("1 notification"));
        assert!(repl.notifications.active().is_empty());

        assert!(matches!(
            repl.execute(FormCommand::Quit).await,
            ControlFlow::Break(_)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_renders_form() {
        let (mut repl, _) = repl_with(Ok(json!({})), Ok(json!({})));
        repl.execute(FormCommand::Title("Pulse".into())).await;
        let out = output(repl.execute(FormCommand::Show).await);
        assert!(out.contains("Create New Survey"));
        assert!(out.contains("Pulse"));
        assert!(out.contains("Generate Survey"));
    }
}
