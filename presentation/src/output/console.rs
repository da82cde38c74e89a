//! Console output formatter for the survey form and backend responses

use crate::form::view::{EMPTY_QUESTIONS_HINT, SurveyForm, button_label};
use colored::{ColoredString, Colorize};
use serde_json::Value;
use survey_domain::{
    ConfigIssue, DraftField, GeneratedSurvey, GenerationState, HealthStatus, NotificationCategory,
    NotificationState, core::string::truncate,
};

/// Formats form state, notifications and backend payloads for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render the whole form: fields with counters, question list,
    /// generation control and banner.
    pub fn format_form(form: &SurveyForm, state: &GenerationState, submit_enabled: bool) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Create New Survey"));
        output.push('\n');

        for field in [DraftField::Title, DraftField::Description] {
            output.push_str(&Self::format_field(form, field));
        }

        output.push_str(&Self::section_header("Questions"));
        if form.questions().is_empty() {
            output.push_str(&format!("  {}\n", EMPTY_QUESTIONS_HINT.dimmed()));
        } else {
            for (i, question) in form.questions().iter().enumerate() {
                let title = if question.title.is_empty() {
                    "(untitled)".dimmed().to_string()
                } else {
                    question.title.clone()
                };
                output.push_str(&format!(
                    "  {}. [{}] {}{}\n",
                    i + 1,
                    question.question_type.to_string().yellow(),
                    title,
                    if question.saved { "" } else { " (unsaved)" }
                ));
            }
        }

        output.push('\n');
        let label = format!("[ {} ]", button_label(state));
        if submit_enabled {
            output.push_str(&format!("{}\n", label.green().bold()));
        } else {
            output.push_str(&format!("{}\n", label.dimmed()));
        }

        if let Some(banner) = Self::format_banner(state) {
            output.push_str(&format!("\n{}\n", banner));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Success or error banner for a finished generation, if any
    pub fn format_banner(state: &GenerationState) -> Option<String> {
        if let Some(message) = state.success_message() {
            return Some(format!("{} {}", "v".green().bold(), message.green()));
        }
        state
            .error_message()
            .map(|message| format!("{} {}", "x".red().bold(), message.red()))
    }

    /// One notification, styled by category
    pub fn format_notification(notification: &NotificationState) -> String {
        format!(
            "{} {} {}",
            Self::paint(
                &format!("[{}]", notification.category.label()),
                notification.category
            )
            .bold(),
            notification.message,
            notification.id.to_string().dimmed()
        )
    }

    /// Notifications currently on screen, one per line
    pub fn format_notifications(notifications: &[NotificationState]) -> String {
        notifications
            .iter()
            .map(Self::format_notification)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Generated survey payload: a summary when it matches the survey
    /// schema, followed by the raw payload.
    pub fn format_survey(payload: &Value) -> String {
        let mut output = String::new();

        if let Ok(survey) = GeneratedSurvey::from_payload(payload) {
            output.push_str(&Self::section_header("Generated Survey"));
            output.push_str(&format!("{} {}\n", "Title:".cyan().bold(), survey.title));
            output.push_str(&format!(
                "{} {}\n",
                "Description:".cyan().bold(),
                truncate(&survey.description, 120)
            ));
            output.push_str(&format!(
                "{} {}\n",
                "Questions:".cyan().bold(),
                survey.question_count()
            ));
            for (i, question) in survey.questions.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. [{}] {}\n",
                    i + 1,
                    question.question_type.to_string().yellow(),
                    question.title
                ));
                for option in &question.options {
                    output.push_str(&format!("       - {}\n", option.text));
                }
            }
        }

        output.push_str(&Self::section_header("Payload"));
        output.push_str(&Self::format_json(payload));
        output.push('\n');
        output
    }

    /// Health payload: a typed summary when it matches the health schema,
    /// otherwise the raw payload.
    pub fn format_health(payload: &Value) -> String {
        let Ok(health) = HealthStatus::from_payload(payload) else {
            return Self::format_json(payload);
        };

        let status = if health.is_healthy() {
            health.status.green().bold()
        } else {
            health.status.red().bold()
        };
        let mut output = format!("{} {}\n", "Backend:".cyan().bold(), status);
        output.push_str(&format!(
            "{} {}\n",
            "OpenAI configured:".cyan().bold(),
            if health.openai_configured {
                "yes".green()
            } else {
                "no".red()
            }
        ));
        if let Some(db) = &health.database_status {
            output.push_str(&format!("{} {}\n", "Database:".cyan().bold(), db));
        }
        if !health.can_generate() {
            output.push_str(&format!(
                "{}\n",
                "Survey generation is currently unavailable.".yellow()
            ));
        }
        output
    }

    /// Pretty JSON
    pub fn format_json(value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Configuration problems, one per line
    pub fn format_config_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| {
                if issue.is_error() {
                    format!("{} {}", "error:".red().bold(), issue.message)
                } else {
                    format!("{} {}", "warning:".yellow().bold(), issue.message)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_field(form: &SurveyForm, field: DraftField) -> String {
        let value = form.draft().field(field);
        let counter = form.counter(field);
        let counter = if form.counter_warns(field) {
            counter.yellow()
        } else {
            counter.dimmed()
        };

        let mut output = format!(
            "{} {}\n  {}\n",
            format!("{}:", Self::field_heading(field)).cyan().bold(),
            counter,
            if value.is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                value.to_string()
            }
        );
        if let Some(notice) = form.limit_notice(field) {
            output.push_str(&format!("  {}\n", notice.red()));
        }
        output
    }

    fn field_heading(field: DraftField) -> &'static str {
        match field {
            DraftField::Title => "Survey Title",
            DraftField::Description => "Survey Description",
        }
    }

    fn paint(text: &str, category: NotificationCategory) -> ColoredString {
        match category {
            NotificationCategory::Success => text.green(),
            NotificationCategory::Error => text.red(),
            NotificationCategory::Info => text.blue(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use survey_domain::{NotificationId, QuestionType};

    #[test]
    fn test_form_shows_counters_and_placeholder() {
        let mut form = SurveyForm::new();
        form.set_field(DraftField::Title, "Team pulse");

        let output = ConsoleFormatter::format_form(&form, &GenerationState::Idle, true);
        assert!(output.contains("Team pulse"));
        assert!(output.contains("10/100"));
        assert!(output.contains("0/500"));
        assert!(output.contains(EMPTY_QUESTIONS_HINT));
        assert!(output.contains("Generate Survey"));
    }

    #[test]
    fn test_form_in_flight_and_banners() {
        let mut form = SurveyForm::new();
        form.add_question(QuestionType::Scale);

        let output = ConsoleFormatter::format_form(&form, &GenerationState::InFlight, false);
        assert!(output.contains("Generating..."));
        assert!(output.contains("scale"));
        assert!(!output.contains(EMPTY_QUESTIONS_HINT));

        let output = ConsoleFormatter::format_form(&form, &GenerationState::failed(), true);
        assert!(output.contains("Failed to generate survey. Please try again."));
    }

    #[test]
    fn test_banner_only_for_terminal_states() {
        assert!(ConsoleFormatter::format_banner(&GenerationState::Idle).is_none());
        assert!(ConsoleFormatter::format_banner(&GenerationState::InFlight).is_none());
        let banner = ConsoleFormatter::format_banner(&GenerationState::succeeded()).unwrap();
        assert!(banner.contains("Survey generated successfully!"));
    }

    #[test]
    fn test_limit_notice_rendered() {
        let mut form = SurveyForm::new();
        form.set_field(DraftField::Description, &"d".repeat(600));
        let output = ConsoleFormatter::format_form(&form, &GenerationState::Idle, true);
        assert!(output.contains("Description cannot exceed 500 characters."));
        assert!(output.contains("500/500"));
    }

    #[test]
    fn test_notification_has_label_and_message() {
        let n = NotificationState::new(NotificationId(3), "Saved", NotificationCategory::Info);
        let output = ConsoleFormatter::format_notification(&n);
        assert!(output.contains("[Info]"));
        assert!(output.contains("Saved"));
        assert!(output.contains("#3"));
    }

    #[test]
    fn test_survey_summary_when_schema_matches() {
        let payload = json!({
            "title": "Engagement",
            "description": "Quarterly pulse",
            "questions": [
                {"id": "q1", "type": "singleChoice", "title": "How are you?", "saved": false,
                 "options": [{"id": "o1", "text": "Good"}, {"id": "o2", "text": "Bad"}]}
            ]
        });
        let output = ConsoleFormatter::format_survey(&payload);
        assert!(output.contains("Generated Survey"));
        assert!(output.contains("How are you?"));
        assert!(output.contains("- Good"));
        assert!(output.contains("Payload"));
    }

    #[test]
    fn test_survey_raw_payload_only_otherwise() {
        let output = ConsoleFormatter::format_survey(&json!({"anything": 1}));
        assert!(!output.contains("Generated Survey"));
        assert!(output.contains("\"anything\": 1"));
    }

    #[test]
    fn test_health_summary() {
        let output = ConsoleFormatter::format_health(
            &json!({"status": "healthy", "openai_configured": false, "database_status": "connected"}),
        );
        assert!(output.contains("healthy"));
        assert!(output.contains("connected"));
        assert!(output.contains("unavailable"));

        let raw = ConsoleFormatter::format_health(&json!({"ok": true}));
        assert!(raw.contains("\"ok\": true"));
    }
}
