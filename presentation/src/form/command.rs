//! Slash commands understood by the interactive form

use survey_domain::{NotificationId, QuestionType};

/// One parsed line of form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Title(String),
    Description(String),
    AddQuestion(QuestionType),
    Generate,
    Health,
    Show,
    /// Close one notification, or all of them
    Dismiss(Option<NotificationId>),
    Help,
    Quit,
}

impl FormCommand {
    /// Parse a line of input.
    ///
    /// Field text is taken verbatim after the command name and its separating
    /// space, so `/title` alone clears the title.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_start();
        let Some(rest) = line.strip_prefix('/') else {
            return Err(format!(
                "Not a command: {}. Type /help for available commands",
                line.trim_end()
            ));
        };

        let (name, arg) = match rest.split_once(' ') {
            Some((name, arg)) => (name, arg),
            None => (rest.trim_end(), ""),
        };

        match name {
            "title" | "t" => Ok(FormCommand::Title(arg.to_string())),
            "description" | "desc" | "d" => Ok(FormCommand::Description(arg.to_string())),
            "add" | "a" => {
                let arg = arg.trim();
                if arg.is_empty() {
                    Ok(FormCommand::AddQuestion(QuestionType::default()))
                } else {
                    arg.parse().map(FormCommand::AddQuestion).map_err(|_| {
                        format!(
                            "Unknown question type: {}. Available: {}",
                            arg,
                            QuestionType::all()
                                .iter()
                                .map(|t| t.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        )
                    })
                }
            }
            "generate" | "g" => Ok(FormCommand::Generate),
            "health" => Ok(FormCommand::Health),
            "show" | "s" => Ok(FormCommand::Show),
            "dismiss" => {
                let arg = arg.trim().trim_start_matches('#');
                if arg.is_empty() {
                    Ok(FormCommand::Dismiss(None))
                } else {
                    arg.parse::<u64>()
                        .map(|n| FormCommand::Dismiss(Some(NotificationId(n))))
                        .map_err(|_| format!("Invalid notification id: {}", arg))
                }
            }
            "help" | "h" | "?" => Ok(FormCommand::Help),
            "quit" | "exit" | "q" => Ok(FormCommand::Quit),
            _ => Err(format!(
                "Unknown command: /{}. Type /help for available commands",
                name
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_commands_keep_text_verbatim() {
        assert_eq!(
            FormCommand::parse("/title  Team pulse "),
            Ok(FormCommand::Title(" Team pulse ".to_string()))
        );
        assert_eq!(
            FormCommand::parse("/desc Weekly check-in"),
            Ok(FormCommand::Description("Weekly check-in".to_string()))
        );
        assert_eq!(
            FormCommand::parse("/title"),
            Ok(FormCommand::Title(String::new()))
        );
    }

    #[test]
    fn test_add_question() {
        assert_eq!(
            FormCommand::parse("/add"),
            Ok(FormCommand::AddQuestion(QuestionType::MultipleChoice))
        );
        assert_eq!(
            FormCommand::parse("/add short-answer"),
            Ok(FormCommand::AddQuestion(QuestionType::ShortAnswer))
        );
        let err = FormCommand::parse("/add essay").unwrap_err();
        assert!(err.contains("multipleChoice"));
    }

    #[test]
    fn test_dismiss() {
        assert_eq!(FormCommand::parse("/dismiss"), Ok(FormCommand::Dismiss(None)));
        assert_eq!(
            FormCommand::parse("/dismiss #2"),
            Ok(FormCommand::Dismiss(Some(NotificationId(2))))
        );
        assert!(FormCommand::parse("/dismiss two").is_err());
    }

    #[test]
    fn test_simple_commands_and_aliases() {
        assert_eq!(FormCommand::parse("/generate"), Ok(FormCommand::Generate));
        assert_eq!(FormCommand::parse("/g"), Ok(FormCommand::Generate));
        assert_eq!(FormCommand::parse("/health"), Ok(FormCommand::Health));
        assert_eq!(FormCommand::parse("/show"), Ok(FormCommand::Show));
        assert_eq!(FormCommand::parse("/?"), Ok(FormCommand::Help));
        assert_eq!(FormCommand::parse("/exit"), Ok(FormCommand::Quit));
    }

    #[test]
    fn test_rejects_unknown_input() {
        assert!(FormCommand::parse("/frobnicate").is_err());
        assert!(FormCommand::parse("hello").is_err());
    }
}
