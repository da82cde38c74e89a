//! Survey creation form: state, commands and the interactive session.

pub mod command;
pub mod repl;
pub mod view;

pub use command::FormCommand;
pub use repl::FormRepl;
pub use view::{GENERATE_LABEL, GENERATING_LABEL, SurveyForm, button_label};
