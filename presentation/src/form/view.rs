//! Survey creation form state.
//!
//! Holds the draft being edited and the list of questions added so far. The
//! generation state lives in the controller; the rendering helpers here take
//! it as an argument.

use survey_domain::{
    DraftField, FieldUpdate, GenerationState, Question, QuestionType, SurveyDraftInput,
};

/// Label of the generation control when it can be used
pub const GENERATE_LABEL: &str = "Generate Survey";

/// Label of the generation control while a request is being processed
pub const GENERATING_LABEL: &str = "Generating...";

/// Shown in place of the question list while it is empty
pub const EMPTY_QUESTIONS_HINT: &str =
    "No questions yet. Add one manually or generate a survey with AI.";

/// The survey creation form
#[derive(Debug, Clone, Default)]
pub struct SurveyForm {
    draft: SurveyDraftInput,
    questions: Vec<Question>,
}

impl SurveyForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &SurveyDraftInput {
        &self.draft
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Write a field, clipping to its limit
    pub fn set_field(&mut self, field: DraftField, value: &str) -> FieldUpdate {
        self.draft.set_field(field, value)
    }

    /// Append an unsaved placeholder question.
    ///
    /// Ids are `q1`, `q2`, ... in insertion order.
    pub fn add_question(&mut self, question_type: QuestionType) -> &Question {
        let id = format!("q{}", self.questions.len() + 1);
        self.questions.push(Question::placeholder(id, question_type));
        &self.questions[self.questions.len() - 1]
    }

    /// Character counter, e.g. `42/100`
    pub fn counter(&self, field: DraftField) -> String {
        format!("{}/{}", self.draft.len_of(field), field.max_chars())
    }

    /// Notice shown under a field that has reached its limit
    pub fn limit_notice(&self, field: DraftField) -> Option<&'static str> {
        self.draft
            .at_limit(field)
            .then(|| field.limit_message())
    }

    /// Whether the counter should be highlighted as a warning
    pub fn counter_warns(&self, field: DraftField) -> bool {
        self.draft.near_limit(field)
    }
}

/// Label for the generation control in the given state
pub fn button_label(state: &GenerationState) -> &'static str {
    if state.is_pending() {
        GENERATING_LABEL
    } else {
        GENERATE_LABEL
    }
}
