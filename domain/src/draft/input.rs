//! Survey draft input (Entity)

use crate::core::string::{char_len, clip_chars};
use serde::{Deserialize, Serialize};

/// Maximum title length in characters
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum description length in characters
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Title length above which the counter is highlighted
pub const TITLE_WARN_CHARS: usize = 90;

/// Description length above which the counter is highlighted
pub const DESCRIPTION_WARN_CHARS: usize = 490;

/// One of the two editable draft fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Title,
    Description,
}

impl DraftField {
    /// Maximum number of characters the field accepts
    pub fn max_chars(&self) -> usize {
        match self {
            DraftField::Title => TITLE_MAX_CHARS,
            DraftField::Description => DESCRIPTION_MAX_CHARS,
        }
    }

    /// Length above which the field is considered close to its limit
    pub fn warn_chars(&self) -> usize {
        match self {
            DraftField::Title => TITLE_WARN_CHARS,
            DraftField::Description => DESCRIPTION_WARN_CHARS,
        }
    }

    /// Notice shown once the field has reached its limit
    pub fn limit_message(&self) -> &'static str {
        match self {
            DraftField::Title => "Title cannot exceed 100 characters.",
            DraftField::Description => "Description cannot exceed 500 characters.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Description => "description",
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of writing a value into a draft field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUpdate {
    /// Length after the write (characters)
    pub len: usize,
    /// Number of characters dropped because the input exceeded the limit
    pub clipped: usize,
}

impl FieldUpdate {
    pub fn was_clipped(&self) -> bool {
        self.clipped > 0
    }
}

/// The in-progress, unsaved survey title/description pair.
///
/// Length bounds are enforced at input time: values longer than the limit
/// are clipped, so a draft never holds an over-long field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyDraftInput {
    title: String,
    description: String,
}

impl SurveyDraftInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a draft from raw values, clipping each field to its limit
    pub fn from_raw(title: impl AsRef<str>, description: impl AsRef<str>) -> Self {
        let mut draft = Self::new();
        draft.set_title(title);
        draft.set_description(description);
        draft
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
        }
    }

    pub fn set_title(&mut self, value: impl AsRef<str>) -> FieldUpdate {
        self.set_field(DraftField::Title, value)
    }

    pub fn set_description(&mut self, value: impl AsRef<str>) -> FieldUpdate {
        self.set_field(DraftField::Description, value)
    }

    /// Replace a field's value, clipping it to the field's limit
    pub fn set_field(&mut self, field: DraftField, value: impl AsRef<str>) -> FieldUpdate {
        let value = value.as_ref();
        let kept = clip_chars(value, field.max_chars());
        let len = char_len(kept);
        let clipped = char_len(value) - len;

        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Description => &mut self.description,
        };
        *slot = kept.to_string();

        FieldUpdate { len, clipped }
    }

    /// Current length of a field in characters
    pub fn len_of(&self, field: DraftField) -> usize {
        char_len(self.field(field))
    }

    /// Whether the field has reached its limit
    pub fn at_limit(&self, field: DraftField) -> bool {
        self.len_of(field) >= field.max_chars()
    }

    /// Whether the field is close to its limit
    pub fn near_limit(&self, field: DraftField) -> bool {
        self.len_of(field) > field.warn_chars()
    }

    /// Fields that are still empty, in display order
    pub fn missing_fields(&self) -> Vec<DraftField> {
        [DraftField::Title, DraftField::Description]
            .into_iter()
            .filter(|f| self.field(*f).is_empty())
            .collect()
    }

    /// A draft is complete when both fields are non-empty
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_empty() {
        let draft = SurveyDraftInput::new();
        assert_eq!(draft.len_of(DraftField::Title), 0);
        assert_eq!(draft.len_of(DraftField::Description), 0);
        assert!(!draft.is_complete());
        assert_eq!(
            draft.missing_fields(),
            vec![DraftField::Title, DraftField::Description]
        );
    }

    #[test]
    fn test_title_clipped_at_limit() {
        let mut draft = SurveyDraftInput::new();
        let update = draft.set_title("x".repeat(130));
        assert_eq!(update.len, TITLE_MAX_CHARS);
        assert_eq!(update.clipped, 30);
        assert!(update.was_clipped());
        assert_eq!(draft.len_of(DraftField::Title), TITLE_MAX_CHARS);
        assert!(draft.at_limit(DraftField::Title));
    }

    #[test]
    fn test_description_clipped_at_limit() {
        let mut draft = SurveyDraftInput::new();
        let update = draft.set_description("y".repeat(501));
        assert_eq!(update.len, DESCRIPTION_MAX_CHARS);
        assert_eq!(update.clipped, 1);
        assert!(draft.at_limit(DraftField::Description));
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        let mut draft = SurveyDraftInput::new();
        let update = draft.set_title("あ".repeat(100));
        assert!(!update.was_clipped());
        assert_eq!(draft.len_of(DraftField::Title), 100);
        assert_eq!(draft.title().len(), 300);
    }

    #[test]
    fn test_counters_follow_edits() {
        let mut draft = SurveyDraftInput::new();
        draft.set_title("Customer feedback");
        assert_eq!(draft.len_of(DraftField::Title), 17);
        draft.set_title("CSAT");
        assert_eq!(draft.len_of(DraftField::Title), 4);
        draft.set_title("");
        assert_eq!(draft.len_of(DraftField::Title), 0);
    }

    #[test]
    fn test_near_limit_thresholds() {
        let mut draft = SurveyDraftInput::new();
        draft.set_title("a".repeat(90));
        assert!(!draft.near_limit(DraftField::Title));
        draft.set_title("a".repeat(91));
        assert!(draft.near_limit(DraftField::Title));
        assert!(!draft.at_limit(DraftField::Title));

        draft.set_description("b".repeat(491));
        assert!(draft.near_limit(DraftField::Description));
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let draft = SurveyDraftInput::from_raw(" ", "desc");
        assert!(draft.is_complete());
    }

    #[test]
    fn test_missing_fields() {
        let draft = SurveyDraftInput::from_raw("Title", "");
        assert_eq!(draft.missing_fields(), vec![DraftField::Description]);
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_limit_messages() {
        assert_eq!(
            DraftField::Title.limit_message(),
            "Title cannot exceed 100 characters."
        );
        assert_eq!(
            DraftField::Description.limit_message(),
            "Description cannot exceed 500 characters."
        );
    }
}
