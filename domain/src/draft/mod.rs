//! Survey draft: the title/description pair being edited and the request
//! built from it.

pub mod input;
pub mod request;

pub use input::{
    DESCRIPTION_MAX_CHARS, DESCRIPTION_WARN_CHARS, DraftField, FieldUpdate, SurveyDraftInput,
    TITLE_MAX_CHARS, TITLE_WARN_CHARS,
};
pub use request::GenerationRequest;
