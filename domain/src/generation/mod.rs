//! Survey generation: the result of a backend call and the client-side state
//! machine driving the submit control.

pub mod result;
pub mod state;

pub use result::{FailureKind, GenerationFailure, GenerationResult};
pub use state::{FAILURE_MESSAGE, GenerationState, SUCCESS_MESSAGE, VALIDATION_MESSAGE};
