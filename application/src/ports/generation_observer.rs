//! Generation state observer port
//!
//! Lets the presentation layer follow the controller's state machine
//! (disable the submit control, spin a progress indicator, render banners).

use survey_domain::GenerationState;

/// Callback for generation state transitions
///
/// Called after each transition, outside the controller's state lock.
pub trait GenerationObserver: Send + Sync {
    fn on_state_change(&self, state: &GenerationState);
}

/// No-op observer for when nothing renders progress
pub struct NoGenerationObserver;

impl GenerationObserver for NoGenerationObserver {
    fn on_state_change(&self, _state: &GenerationState) {}
}
