//! Generation Controller
//!
//! The client-side state machine behind a form's "Generate Survey" control:
//!
//! 1. `submit` moves the controller to `Validating` and clears any prior banner
//! 2. An incomplete draft ends in `Failed` with the validation message; no
//!    request is issued
//! 3. A complete draft moves to `InFlight` and calls the generation client
//! 4. The outcome ends in `Succeeded` or `Failed` with a fixed message
//!
//! While a submit is being processed further submits return
//! [`SubmitOutcome::Busy`] without touching the network (single-flight per
//! controller). Every transition is reported to a [`GenerationObserver`].

use crate::ports::generation_observer::{GenerationObserver, NoGenerationObserver};
use crate::use_cases::survey_generation::SurveyGenerationClient;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};
use survey_domain::{
    GenerationFailure, GenerationRequest, GenerationResult, GenerationState, SurveyDraftInput,
};
use tracing::{debug, info};

/// Result of one submit action
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A request is already outstanding; nothing was done
    Busy,
    /// The draft was incomplete; no request was issued
    Rejected,
    /// The backend returned a survey payload
    Generated(Value),
    /// The request failed; the detail is for diagnostics only
    Failed(GenerationFailure),
}

impl SubmitOutcome {
    pub fn payload(&self) -> Option<&Value> {
        match self {
            SubmitOutcome::Generated(v) => Some(v),
            _ => None,
        }
    }
}

/// Drives one form's generation control.
pub struct GenerationController {
    client: SurveyGenerationClient,
    state: Mutex<GenerationState>,
    observer: Arc<dyn GenerationObserver>,
}

impl GenerationController {
    pub fn new(client: SurveyGenerationClient) -> Self {
        Self {
            client,
            state: Mutex::new(GenerationState::Idle),
            observer: Arc::new(NoGenerationObserver),
        }
    }

    /// Create with a state observer.
    pub fn with_observer(mut self, observer: Arc<dyn GenerationObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Snapshot of the current state
    pub fn state(&self) -> GenerationState {
        self.lock_state().clone()
    }

    /// The control is disabled while a submit is being processed
    pub fn is_submit_enabled(&self) -> bool {
        !self.lock_state().is_pending()
    }

    /// The generation client this controller submits through
    pub fn client(&self) -> &SurveyGenerationClient {
        &self.client
    }

    /// Handle a submit action for the given draft.
    pub async fn submit(&self, draft: &SurveyDraftInput) -> SubmitOutcome {
        // Validation and the InFlight claim happen under one lock so two
        // concurrent submits cannot both get past this point.
        let (request, transitions) = {
            let mut state = self.lock_state();
            if state.is_pending() {
                debug!("Submit ignored: generation already in flight");
                return SubmitOutcome::Busy;
            }

            *state = GenerationState::Validating;
            match GenerationRequest::try_from(draft) {
                Ok(request) => {
                    *state = GenerationState::InFlight;
                    (
                        Some(request),
                        [GenerationState::Validating, GenerationState::InFlight],
                    )
                }
                Err(e) => {
                    *state = GenerationState::validation_failed();
                    info!("Submit rejected: {}", e);
                    (
                        None,
                        [
                            GenerationState::Validating,
                            GenerationState::validation_failed(),
                        ],
                    )
                }
            }
        };

        for state in &transitions {
            self.observer.on_state_change(state);
        }

        let Some(request) = request else {
            return SubmitOutcome::Rejected;
        };

        match self.client.generate_survey(&request).await {
            GenerationResult::Success(payload) => {
                self.transition(GenerationState::succeeded());
                SubmitOutcome::Generated(payload)
            }
            GenerationResult::Failure(failure) => {
                debug!("Generation failed: {}", failure);
                self.transition(GenerationState::failed());
                SubmitOutcome::Failed(failure)
            }
        }
    }

    fn transition(&self, next: GenerationState) {
        *self.lock_state() = next.clone();
        self.observer.on_state_change(&next);
    }

    fn lock_state(&self) -> MutexGuard<'_, GenerationState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
