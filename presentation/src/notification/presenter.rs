//! Notification presenter
//!
//! Keeps the set of notifications currently on screen. Every shown
//! notification gets its own timer task with a deadline fixed at show time;
//! when it fires it goes through the same removal path as an explicit close.
//! Removal happens under the registry lock, so exactly one of the two paths
//! wins and the other is a no-op.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use survey_application::NotificationParams;
use survey_domain::{
    DismissReason, GenerationState, NotificationCategory, NotificationId, NotificationState,
};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Lifecycle events emitted by the presenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    Shown(NotificationState),
    Dismissed {
        id: NotificationId,
        reason: DismissReason,
    },
}

struct ActiveNotification {
    state: NotificationState,
    timer: CancellationToken,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    active: BTreeMap<NotificationId, ActiveNotification>,
}

/// Shows notifications and dismisses them on expiry or on request.
///
/// Cloning is cheap; clones share the same registry. `show` and `show_for`
/// spawn a timer task and must be called from within a tokio runtime.
#[derive(Clone)]
pub struct NotificationPresenter {
    registry: Arc<Mutex<Registry>>,
    params: NotificationParams,
    events: Option<mpsc::UnboundedSender<NotificationEvent>>,
    shutdown: CancellationToken,
}

impl NotificationPresenter {
    pub fn new(params: NotificationParams) -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::default())),
            params,
            events: None,
            shutdown: CancellationToken::new(),
        }
    }

    /// Create with an event sink receiving show and dismiss events.
    pub fn with_event_sink(mut self, events: mpsc::UnboundedSender<NotificationEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Default display duration for [`show`](Self::show)
    pub fn duration(&self) -> Duration {
        self.params.duration
    }

    /// Show a notification for the configured duration.
    pub fn show(&self, message: impl Into<String>, category: NotificationCategory) -> NotificationId {
        self.show_for(message, category, self.params.duration)
    }

    /// Show a notification for an explicit duration.
    pub fn show_for(
        &self,
        message: impl Into<String>,
        category: NotificationCategory,
        duration: Duration,
    ) -> NotificationId {
        let deadline = Instant::now() + duration;
        let timer = self.shutdown.child_token();

        let id = {
            let mut registry = self.lock_registry();
            registry.next_id += 1;
            let id = NotificationId(registry.next_id);
            let state = NotificationState::new(id, message, category);
            debug!("Notification {} shown ({}): {}", id, category, state.message);
            self.emit(NotificationEvent::Shown(state.clone()));
            registry.active.insert(
                id,
                ActiveNotification {
                    state,
                    timer: timer.clone(),
                },
            );
            id
        };

        let presenter = self.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => {
                    presenter.remove(id, DismissReason::Expired);
                }
                _ = timer.cancelled() => {}
            }
        });

        id
    }

    /// Announce a finished generation: success and error states get a
    /// notification carrying the banner message, other states none.
    pub fn show_generation_state(&self, state: &GenerationState) -> Option<NotificationId> {
        if let Some(message) = state.success_message() {
            return Some(self.show(message, NotificationCategory::Success));
        }
        state
            .error_message()
            .map(|message| self.show(message, NotificationCategory::Error))
    }

    /// Close a notification.
    ///
    /// Returns `false` when it was already dismissed or has expired.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.remove(id, DismissReason::Closed)
    }

    /// Close every notification on screen, returning how many were closed.
    pub fn dismiss_all(&self) -> usize {
        let ids: Vec<NotificationId> = self.lock_registry().active.keys().copied().collect();
        ids.into_iter().filter(|id| self.dismiss(*id)).count()
    }

    /// Notifications currently on screen, oldest first
    pub fn active(&self) -> Vec<NotificationState> {
        self.lock_registry()
            .active
            .values()
            .map(|n| n.state.clone())
            .collect()
    }

    pub fn is_active(&self, id: NotificationId) -> bool {
        self.lock_registry().active.contains_key(&id)
    }

    /// Stop all pending timers. Notifications on screen stay until closed.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    fn remove(&self, id: NotificationId, reason: DismissReason) -> bool {
        let mut registry = self.lock_registry();
        let Some(entry) = registry.active.remove(&id) else {
            return false;
        };
        entry.timer.cancel();
        debug!("Notification {} dismissed ({:?})", id, reason);
        self.emit(NotificationEvent::Dismissed { id, reason });
        true
    }

    fn emit(&self, event: NotificationEvent) {
        if let Some(events) = &self.events {
            // A closed receiver only means nobody is listening any more
            let _ = events.send(event);
        }
    }

    fn lock_registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for NotificationPresenter {
    fn default() -> Self {
        Self::new(NotificationParams::default())
    }
}
