//! Timed notifications (toasts)

pub mod entities;

pub use entities::{
    DEFAULT_NOTIFICATION_DURATION, DismissReason, NotificationCategory, NotificationId,
    NotificationState,
};
