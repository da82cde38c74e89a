//! On-screen notifications with timed auto-dismissal.

pub mod presenter;

pub use presenter::{NotificationEvent, NotificationPresenter};
