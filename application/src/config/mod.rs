//! Application-level configuration.
//!
//! - [`ApiClientConfig`] - where the backend lives and how long to wait for it
//! - [`NotificationParams`] - how long notifications stay on screen

pub mod api_client;
pub mod notification_params;

pub use api_client::{ApiClientConfig, DEFAULT_BASE_URL};
pub use notification_params::NotificationParams;
