//! HTTP adapter for the survey backend.

pub mod error;
pub mod reqwest_client;

pub use error::HttpClientError;
pub use reqwest_client::ReqwestHttpClient;
