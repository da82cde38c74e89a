//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod diagnostics_logger;
pub mod generation_observer;
pub mod http_client;
