//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`string`] - character-aware string helpers used by the draft limits

pub mod error;
pub mod string;
