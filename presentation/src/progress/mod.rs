//! Progress indicators for survey generation

pub mod reporter;
