//! Use cases (application services)

pub mod generation_controller;
pub mod survey_generation;
