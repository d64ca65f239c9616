//! Enrollment models and DTOs.
//!
//! This module re-exports enrollment models from the `reportcard-models` crate.

pub use reportcard_models::student_subjects::*;
