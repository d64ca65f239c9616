//! Student data models and DTOs.
//!
//! This module re-exports student models from the `reportcard-models` crate.

pub use reportcard_models::students::*;
