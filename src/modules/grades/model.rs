//! Grade models, re-exported from the `reportcard-models` crate.

pub use reportcard_models::grades::*;
