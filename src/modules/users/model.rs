//! User models, re-exported from the `reportcard-models` crate.

pub use reportcard_models::users::*;
