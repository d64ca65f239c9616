//! Write-time foreign key checks.
//!
//! A referencing service looks the id up through the referenced service's
//! `lookup` and hands the result here. A miss blames the request body, so it
//! is a `ReferenceInvalid` (400) rather than a `NotFound` (404).

use anyhow::anyhow;
use reportcard_core::AppError;

pub fn require_active<T>(entity: &str, id: i64, found: Option<T>) -> Result<T, AppError> {
    found.ok_or_else(|| {
        AppError::invalid_reference(anyhow!("{} with ID {} does not exist", entity, id))
    })
}
