//! # Report Card Core
//!
//! Core types, errors, and utilities shared by every Report Card crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Password hashing and verification
//! - [`response`]: Small response bodies shared across modules
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use reportcard_core::{AppError, MessageResponse};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Role with ID 7 not found"));
//! let ok = MessageResponse::new("Role with ID 7 has been removed");
//! ```

pub mod errors;
pub mod password;
pub mod response;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind};
pub use password::{hash_password, verify_password};
pub use response::{ErrorResponse, MessageResponse};
