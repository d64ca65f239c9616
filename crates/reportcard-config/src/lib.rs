//! # Report Card Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen address and startup behaviour
//! - [`storage`]: Storage backend selection and database settings
//!
//! # Example
//!
//! ```ignore
//! use reportcard_config::{CorsConfig, ServerConfig, StorageConfig};
//!
//! let cors = CorsConfig::from_env();
//! let server = ServerConfig::from_env();
//! let storage = StorageConfig::from_env();
//! ```

pub mod cors;
pub mod server;
pub mod storage;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use server::ServerConfig;
pub use storage::{StorageBackend, StorageConfig};
