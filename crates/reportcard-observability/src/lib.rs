//! # Report Card Observability
//!
//! - [`init_tracing`]: console logging, plus daily-rolling JSON files when
//!   `LOG_DIR` is set
//! - [`logging_middleware`]: one log line per request with id, route, status
//!   and latency
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: full filter directive, takes precedence
//! - `LOG_LEVEL`: default level when `RUST_LOG` is unset (default: `info`)
//! - `LOG_DIR`: directory for `reportcard.json` rolling files

mod logging;
mod middleware;

pub use logging::init_tracing;
pub use middleware::logging_middleware;
