//! Storage backend selection.
//!
//! # Environment Variables
//!
//! - `STORAGE_BACKEND`: `memory` (default) or `postgres`
//! - `DATABASE_URL`: PostgreSQL connection string, required for `postgres`
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
//! - `BCRYPT_COST`: work factor for password hashing (default: 12)

use std::env;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// Process-lifetime lists, lost on restart.
    #[default]
    Memory,
    /// PostgreSQL via `DATABASE_URL`.
    Postgres,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::Postgres => write!(f, "postgres"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            "postgres" | "postgresql" | "pg" => Ok(StorageBackend::Postgres),
            other => Err(format!("Unknown storage backend '{}'", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub bcrypt_cost: u32,
}

pub const DEFAULT_BCRYPT_COST: u32 = 12;

impl StorageConfig {
    pub fn from_env() -> Self {
        let backend = env::var("STORAGE_BACKEND")
            .ok()
            .and_then(|b| b.parse().ok())
            .unwrap_or_default();
        let database_url = env::var("DATABASE_URL").ok().filter(|u| !u.is_empty());
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|n| n.parse().ok())
            .unwrap_or(5);
        let bcrypt_cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|n| n.parse().ok())
            .unwrap_or(DEFAULT_BCRYPT_COST);

        Self {
            backend,
            database_url,
            max_connections,
            bcrypt_cost,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            database_url: None,
            max_connections: 5,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}
