//! # Report Card Store
//!
//! Persistence for the Report Card API.
//!
//! - [`Record`]: what an entity exposes to storage (columns and unique keys)
//! - [`Repository`]: insert/update/get/find over one entity type, with an
//!   in-memory ([`MemoryRepository`]) and a PostgreSQL ([`PgRepository`])
//!   implementation
//! - [`Collection`]: the soft-delete CRUD rules every entity service shares
//!
//! # Example
//!
//! ```ignore
//! use reportcard_store::{Collection, Storage};
//!
//! let roles: Collection<Role> = Collection::new(Storage::Memory.repository());
//! let admin = roles.create(role).await?;
//! roles.soft_delete(admin.id).await?;
//! ```

pub mod collection;
pub mod filter;
pub mod memory;
pub mod postgres;
pub mod record;
pub mod repository;
pub mod storage;

pub use collection::Collection;
pub use filter::{Condition, Filter};
pub use memory::MemoryRepository;
pub use postgres::{PgRecord, PgRepository};
pub use record::{Record, UniqueKey, Value};
pub use repository::{Repository, StoreError};
pub use storage::Storage;
