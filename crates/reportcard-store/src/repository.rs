use async_trait::async_trait;
use thiserror::Error;

use crate::filter::Filter;
use crate::record::Record;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} with ID {id} is not stored")]
    Missing { entity: &'static str, id: i64 },
    /// A unique index rejected the write; another process won the race.
    #[error("{entity} violates a uniqueness constraint")]
    UniqueViolation { entity: &'static str },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage for one entity type.
///
/// Repositories know nothing about uniqueness, references or soft deletes;
/// [`Collection`](crate::Collection) layers those rules on top. Rows are never
/// removed.
#[async_trait]
pub trait Repository<E: Record>: Send + Sync {
    /// Stores a new record, assigning the next id. Returns the stored copy.
    async fn insert(&self, record: E) -> Result<E, StoreError>;

    /// Overwrites the record with the same id.
    async fn update(&self, record: E) -> Result<E, StoreError>;

    /// Looks up a record by id regardless of status.
    async fn get(&self, id: i64) -> Result<Option<E>, StoreError>;

    /// Records matching the filter, in insertion order.
    async fn find(&self, filter: &Filter) -> Result<Vec<E>, StoreError>;
}
