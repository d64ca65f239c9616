use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::filter::Filter;
use crate::record::Record;
use crate::repository::{Repository, StoreError};

struct MemoryTable<E> {
    rows: Vec<E>,
    next_id: i64,
}

/// Ordered in-process list with an auto-incrementing id counter.
///
/// The counter lives as long as the repository; ids are never reused.
pub struct MemoryRepository<E> {
    table: RwLock<MemoryTable<E>>,
}

impl<E> MemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(MemoryTable {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl<E> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Record> Repository<E> for MemoryRepository<E> {
    async fn insert(&self, mut record: E) -> Result<E, StoreError> {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        record.set_id(table.next_id);
        table.next_id += 1;
        table.rows.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record: E) -> Result<E, StoreError> {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let slot = table
            .rows
            .iter_mut()
            .find(|row| row.id() == record.id())
            .ok_or(StoreError::Missing {
                entity: E::ENTITY,
                id: record.id(),
            })?;
        *slot = record.clone();
        Ok(record)
    }

    async fn get(&self, id: i64) -> Result<Option<E>, StoreError> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        Ok(table.rows.iter().find(|row| row.id() == id).cloned())
    }

    async fn find(&self, filter: &Filter) -> Result<Vec<E>, StoreError> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        Ok(table
            .rows
            .iter()
            .filter(|row| filter.matches(*row))
            .cloned()
            .collect())
    }
}
