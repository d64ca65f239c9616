use std::sync::Arc;

use sqlx::PgPool;

use crate::memory::MemoryRepository;
use crate::postgres::{PgRecord, PgRepository};
use crate::repository::Repository;

/// Which backend the services' repositories are built on.
#[derive(Clone, Debug)]
pub enum Storage {
    /// Process-local lists; every call to [`Storage::repository`] starts empty.
    Memory,
    Postgres(PgPool),
}

impl Storage {
    pub fn repository<E: PgRecord>(&self) -> Arc<dyn Repository<E>> {
        match self {
            Storage::Memory => Arc::new(MemoryRepository::<E>::new()),
            Storage::Postgres(pool) => Arc::new(PgRepository::<E>::new(pool.clone())),
        }
    }
}
