//! Soft-delete CRUD over one entity type.
//!
//! Every entity service in the API owns a [`Collection`] and delegates the
//! generic rules to it:
//!
//! - uniqueness of each [`UniqueKey`] among active records, text compared
//!   case-insensitively
//! - soft deletion (`status = false`) instead of removal
//! - `NotFound` for ids that do not resolve to an active record
//!
//! Referential checks are left to the services, which call [`Collection::lookup`]
//! on the referenced collection before calling `create` or `update` here.

use std::sync::Arc;

use anyhow::anyhow;
use chrono::Utc;
use reportcard_core::{AppError, MessageResponse};
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use crate::filter::Filter;
use crate::record::{Record, UniqueKey};
use crate::repository::{Repository, StoreError};

pub struct Collection<E: Record> {
    repository: Arc<dyn Repository<E>>,
    // Serializes check-then-write sequences within this process.
    writes: Mutex<()>,
}

impl<E: Record> Collection<E> {
    pub fn new(repository: Arc<dyn Repository<E>>) -> Self {
        Self {
            repository,
            writes: Mutex::new(()),
        }
    }

    /// Stores a new record after checking every unique key.
    ///
    /// The record's id and timestamps are overwritten.
    #[instrument(skip_all, fields(entity = E::ENTITY))]
    pub async fn create(&self, mut record: E) -> Result<E, AppError> {
        let _guard = self.writes.lock().await;

        for key in record.unique_keys() {
            self.ensure_unique(&key, None).await?;
        }

        let now = Utc::now();
        record.set_created_at(now);
        record.set_updated_at(now);

        let record = self
            .repository
            .insert(record)
            .await
            .map_err(write_error)?;
        info!(id = record.id(), "{} created", E::ENTITY);
        Ok(record)
    }

    /// Applies `apply` to the active record with `id` and stores the result.
    ///
    /// Only keys whose value changed are re-checked, and never against the
    /// record itself, so rewriting a field to its current value succeeds.
    #[instrument(skip(self, apply), fields(entity = E::ENTITY))]
    pub async fn update<F>(&self, id: i64, apply: F) -> Result<E, AppError>
    where
        F: FnOnce(&mut E) + Send,
    {
        let _guard = self.writes.lock().await;

        let current = self.find_by_id(id).await?;
        let before = current.unique_keys();

        let mut updated = current;
        apply(&mut updated);
        updated.set_id(id);

        for key in updated.unique_keys() {
            if before.iter().any(|old| old.same_as(&key)) {
                continue;
            }
            self.ensure_unique(&key, Some(id)).await?;
        }

        updated.set_updated_at(Utc::now());
        let updated = self
            .repository
            .update(updated)
            .await
            .map_err(write_error)?;
        info!(id, "{} updated", E::ENTITY);
        Ok(updated)
    }

    /// Flips `status` to false. Terminal: nothing reactivates a record.
    #[instrument(skip(self), fields(entity = E::ENTITY))]
    pub async fn soft_delete(&self, id: i64) -> Result<MessageResponse, AppError> {
        let _guard = self.writes.lock().await;

        let mut record = self.find_by_id(id).await?;
        record.set_active(false);
        record.set_updated_at(Utc::now());
        self.repository.update(record).await?;

        info!(id, "{} soft-deleted", E::ENTITY);
        Ok(MessageResponse::new(format!(
            "{} with ID {} has been removed",
            E::ENTITY,
            id
        )))
    }

    pub async fn find_all_active(&self) -> Result<Vec<E>, AppError> {
        self.find_where(Filter::active()).await
    }

    /// `None` returns every record whatever its status.
    pub async fn find_all_by_status(&self, status: Option<bool>) -> Result<Vec<E>, AppError> {
        self.find_where(Filter::by_status(status)).await
    }

    pub async fn find_where(&self, filter: Filter) -> Result<Vec<E>, AppError> {
        Ok(self.repository.find(&filter).await?)
    }

    /// The active record with `id`, if any.
    pub async fn lookup(&self, id: i64) -> Result<Option<E>, AppError> {
        Ok(self.lookup_any(id).await?.filter(|record| record.is_active()))
    }

    /// Like [`lookup`](Self::lookup) but ignores status.
    pub async fn lookup_any(&self, id: i64) -> Result<Option<E>, AppError> {
        Ok(self.repository.get(id).await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<E, AppError> {
        self.lookup(id).await?.ok_or_else(|| {
            AppError::not_found(anyhow!("{} with ID {} not found", E::ENTITY, id))
        })
    }

    async fn ensure_unique(&self, key: &UniqueKey, except: Option<i64>) -> Result<(), AppError> {
        let filter = match except {
            Some(id) => key.filter().excluding(id),
            None => key.filter(),
        };

        if self.repository.find(&filter).await?.is_empty() {
            return Ok(());
        }

        warn!(entity = E::ENTITY, "{}", key.conflict_message());
        Err(AppError::conflict(anyhow!(key.conflict_message().to_string())))
    }
}

fn write_error(err: StoreError) -> AppError {
    match err {
        StoreError::UniqueViolation { .. } => AppError::conflict(err),
        other => AppError::database(other),
    }
}
