use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::filter::{Condition, Filter};
use crate::record::{Record, Value};
use crate::repository::{Repository, StoreError};

/// A [`Record`] with a table of its own.
pub trait PgRecord: Record + for<'r> FromRow<'r, PgRow> + Unpin {
    const TABLE: &'static str;
    /// Select list matching the `FromRow` implementation, `id` included.
    const COLUMNS: &'static str;
}

pub struct PgRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PgRepository<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

fn write_error<E: Record>(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::UniqueViolation { entity: E::ENTITY }
        }
        _ => StoreError::Database(err),
    }
}

fn push_value(builder: &mut QueryBuilder<'_, Postgres>, value: Value) {
    match value {
        Value::Text(v) => builder.push_bind(v),
        Value::OptText(v) => builder.push_bind(v),
        Value::Int(v) => builder.push_bind(v),
        Value::OptInt(v) => builder.push_bind(v),
        Value::BigInt(v) => builder.push_bind(v),
        Value::BigIntArray(v) => builder.push_bind(v),
        Value::Bool(v) => builder.push_bind(v),
        Value::OptFloat(v) => builder.push_bind(v),
        Value::Date(v) => builder.push_bind(v),
        Value::Timestamp(v) => builder.push_bind(v),
        Value::OptTimestamp(v) => builder.push_bind(v),
    };
}

#[async_trait]
impl<E: PgRecord> Repository<E> for PgRepository<E> {
    async fn insert(&self, record: E) -> Result<E, StoreError> {
        let columns = record.columns();
        let names = columns
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");

        let mut builder =
            QueryBuilder::<Postgres>::new(format!("INSERT INTO {} ({}) VALUES (", E::TABLE, names));
        for (i, (_, value)) in columns.into_iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            push_value(&mut builder, value);
        }
        builder.push(format!(") RETURNING {}", E::COLUMNS));

        builder
            .build_query_as::<E>()
            .fetch_one(&self.pool)
            .await
            .map_err(write_error::<E>)
    }

    async fn update(&self, record: E) -> Result<E, StoreError> {
        let mut builder = QueryBuilder::<Postgres>::new(format!("UPDATE {} SET ", E::TABLE));
        for (i, (name, value)) in record.columns().into_iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            builder.push(format!("{name} = "));
            push_value(&mut builder, value);
        }
        builder.push(" WHERE id = ").push_bind(record.id());
        builder.push(format!(" RETURNING {}", E::COLUMNS));

        builder
            .build_query_as::<E>()
            .fetch_optional(&self.pool)
            .await
            .map_err(write_error::<E>)?
            .ok_or(StoreError::Missing {
                entity: E::ENTITY,
                id: record.id(),
            })
    }

    async fn get(&self, id: i64) -> Result<Option<E>, StoreError> {
        let row = sqlx::query_as::<_, E>(&format!(
            "SELECT {} FROM {} WHERE id = $1",
            E::COLUMNS,
            E::TABLE
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find(&self, filter: &Filter) -> Result<Vec<E>, StoreError> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM {} WHERE TRUE",
            E::COLUMNS,
            E::TABLE
        ));

        if let Some(status) = filter.status {
            builder.push(" AND status = ").push_bind(status);
        }

        for condition in filter.conditions.iter().cloned() {
            match condition {
                Condition::Equals(column, value) => {
                    builder.push(format!(" AND {column} = "));
                    push_value(&mut builder, value);
                }
                Condition::EqualsIgnoreCase(column, text) => {
                    builder.push(format!(" AND LOWER({column}) = LOWER("));
                    builder.push_bind(text).push(")");
                }
                Condition::Contains(column, needle) => {
                    builder.push(" AND ").push_bind(needle);
                    builder.push(format!(" = ANY({column})"));
                }
                Condition::NotId(id) => {
                    builder.push(" AND id <> ").push_bind(id);
                }
            }
        }

        builder.push(" ORDER BY id");

        let rows = builder.build_query_as::<E>().fetch_all(&self.pool).await?;
        Ok(rows)
    }
}
