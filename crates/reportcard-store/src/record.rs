//! The [`Record`] trait every stored entity implements, and the column values
//! and unique keys it exposes to the repositories.

use chrono::{DateTime, NaiveDate, Utc};

use crate::filter::{Condition, Filter};

/// A single column value.
///
/// Repositories use it two ways: the PostgreSQL backend binds it as a query
/// parameter, the in-memory backend compares it when evaluating a [`Filter`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    OptText(Option<String>),
    Int(i32),
    OptInt(Option<i32>),
    BigInt(i64),
    BigIntArray(Vec<i64>),
    Bool(bool),
    OptFloat(Option<f64>),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    OptTimestamp(Option<DateTime<Utc>>),
}

impl Value {
    /// Equality with text compared case-insensitively.
    pub fn eq_ignore_case(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a.to_lowercase() == b.to_lowercase(),
            _ => self == other,
        }
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::BigInt(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

/// A set of columns whose combined value must be unique among active records.
///
/// Text parts compare case-insensitively, everything else exactly.
#[derive(Debug, Clone)]
pub struct UniqueKey {
    parts: Vec<(&'static str, Value)>,
    conflict: String,
}

impl UniqueKey {
    /// Starts an empty key; `conflict` is the message reported on a clash.
    pub fn new(conflict: impl Into<String>) -> Self {
        Self {
            parts: Vec::new(),
            conflict: conflict.into(),
        }
    }

    pub fn single(column: &'static str, value: impl Into<Value>, conflict: impl Into<String>) -> Self {
        Self::new(conflict).with(column, value)
    }

    pub fn with(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.parts.push((column, value.into()));
        self
    }

    pub fn parts(&self) -> &[(&'static str, Value)] {
        &self.parts
    }

    pub fn conflict_message(&self) -> &str {
        &self.conflict
    }

    /// True when both keys cover the same columns with equal values.
    pub fn same_as(&self, other: &UniqueKey) -> bool {
        self.parts.len() == other.parts.len()
            && self
                .parts
                .iter()
                .zip(&other.parts)
                .all(|((ca, va), (cb, vb))| ca == cb && va.eq_ignore_case(vb))
    }

    /// Filter selecting active records that hold this key.
    pub fn filter(&self) -> Filter {
        self.parts
            .iter()
            .fold(Filter::active(), |filter, (column, value)| match value {
                Value::Text(text) | Value::OptText(Some(text)) => {
                    filter.condition(Condition::EqualsIgnoreCase(column, text.clone()))
                }
                other => filter.condition(Condition::Equals(column, other.clone())),
            })
    }
}

/// An entity kept by a [`Repository`](crate::Repository).
///
/// Ids are assigned by the repository on insert and never change afterwards.
/// `status == true` means active; `false` means soft-deleted.
pub trait Record: Clone + Send + Sync + 'static {
    /// Human-readable entity name used in messages, e.g. `"Role"`.
    const ENTITY: &'static str;

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
    fn set_created_at(&mut self, at: DateTime<Utc>);
    fn set_updated_at(&mut self, at: DateTime<Utc>);

    /// Every persisted column except `id`, in a fixed order.
    fn columns(&self) -> Vec<(&'static str, Value)>;

    /// Keys that must stay unique among active records.
    fn unique_keys(&self) -> Vec<UniqueKey> {
        Vec::new()
    }
}

/// Implements the bookkeeping half of [`Record`] for structs with `id`,
/// `status`, `created_at` and `updated_at` fields.
#[macro_export]
macro_rules! record_lifecycle {
    () => {
        fn id(&self) -> i64 {
            self.id
        }

        fn set_id(&mut self, id: i64) {
            self.id = id;
        }

        fn is_active(&self) -> bool {
            self.status
        }

        fn set_active(&mut self, active: bool) {
            self.status = active;
        }

        fn set_created_at(&mut self, at: ::chrono::DateTime<::chrono::Utc>) {
            self.created_at = at;
        }

        fn set_updated_at(&mut self, at: ::chrono::DateTime<::chrono::Utc>) {
            self.updated_at = at;
        }
    };
}
