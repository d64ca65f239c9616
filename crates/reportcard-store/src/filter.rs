use crate::record::{Record, Value};

/// One predicate over a record's columns.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Equals(&'static str, Value),
    EqualsIgnoreCase(&'static str, String),
    /// An integer-array column contains the value.
    Contains(&'static str, i64),
    /// Skips the record with this id.
    NotId(i64),
}

/// Conjunction of conditions plus an optional status restriction.
///
/// Backends return matches in insertion (id) order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub status: Option<bool>,
    pub conditions: Vec<Condition>,
}

impl Filter {
    /// Every record, whatever its status.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn active() -> Self {
        Self::by_status(Some(true))
    }

    pub fn by_status(status: Option<bool>) -> Self {
        Self {
            status,
            conditions: Vec::new(),
        }
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn eq(self, column: &'static str, value: impl Into<Value>) -> Self {
        self.condition(Condition::Equals(column, value.into()))
    }

    pub fn eq_ignore_case(self, column: &'static str, value: impl Into<String>) -> Self {
        self.condition(Condition::EqualsIgnoreCase(column, value.into()))
    }

    pub fn contains(self, column: &'static str, value: i64) -> Self {
        self.condition(Condition::Contains(column, value))
    }

    pub fn excluding(self, id: i64) -> Self {
        self.condition(Condition::NotId(id))
    }

    /// Evaluates the filter against a record held in memory.
    pub fn matches<E: Record>(&self, record: &E) -> bool {
        if self.status.is_some_and(|status| status != record.is_active()) {
            return false;
        }

        let columns = record.columns();
        let column = |name: &str| {
            columns
                .iter()
                .find(|(column, _)| *column == name)
                .map(|(_, value)| value)
        };

        self.conditions.iter().all(|condition| match condition {
            Condition::NotId(id) => record.id() != *id,
            Condition::Equals(name, expected) => column(name).is_some_and(|v| v == expected),
            Condition::EqualsIgnoreCase(name, expected) => {
                let expected = expected.to_lowercase();
                column(name).is_some_and(|v| match v {
                    Value::Text(text) | Value::OptText(Some(text)) => {
                        text.to_lowercase() == expected
                    }
                    _ => false,
                })
            }
            Condition::Contains(name, needle) => column(name)
                .is_some_and(|v| matches!(v, Value::BigIntArray(items) if items.contains(needle))),
        })
    }
}
