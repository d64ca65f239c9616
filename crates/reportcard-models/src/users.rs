//! Plain user accounts.
//!
//! [`UserRecord`] is what gets stored, password hash included. Every response
//! goes through [`User`], which has no password field at all.

use chrono::{DateTime, Utc};
use reportcard_store::{PgRecord, Record, UniqueKey, Value, record_lifecycle};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::roles::Role;

#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: i64,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    pub role_id: i64,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user together with its role, when that role is still active.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserWithRole {
    #[serde(flatten)]
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(length(min = 2, max = 100))]
    #[schema(example = "John Doe")]
    pub name: String,
    #[validate(email)]
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    #[validate(length(min = 6))]
    #[schema(example = "strongPassword123", min_length = 6)]
    pub password: String,
    #[schema(example = 1)]
    pub role_id: i64,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 6))]
    pub password: Option<String>,
    pub role_id: Option<i64>,
    pub status: Option<bool>,
}

impl UserRecord {
    /// Builds a record from the DTO with `password_hash` already computed.
    pub fn new(dto: CreateUserDto, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: dto.name,
            email: dto.email,
            password: password_hash,
            role_id: dto.role_id,
            status: dto.status.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }
}

impl UpdateUserDto {
    /// Merges the DTO; `password_hash` replaces the stored hash when given.
    pub fn apply(self, user: &mut UserRecord, password_hash: Option<String>) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(hash) = password_hash {
            user.password = hash;
        }
        if let Some(role_id) = self.role_id {
            user.role_id = role_id;
        }
        if let Some(status) = self.status {
            user.status = status;
        }
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            role_id: record.role_id,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl Record for UserRecord {
    const ENTITY: &'static str = "User";

    record_lifecycle!();

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", Value::Text(self.name.clone())),
            ("email", Value::Text(self.email.clone())),
            ("password", Value::Text(self.password.clone())),
            ("role_id", Value::BigInt(self.role_id)),
            ("status", Value::Bool(self.status)),
            ("created_at", Value::Timestamp(self.created_at)),
            ("updated_at", Value::Timestamp(self.updated_at)),
        ]
    }

    fn unique_keys(&self) -> Vec<UniqueKey> {
        vec![UniqueKey::single(
            "email",
            self.email.as_str(),
            format!("User with email {} already exists", self.email),
        )]
    }
}

impl PgRecord for UserRecord {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str =
        "id, name, email, password, role_id, status, created_at, updated_at";
}
