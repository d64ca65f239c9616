//! Role domain models and DTOs.

use chrono::{DateTime, Utc};
use reportcard_store::{PgRecord, Record, UniqueKey, Value, record_lifecycle};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    #[schema(example = "admin")]
    pub name: String,
    pub description: Option<String>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleDto {
    #[schema(example = "admin")]
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `true`.
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleDto {
    pub name: Option<String>,
    pub description: Option<String>,
    /// `false` removes the role.
    pub status: Option<bool>,
}

impl From<CreateRoleDto> for Role {
    fn from(dto: CreateRoleDto) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: dto.name,
            description: dto.description,
            status: dto.status.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }
}

impl UpdateRoleDto {
    pub fn apply(self, role: &mut Role) {
        if let Some(name) = self.name {
            role.name = name;
        }
        if let Some(description) = self.description {
            role.description = Some(description);
        }
        if let Some(status) = self.status {
            role.status = status;
        }
    }
}

impl Record for Role {
    const ENTITY: &'static str = "Role";

    record_lifecycle!();

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", Value::Text(self.name.clone())),
            ("description", Value::OptText(self.description.clone())),
            ("status", Value::Bool(self.status)),
            ("created_at", Value::Timestamp(self.created_at)),
            ("updated_at", Value::Timestamp(self.updated_at)),
        ]
    }

    fn unique_keys(&self) -> Vec<UniqueKey> {
        vec![UniqueKey::single(
            "name",
            self.name.as_str(),
            format!("Role with name '{}' already exists", self.name),
        )]
    }
}

impl PgRecord for Role {
    const TABLE: &'static str = "roles";
    const COLUMNS: &'static str = "id, name, description, status, created_at, updated_at";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dto_defaults_to_active() {
        let dto: CreateRoleDto = serde_json::from_str(r#"{"name":"admin"}"#).unwrap();
        let role = Role::from(dto);
        assert!(role.status);
        assert_eq!(role.description, None);
    }

    #[test]
    fn test_update_only_touches_given_fields() {
        let mut role = Role::from(CreateRoleDto {
            name: "admin".into(),
            description: Some("Administrator".into()),
            status: None,
        });
        UpdateRoleDto {
            status: Some(false),
            ..Default::default()
        }
        .apply(&mut role);
        assert_eq!(role.name, "admin");
        assert_eq!(role.description.as_deref(), Some("Administrator"));
        assert!(!role.status);
    }

    #[test]
    fn test_serializes_camel_case() {
        let role = Role::from(CreateRoleDto {
            name: "admin".into(),
            description: None,
            status: None,
        });
        let json = serde_json::to_value(&role).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
