//! Grade (school year level) models and DTOs.

use chrono::{DateTime, Utc};
use reportcard_store::{PgRecord, Record, UniqueKey, Value, record_lifecycle};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: i64,
    #[schema(example = "1° Secundaria")]
    pub level: String,
    pub description: Option<String>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGradeDto {
    #[schema(example = "1° Secundaria")]
    pub level: String,
    pub description: Option<String>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGradeDto {
    pub level: Option<String>,
    pub description: Option<String>,
    pub status: Option<bool>,
}

impl From<CreateGradeDto> for Grade {
    fn from(dto: CreateGradeDto) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            level: dto.level,
            description: dto.description,
            status: dto.status.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }
}

impl UpdateGradeDto {
    pub fn apply(self, grade: &mut Grade) {
        if let Some(level) = self.level {
            grade.level = level;
        }
        if let Some(description) = self.description {
            grade.description = Some(description);
        }
        if let Some(status) = self.status {
            grade.status = status;
        }
    }
}

impl Record for Grade {
    const ENTITY: &'static str = "Grade";

    record_lifecycle!();

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("level", Value::Text(self.level.clone())),
            ("description", Value::OptText(self.description.clone())),
            ("status", Value::Bool(self.status)),
            ("created_at", Value::Timestamp(self.created_at)),
            ("updated_at", Value::Timestamp(self.updated_at)),
        ]
    }

    fn unique_keys(&self) -> Vec<UniqueKey> {
        vec![UniqueKey::single(
            "level",
            self.level.as_str(),
            format!("Grade with level '{}' already exists", self.level),
        )]
    }
}

impl PgRecord for Grade {
    const TABLE: &'static str = "grades";
    const COLUMNS: &'static str = "id, level, description, status, created_at, updated_at";
}
