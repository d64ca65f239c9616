//! Subject models and DTOs.

use chrono::{DateTime, Utc};
use reportcard_store::{PgRecord, Record, UniqueKey, Value, record_lifecycle};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: i64,
    #[schema(example = "Matemáticas")]
    pub subject_name: String,
    pub description: Option<String>,
    #[schema(example = 5)]
    pub hours_per_week: Option<i32>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubjectDto {
    #[schema(example = "Matemáticas")]
    pub subject_name: String,
    pub description: Option<String>,
    pub hours_per_week: Option<i32>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubjectDto {
    pub subject_name: Option<String>,
    pub description: Option<String>,
    pub hours_per_week: Option<i32>,
    pub status: Option<bool>,
}

impl From<CreateSubjectDto> for Subject {
    fn from(dto: CreateSubjectDto) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            subject_name: dto.subject_name,
            description: dto.description,
            hours_per_week: dto.hours_per_week,
            status: dto.status.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }
}

impl UpdateSubjectDto {
    pub fn apply(self, subject: &mut Subject) {
        if let Some(subject_name) = self.subject_name {
            subject.subject_name = subject_name;
        }
        if let Some(description) = self.description {
            subject.description = Some(description);
        }
        if let Some(hours) = self.hours_per_week {
            subject.hours_per_week = Some(hours);
        }
        if let Some(status) = self.status {
            subject.status = status;
        }
    }
}

impl Record for Subject {
    const ENTITY: &'static str = "Subject";

    record_lifecycle!();

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("subject_name", Value::Text(self.subject_name.clone())),
            ("description", Value::OptText(self.description.clone())),
            ("hours_per_week", Value::OptInt(self.hours_per_week)),
            ("status", Value::Bool(self.status)),
            ("created_at", Value::Timestamp(self.created_at)),
            ("updated_at", Value::Timestamp(self.updated_at)),
        ]
    }

    fn unique_keys(&self) -> Vec<UniqueKey> {
        vec![UniqueKey::single(
            "subject_name",
            self.subject_name.as_str(),
            format!("Subject with name '{}' already exists", self.subject_name),
        )]
    }
}

impl PgRecord for Subject {
    const TABLE: &'static str = "subjects";
    const COLUMNS: &'static str =
        "id, subject_name, description, hours_per_week, status, created_at, updated_at";
}
