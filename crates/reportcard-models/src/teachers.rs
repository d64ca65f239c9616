//! Teacher models and DTOs.

use chrono::{DateTime, Utc};
use reportcard_store::{PgRecord, Record, UniqueKey, Value, record_lifecycle};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, FromRow)]
pub struct TeacherRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: i64,
    pub degree: String,
    pub department: String,
    pub years_of_experience: i32,
    pub license_number: String,
    pub phone_number: String,
    pub subject_ids: Vec<i64>,
    pub grade_ids: Vec<i64>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Teacher as returned by the API. Never carries the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: i64,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john.doe@school.edu")]
    pub email: String,
    pub role_id: i64,
    #[schema(example = "Master in Mathematics Education")]
    pub degree: String,
    #[schema(example = "Mathematics Department")]
    pub department: String,
    pub years_of_experience: i32,
    #[schema(example = "TEACH-2023-001")]
    pub license_number: String,
    pub phone_number: String,
    pub subject_ids: Vec<i64>,
    pub grade_ids: Vec<i64>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeacherDto {
    #[validate(length(min = 2, max = 100))]
    #[schema(example = "John Doe")]
    pub name: String,
    #[validate(email)]
    #[schema(example = "john.doe@school.edu")]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[schema(example = 2)]
    pub role_id: i64,
    #[validate(length(min = 1))]
    pub degree: String,
    #[validate(length(min = 1))]
    pub department: String,
    #[validate(range(min = 0))]
    pub years_of_experience: i32,
    #[validate(length(min = 1))]
    pub license_number: String,
    #[validate(length(min = 1))]
    pub phone_number: String,
    #[serde(default)]
    pub subject_ids: Vec<i64>,
    #[serde(default)]
    pub grade_ids: Vec<i64>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeacherDto {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 6))]
    pub password: Option<String>,
    pub role_id: Option<i64>,
    #[validate(length(min = 1))]
    pub degree: Option<String>,
    #[validate(length(min = 1))]
    pub department: Option<String>,
    #[validate(range(min = 0))]
    pub years_of_experience: Option<i32>,
    #[validate(length(min = 1))]
    pub license_number: Option<String>,
    #[validate(length(min = 1))]
    pub phone_number: Option<String>,
    pub subject_ids: Option<Vec<i64>>,
    pub grade_ids: Option<Vec<i64>>,
    pub status: Option<bool>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DepartmentQuery {
    pub department: String,
}

impl TeacherRecord {
    pub fn new(dto: CreateTeacherDto, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: dto.name,
            email: dto.email,
            password: password_hash,
            role_id: dto.role_id,
            degree: dto.degree,
            department: dto.department,
            years_of_experience: dto.years_of_experience,
            license_number: dto.license_number,
            phone_number: dto.phone_number,
            subject_ids: dto.subject_ids,
            grade_ids: dto.grade_ids,
            status: dto.status.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }
}

impl UpdateTeacherDto {
    pub fn apply(self, teacher: &mut TeacherRecord, password_hash: Option<String>) {
        if let Some(name) = self.name {
            teacher.name = name;
        }
        if let Some(email) = self.email {
            teacher.email = email;
        }
        if let Some(hash) = password_hash {
            teacher.password = hash;
        }
        if let Some(role_id) = self.role_id {
            teacher.role_id = role_id;
        }
        if let Some(degree) = self.degree {
            teacher.degree = degree;
        }
        if let Some(department) = self.department {
            teacher.department = department;
        }
        if let Some(years) = self.years_of_experience {
            teacher.years_of_experience = years;
        }
        if let Some(license_number) = self.license_number {
            teacher.license_number = license_number;
        }
        if let Some(phone_number) = self.phone_number {
            teacher.phone_number = phone_number;
        }
        if let Some(subject_ids) = self.subject_ids {
            teacher.subject_ids = subject_ids;
        }
        if let Some(grade_ids) = self.grade_ids {
            teacher.grade_ids = grade_ids;
        }
        if let Some(status) = self.status {
            teacher.status = status;
        }
    }
}

impl From<TeacherRecord> for Teacher {
    fn from(record: TeacherRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            role_id: record.role_id,
            degree: record.degree,
            department: record.department,
            years_of_experience: record.years_of_experience,
            license_number: record.license_number,
            phone_number: record.phone_number,
            subject_ids: record.subject_ids,
            grade_ids: record.grade_ids,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl Record for TeacherRecord {
    const ENTITY: &'static str = "Teacher";

    record_lifecycle!();

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", Value::Text(self.name.clone())),
            ("email", Value::Text(self.email.clone())),
            ("password", Value::Text(self.password.clone())),
            ("role_id", Value::BigInt(self.role_id)),
            ("degree", Value::Text(self.degree.clone())),
            ("department", Value::Text(self.department.clone())),
            ("years_of_experience", Value::Int(self.years_of_experience)),
            ("license_number", Value::Text(self.license_number.clone())),
            ("phone_number", Value::Text(self.phone_number.clone())),
            ("subject_ids", Value::BigIntArray(self.subject_ids.clone())),
            ("grade_ids", Value::BigIntArray(self.grade_ids.clone())),
            ("status", Value::Bool(self.status)),
            ("created_at", Value::Timestamp(self.created_at)),
            ("updated_at", Value::Timestamp(self.updated_at)),
        ]
    }

    fn unique_keys(&self) -> Vec<UniqueKey> {
        vec![
            UniqueKey::single(
                "email",
                self.email.as_str(),
                format!("Teacher with email {} already exists", self.email),
            ),
            UniqueKey::single(
                "license_number",
                self.license_number.as_str(),
                format!(
                    "Teacher with license number {} already exists",
                    self.license_number
                ),
            ),
        ]
    }
}

impl PgRecord for TeacherRecord {
    const TABLE: &'static str = "teachers";
    const COLUMNS: &'static str = "id, name, email, password, role_id, degree, department, \
        years_of_experience, license_number, phone_number, subject_ids, grade_ids, status, \
        created_at, updated_at";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_lists_default_to_empty() {
        let dto: CreateTeacherDto = serde_json::from_value(serde_json::json!({
            "name": "John Doe",
            "email": "john.doe@school.edu",
            "password": "securePassword123",
            "roleId": 2,
            "degree": "Master in Mathematics Education",
            "department": "Mathematics Department",
            "yearsOfExperience": 8,
            "licenseNumber": "TEACH-2023-001",
            "phoneNumber": "+1234567890"
        }))
        .unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.subject_ids.is_empty());
        assert!(dto.grade_ids.is_empty());
    }

    #[test]
    fn test_negative_experience_is_rejected() {
        let dto = UpdateTeacherDto {
            years_of_experience: Some(-1),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
