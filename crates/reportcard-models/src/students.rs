//! Student models and DTOs.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use reportcard_store::{PgRecord, Record, UniqueKey, Value, record_lifecycle};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, FromRow)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: i64,
    pub enrollment_number: String,
    pub date_of_birth: NaiveDate,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub guardian_email: String,
    pub address: String,
    pub grade_id: i64,
    pub subject_ids: Vec<i64>,
    pub enrollment_year: i32,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    #[schema(example = "Maria Garcia")]
    pub name: String,
    #[schema(example = "maria.garcia@student.edu")]
    pub email: String,
    pub role_id: i64,
    #[schema(example = "2025-001")]
    pub enrollment_number: String,
    #[schema(example = "2010-05-15")]
    pub date_of_birth: NaiveDate,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub guardian_email: String,
    pub address: String,
    pub grade_id: i64,
    pub subject_ids: Vec<i64>,
    #[schema(example = 2025)]
    pub enrollment_year: i32,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    #[validate(length(min = 2, max = 100))]
    #[schema(example = "Maria Garcia")]
    pub name: String,
    #[validate(email)]
    #[schema(example = "maria.garcia@student.edu")]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[schema(example = 3)]
    pub role_id: i64,
    #[validate(length(min = 1))]
    #[schema(example = "2025-001")]
    pub enrollment_number: String,
    #[schema(example = "2010-05-15")]
    pub date_of_birth: NaiveDate,
    #[validate(length(min = 1))]
    pub guardian_name: String,
    #[validate(length(min = 1))]
    pub guardian_phone: String,
    #[validate(email)]
    pub guardian_email: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[schema(example = 1)]
    pub grade_id: i64,
    #[serde(default)]
    pub subject_ids: Vec<i64>,
    /// Defaults to the current year.
    pub enrollment_year: Option<i32>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 6))]
    pub password: Option<String>,
    pub role_id: Option<i64>,
    #[validate(length(min = 1))]
    pub enrollment_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(min = 1))]
    pub guardian_name: Option<String>,
    #[validate(length(min = 1))]
    pub guardian_phone: Option<String>,
    #[validate(email)]
    pub guardian_email: Option<String>,
    #[validate(length(min = 1))]
    pub address: Option<String>,
    pub grade_id: Option<i64>,
    pub subject_ids: Option<Vec<i64>>,
    pub enrollment_year: Option<i32>,
    pub status: Option<bool>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EnrollmentYearQuery {
    pub year: i32,
}

impl StudentRecord {
    pub fn new(dto: CreateStudentDto, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: dto.name,
            email: dto.email,
            password: password_hash,
            role_id: dto.role_id,
            enrollment_number: dto.enrollment_number,
            date_of_birth: dto.date_of_birth,
            guardian_name: dto.guardian_name,
            guardian_phone: dto.guardian_phone,
            guardian_email: dto.guardian_email,
            address: dto.address,
            grade_id: dto.grade_id,
            subject_ids: dto.subject_ids,
            enrollment_year: dto.enrollment_year.unwrap_or_else(|| now.year()),
            status: dto.status.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }
}

impl UpdateStudentDto {
    pub fn apply(self, student: &mut StudentRecord, password_hash: Option<String>) {
        if let Some(name) = self.name {
            student.name = name;
        }
        if let Some(email) = self.email {
            student.email = email;
        }
        if let Some(hash) = password_hash {
            student.password = hash;
        }
        if let Some(role_id) = self.role_id {
            student.role_id = role_id;
        }
        if let Some(enrollment_number) = self.enrollment_number {
            student.enrollment_number = enrollment_number;
        }
        if let Some(date_of_birth) = self.date_of_birth {
            student.date_of_birth = date_of_birth;
        }
        if let Some(guardian_name) = self.guardian_name {
            student.guardian_name = guardian_name;
        }
        if let Some(guardian_phone) = self.guardian_phone {
            student.guardian_phone = guardian_phone;
        }
        if let Some(guardian_email) = self.guardian_email {
            student.guardian_email = guardian_email;
        }
        if let Some(address) = self.address {
            student.address = address;
        }
        if let Some(grade_id) = self.grade_id {
            student.grade_id = grade_id;
        }
        if let Some(subject_ids) = self.subject_ids {
            student.subject_ids = subject_ids;
        }
        if let Some(year) = self.enrollment_year {
            student.enrollment_year = year;
        }
        if let Some(status) = self.status {
            student.status = status;
        }
    }
}

impl From<StudentRecord> for Student {
    fn from(record: StudentRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            role_id: record.role_id,
            enrollment_number: record.enrollment_number,
            date_of_birth: record.date_of_birth,
            guardian_name: record.guardian_name,
            guardian_phone: record.guardian_phone,
            guardian_email: record.guardian_email,
            address: record.address,
            grade_id: record.grade_id,
            subject_ids: record.subject_ids,
            enrollment_year: record.enrollment_year,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl Record for StudentRecord {
    const ENTITY: &'static str = "Student";

    record_lifecycle!();

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", Value::Text(self.name.clone())),
            ("email", Value::Text(self.email.clone())),
            ("password", Value::Text(self.password.clone())),
            ("role_id", Value::BigInt(self.role_id)),
            ("enrollment_number", Value::Text(self.enrollment_number.clone())),
            ("date_of_birth", Value::Date(self.date_of_birth)),
            ("guardian_name", Value::Text(self.guardian_name.clone())),
            ("guardian_phone", Value::Text(self.guardian_phone.clone())),
            ("guardian_email", Value::Text(self.guardian_email.clone())),
            ("address", Value::Text(self.address.clone())),
            ("grade_id", Value::BigInt(self.grade_id)),
            ("subject_ids", Value::BigIntArray(self.subject_ids.clone())),
            ("enrollment_year", Value::Int(self.enrollment_year)),
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
                format!("Student with email {} already exists", self.email),
            ),
            UniqueKey::single(
                "enrollment_number",
                self.enrollment_number.as_str(),
                format!(
                    "Student with enrollment number {} already exists",
                    self.enrollment_number
                ),
            ),
        ]
    }
}

impl PgRecord for StudentRecord {
    const TABLE: &'static str = "students";
    const COLUMNS: &'static str = "id, name, email, password, role_id, enrollment_number, \
        date_of_birth, guardian_name, guardian_phone, guardian_email, address, grade_id, \
        subject_ids, enrollment_year, status, created_at, updated_at";
}
