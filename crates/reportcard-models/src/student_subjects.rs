//! Enrollment of a student in a subject for one academic period.

use chrono::{DateTime, Datelike, Utc};
use reportcard_store::{PgRecord, Record, UniqueKey, Value, record_lifecycle};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_SEMESTER: i32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentSubject {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub enrollment_date: DateTime<Utc>,
    #[schema(example = 2025)]
    pub academic_year: i32,
    #[schema(example = 1)]
    pub semester: i32,
    #[schema(example = 85.5)]
    pub final_grade: Option<f64>,
    pub completion_date: Option<DateTime<Utc>>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentSubjectDto {
    #[schema(example = 1)]
    pub student_id: i64,
    #[schema(example = 1)]
    pub subject_id: i64,
    /// Defaults to now.
    pub enrollment_date: Option<DateTime<Utc>>,
    /// Defaults to the current year.
    #[validate(range(min = 2020))]
    pub academic_year: Option<i32>,
    /// 1 or 2, defaults to 1.
    #[validate(range(min = 1, max = 2))]
    pub semester: Option<i32>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub final_grade: Option<f64>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentSubjectDto {
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub enrollment_date: Option<DateTime<Utc>>,
    #[validate(range(min = 2020))]
    pub academic_year: Option<i32>,
    #[validate(range(min = 1, max = 2))]
    pub semester: Option<i32>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub final_grade: Option<f64>,
    pub status: Option<bool>,
}

/// Body of `PATCH /api/student-subjects/{id}/complete`.
///
/// The range is checked by the service so that it reports a validation error
/// before looking the enrollment up.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteSubjectDto {
    #[schema(example = 85.0)]
    pub final_grade: f64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AcademicPeriodQuery {
    pub year: i32,
    pub semester: i32,
}

impl From<CreateStudentSubjectDto> for StudentSubject {
    fn from(dto: CreateStudentSubjectDto) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            student_id: dto.student_id,
            subject_id: dto.subject_id,
            enrollment_date: dto.enrollment_date.unwrap_or(now),
            academic_year: dto.academic_year.unwrap_or_else(|| now.year()),
            semester: dto.semester.unwrap_or(DEFAULT_SEMESTER),
            final_grade: dto.final_grade,
            completion_date: None,
            status: dto.status.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }
}

impl UpdateStudentSubjectDto {
    pub fn apply(self, enrollment: &mut StudentSubject) {
        if let Some(student_id) = self.student_id {
            enrollment.student_id = student_id;
        }
        if let Some(subject_id) = self.subject_id {
            enrollment.subject_id = subject_id;
        }
        if let Some(enrollment_date) = self.enrollment_date {
            enrollment.enrollment_date = enrollment_date;
        }
        if let Some(academic_year) = self.academic_year {
            enrollment.academic_year = academic_year;
        }
        if let Some(semester) = self.semester {
            enrollment.semester = semester;
        }
        if let Some(final_grade) = self.final_grade {
            enrollment.final_grade = Some(final_grade);
        }
        if let Some(status) = self.status {
            enrollment.status = status;
        }
    }
}

impl Record for StudentSubject {
    const ENTITY: &'static str = "Student-Subject enrollment";

    record_lifecycle!();

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("student_id", Value::BigInt(self.student_id)),
            ("subject_id", Value::BigInt(self.subject_id)),
            ("enrollment_date", Value::Timestamp(self.enrollment_date)),
            ("academic_year", Value::Int(self.academic_year)),
            ("semester", Value::Int(self.semester)),
            ("final_grade", Value::OptFloat(self.final_grade)),
            ("completion_date", Value::OptTimestamp(self.completion_date)),
            ("status", Value::Bool(self.status)),
            ("created_at", Value::Timestamp(self.created_at)),
            ("updated_at", Value::Timestamp(self.updated_at)),
        ]
    }

    /// One active enrollment per student, subject and academic period.
    fn unique_keys(&self) -> Vec<UniqueKey> {
        vec![
            UniqueKey::new(format!(
                "Student {} is already enrolled in subject {} for this academic period",
                self.student_id, self.subject_id
            ))
            .with("student_id", self.student_id)
            .with("subject_id", self.subject_id)
            .with("academic_year", self.academic_year)
            .with("semester", self.semester),
        ]
    }
}

impl PgRecord for StudentSubject {
    const TABLE: &'static str = "student_subjects";
    const COLUMNS: &'static str = "id, student_id, subject_id, enrollment_date, academic_year, \
        semester, final_grade, completion_date, status, created_at, updated_at";
}
