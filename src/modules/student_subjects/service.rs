use std::sync::Arc;

use anyhow::anyhow;
use chrono::Utc;
use reportcard_core::{AppError, MessageResponse};
use reportcard_store::{Collection, Filter, Repository};
use tracing::instrument;

use crate::modules::references::require_active;
use crate::modules::students::service::StudentService;
use crate::modules::subjects::service::SubjectService;

use super::model::{
    CompleteSubjectDto, CreateStudentSubjectDto, StudentSubject, UpdateStudentSubjectDto,
};

pub struct StudentSubjectService {
    enrollments: Collection<StudentSubject>,
    students: Arc<StudentService>,
    subjects: Arc<SubjectService>,
}

impl StudentSubjectService {
    pub fn new(
        repository: Arc<dyn Repository<StudentSubject>>,
        students: Arc<StudentService>,
        subjects: Arc<SubjectService>,
    ) -> Self {
        Self {
            enrollments: Collection::new(repository),
            students,
            subjects,
        }
    }

    async fn ensure_references(
        &self,
        student_id: Option<i64>,
        subject_id: Option<i64>,
    ) -> Result<(), AppError> {
        if let Some(student_id) = student_id {
            require_active("Student", student_id, self.students.lookup(student_id).await?)?;
        }
        if let Some(subject_id) = subject_id {
            require_active("Subject", subject_id, self.subjects.lookup(subject_id).await?)?;
        }
        Ok(())
    }

    /// Defaults are applied before the period key is compared.
    #[instrument(skip(self))]
    pub async fn create(&self, dto: CreateStudentSubjectDto) -> Result<StudentSubject, AppError> {
        self.ensure_references(Some(dto.student_id), Some(dto.subject_id))
            .await?;
        self.enrollments.create(StudentSubject::from(dto)).await
    }

    pub async fn find_all(&self) -> Result<Vec<StudentSubject>, AppError> {
        self.enrollments.find_all_active().await
    }

    #[instrument(skip(self))]
    pub async fn find_all_by_status(
        &self,
        status: Option<bool>,
    ) -> Result<Vec<StudentSubject>, AppError> {
        self.enrollments.find_all_by_status(status).await
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: i64) -> Result<StudentSubject, AppError> {
        self.enrollments.find_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_student(&self, student_id: i64) -> Result<Vec<StudentSubject>, AppError> {
        let enrollments = self
            .enrollments
            .find_where(Filter::active().eq("student_id", student_id))
            .await?;
        if enrollments.is_empty() {
            return Err(AppError::not_found(anyhow!(
                "No active enrollments found for student {}",
                student_id
            )));
        }
        Ok(enrollments)
    }

    #[instrument(skip(self))]
    pub async fn find_by_subject(&self, subject_id: i64) -> Result<Vec<StudentSubject>, AppError> {
        let enrollments = self
            .enrollments
            .find_where(Filter::active().eq("subject_id", subject_id))
            .await?;
        if enrollments.is_empty() {
            return Err(AppError::not_found(anyhow!(
                "No active enrollments found for subject {}",
                subject_id
            )));
        }
        Ok(enrollments)
    }

    #[instrument(skip(self))]
    pub async fn find_by_academic_period(
        &self,
        year: i32,
        semester: i32,
    ) -> Result<Vec<StudentSubject>, AppError> {
        self.enrollments
            .find_where(
                Filter::active()
                    .eq("academic_year", year)
                    .eq("semester", semester),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: i64,
        dto: UpdateStudentSubjectDto,
    ) -> Result<StudentSubject, AppError> {
        self.enrollments.find_by_id(id).await?;
        self.ensure_references(dto.student_id, dto.subject_id).await?;
        self.enrollments
            .update(id, |enrollment| dto.apply(enrollment))
            .await
    }

    /// Records the final grade and stamps the completion date.
    #[instrument(skip(self))]
    pub async fn complete_subject(
        &self,
        id: i64,
        dto: CompleteSubjectDto,
    ) -> Result<StudentSubject, AppError> {
        let final_grade = dto.final_grade;
        if !(0.0..=100.0).contains(&final_grade) {
            return Err(AppError::bad_request(anyhow!(
                "Final grade must be between 0 and 100"
            )));
        }

        self.enrollments
            .update(id, |enrollment| {
                enrollment.final_grade = Some(final_grade);
                enrollment.completion_date = Some(Utc::now());
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.enrollments.soft_delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};
    use reportcard_core::{ErrorKind, password::MIN_COST};
    use reportcard_models::{CreateGradeDto, CreateRoleDto, CreateStudentDto, CreateSubjectDto};
    use reportcard_store::Storage;

    use super::*;
    use crate::modules::grades::service::GradeService;
    use crate::modules::roles::service::RoleService;

    async fn service() -> StudentSubjectService {
        let storage = Storage::Memory;
        let roles = Arc::new(RoleService::new(storage.repository()));
        let grades = Arc::new(GradeService::new(storage.repository()));
        let subjects = Arc::new(SubjectService::new(storage.repository()));

        roles
            .create_role(CreateRoleDto {
                name: "student".into(),
                description: None,
                status: None,
            })
            .await
            .unwrap();
        grades
            .create_grade(CreateGradeDto {
                level: "6° Primaria".into(),
                description: None,
                status: None,
            })
            .await
            .unwrap();
        for name in ["Matemáticas", "Español"] {
            subjects
                .create_subject(CreateSubjectDto {
                    subject_name: name.into(),
                    description: None,
                    hours_per_week: None,
                    status: None,
                })
                .await
                .unwrap();
        }

        let students = Arc::new(StudentService::new(
            storage.repository(),
            roles,
            grades,
            subjects.clone(),
            MIN_COST,
        ));
        students
            .create(CreateStudentDto {
                name: "Juan Pérez".into(),
                email: "juan@student.edu".into(),
                password: "student123".into(),
                role_id: 1,
                enrollment_number: "EST-2024-001".into(),
                date_of_birth: NaiveDate::from_ymd_opt(2010, 5, 15).unwrap(),
                guardian_name: "Pedro Pérez".into(),
                guardian_phone: "+1234567101".into(),
                guardian_email: "pedro@parent.com".into(),
                address: "Calle 123".into(),
                grade_id: 1,
                subject_ids: vec![1, 2],
                enrollment_year: Some(2024),
                status: None,
            })
            .await
            .unwrap();

        StudentSubjectService::new(storage.repository(), students, subjects)
    }

    fn dto(subject_id: i64) -> CreateStudentSubjectDto {
        CreateStudentSubjectDto {
            student_id: 1,
            subject_id,
            enrollment_date: None,
            academic_year: None,
            semester: None,
            final_grade: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_defaulted_and_explicit_period_are_duplicates() {
        let enrollments = service().await;
        let first = enrollments.create(dto(1)).await.unwrap();
        assert_eq!(first.academic_year, Utc::now().year());
        assert_eq!(first.semester, 1);

        let err = enrollments
            .create(CreateStudentSubjectDto {
                academic_year: Some(Utc::now().year()),
                semester: Some(1),
                ..dto(1)
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateKey);
        assert_eq!(
            err.error.to_string(),
            "Student 1 is already enrolled in subject 1 for this academic period"
        );

        enrollments
            .create(CreateStudentSubjectDto {
                semester: Some(2),
                ..dto(1)
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unknown_student_or_subject_is_invalid_reference() {
        let enrollments = service().await;
        let err = enrollments
            .create(CreateStudentSubjectDto {
                student_id: 9,
                ..dto(1)
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ReferenceInvalid);
        assert_eq!(err.error.to_string(), "Student with ID 9 does not exist");

        let err = enrollments.create(dto(3)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::ReferenceInvalid);
    }

    #[tokio::test]
    async fn test_complete_subject_checks_range_before_lookup() {
        let enrollments = service().await;
        let enrollment = enrollments.create(dto(1)).await.unwrap();

        let err = enrollments
            .complete_subject(99, CompleteSubjectDto { final_grade: 105.0 })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.error.to_string(), "Final grade must be between 0 and 100");

        let err = enrollments
            .complete_subject(99, CompleteSubjectDto { final_grade: 85.0 })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let completed = enrollments
            .complete_subject(enrollment.id, CompleteSubjectDto { final_grade: 85.0 })
            .await
            .unwrap();
        assert_eq!(completed.final_grade, Some(85.0));
        assert!(completed.completion_date.is_some());
        assert!(completed.updated_at >= enrollment.updated_at);
    }

    #[tokio::test]
    async fn test_lookups_by_student_subject_and_period() {
        let enrollments = service().await;
        assert_eq!(
            enrollments.find_by_student(1).await.unwrap_err().kind,
            ErrorKind::NotFound
        );

        let math = enrollments.create(dto(1)).await.unwrap();
        let spanish = enrollments
            .create(CreateStudentSubjectDto {
                academic_year: Some(2024),
                semester: Some(2),
                ..dto(2)
            })
            .await
            .unwrap();

        assert_eq!(
            enrollments.find_by_student(1).await.unwrap(),
            vec![math.clone(), spanish.clone()]
        );
        assert_eq!(enrollments.find_by_subject(2).await.unwrap(), vec![spanish.clone()]);
        assert_eq!(
            enrollments.find_by_academic_period(2024, 2).await.unwrap(),
            vec![spanish]
        );
        assert!(enrollments.find_by_academic_period(2024, 1).await.unwrap().is_empty());

        enrollments.remove(math.id).await.unwrap();
        assert_eq!(
            enrollments.find_by_subject(1).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn test_patch_moving_into_taken_period_conflicts() {
        let enrollments = service().await;
        enrollments.create(dto(1)).await.unwrap();
        let other = enrollments
            .create(CreateStudentSubjectDto {
                semester: Some(2),
                ..dto(1)
            })
            .await
            .unwrap();

        let err = enrollments
            .update(
                other.id,
                UpdateStudentSubjectDto {
                    semester: Some(1),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateKey);

        let patched = enrollments
            .update(
                other.id,
                UpdateStudentSubjectDto {
                    final_grade: Some(90.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(patched.semester, 2);
        assert_eq!(patched.final_grade, Some(90.0));
    }
}
