use std::sync::Arc;

use anyhow::anyhow;
use reportcard_core::{AppError, MessageResponse, hash_password};
use reportcard_store::{Collection, Filter, Repository};
use tracing::instrument;

use crate::modules::grades::service::GradeService;
use crate::modules::references::require_active;
use crate::modules::roles::service::RoleService;
use crate::modules::subjects::service::SubjectService;

use super::model::{CreateStudentDto, Student, StudentRecord, UpdateStudentDto};

pub struct StudentService {
    students: Collection<StudentRecord>,
    roles: Arc<RoleService>,
    grades: Arc<GradeService>,
    subjects: Arc<SubjectService>,
    bcrypt_cost: u32,
}

impl StudentService {
    pub fn new(
        repository: Arc<dyn Repository<StudentRecord>>,
        roles: Arc<RoleService>,
        grades: Arc<GradeService>,
        subjects: Arc<SubjectService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            students: Collection::new(repository),
            roles,
            grades,
            subjects,
            bcrypt_cost,
        }
    }

    async fn ensure_references(
        &self,
        role_id: Option<i64>,
        grade_id: Option<i64>,
        subject_ids: Option<&[i64]>,
    ) -> Result<(), AppError> {
        if let Some(role_id) = role_id {
            require_active("Role", role_id, self.roles.lookup(role_id).await?)?;
        }
        if let Some(grade_id) = grade_id {
            require_active("Grade", grade_id, self.grades.lookup(grade_id).await?)?;
        }
        for &subject_id in subject_ids.unwrap_or_default() {
            require_active("Subject", subject_id, self.subjects.lookup(subject_id).await?)?;
        }
        Ok(())
    }

    #[instrument(skip(self, dto), fields(enrollment_number = %dto.enrollment_number))]
    pub async fn create(&self, dto: CreateStudentDto) -> Result<Student, AppError> {
        self.ensure_references(Some(dto.role_id), Some(dto.grade_id), Some(&dto.subject_ids))
            .await?;

        let password_hash = hash_password(&dto.password, self.bcrypt_cost)?;
        let student = self
            .students
            .create(StudentRecord::new(dto, password_hash))
            .await?;
        Ok(student.into())
    }

    pub async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        self.find(Filter::active()).await
    }

    #[instrument(skip(self))]
    pub async fn find_all_by_status(&self, status: Option<bool>) -> Result<Vec<Student>, AppError> {
        self.find(Filter::by_status(status)).await
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: i64) -> Result<Student, AppError> {
        Ok(self.students.find_by_id(id).await?.into())
    }

    /// Active student with `id`, for enrollment reference checks.
    pub async fn lookup(&self, id: i64) -> Result<Option<Student>, AppError> {
        Ok(self.students.lookup(id).await?.map(Student::from))
    }

    #[instrument(skip(self))]
    pub async fn find_by_grade(&self, grade_id: i64) -> Result<Vec<Student>, AppError> {
        self.find(Filter::active().eq("grade_id", grade_id)).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_subject(&self, subject_id: i64) -> Result<Vec<Student>, AppError> {
        self.find(Filter::active().contains("subject_ids", subject_id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_enrollment_year(&self, year: i32) -> Result<Vec<Student>, AppError> {
        self.find(Filter::active().eq("enrollment_year", year)).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_enrollment_number(&self, enrollment_number: &str) -> Result<Student, AppError> {
        self.find(Filter::active().eq_ignore_case("enrollment_number", enrollment_number))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                AppError::not_found(anyhow!(
                    "Student with enrollment number {} not found",
                    enrollment_number
                ))
            })
    }

    #[instrument(skip(self, dto))]
    pub async fn update(&self, id: i64, dto: UpdateStudentDto) -> Result<Student, AppError> {
        self.students.find_by_id(id).await?;

        self.ensure_references(dto.role_id, dto.grade_id, dto.subject_ids.as_deref())
            .await?;

        let password_hash = dto
            .password
            .as_deref()
            .map(|password| hash_password(password, self.bcrypt_cost))
            .transpose()?;

        let student = self
            .students
            .update(id, |student| dto.apply(student, password_hash))
            .await?;
        Ok(student.into())
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.students.soft_delete(id).await
    }

    async fn find(&self, filter: Filter) -> Result<Vec<Student>, AppError> {
        let students = self.students.find_where(filter).await?;
        Ok(students.into_iter().map(Student::from).collect())
    }
}
