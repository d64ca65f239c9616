use std::sync::Arc;

use reportcard_core::{AppError, MessageResponse, hash_password};
use reportcard_store::{Collection, Filter, Repository};
use tracing::instrument;

use crate::modules::grades::service::GradeService;
use crate::modules::references::require_active;
use crate::modules::roles::service::RoleService;
use crate::modules::subjects::service::SubjectService;

use super::model::{CreateTeacherDto, Teacher, TeacherRecord, UpdateTeacherDto};

pub struct TeacherService {
    teachers: Collection<TeacherRecord>,
    roles: Arc<RoleService>,
    subjects: Arc<SubjectService>,
    grades: Arc<GradeService>,
    bcrypt_cost: u32,
}

impl TeacherService {
    pub fn new(
        repository: Arc<dyn Repository<TeacherRecord>>,
        roles: Arc<RoleService>,
        subjects: Arc<SubjectService>,
        grades: Arc<GradeService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            teachers: Collection::new(repository),
            roles,
            subjects,
            grades,
            bcrypt_cost,
        }
    }

    async fn ensure_references(
        &self,
        role_id: Option<i64>,
        subject_ids: Option<&[i64]>,
        grade_ids: Option<&[i64]>,
    ) -> Result<(), AppError> {
        if let Some(role_id) = role_id {
            require_active("Role", role_id, self.roles.lookup(role_id).await?)?;
        }
        for &subject_id in subject_ids.unwrap_or_default() {
            require_active("Subject", subject_id, self.subjects.lookup(subject_id).await?)?;
        }
        for &grade_id in grade_ids.unwrap_or_default() {
            require_active("Grade", grade_id, self.grades.lookup(grade_id).await?)?;
        }
        Ok(())
    }

    #[instrument(skip(self, dto), fields(email = %dto.email))]
    pub async fn create(&self, dto: CreateTeacherDto) -> Result<Teacher, AppError> {
        self.ensure_references(
            Some(dto.role_id),
            Some(&dto.subject_ids),
            Some(&dto.grade_ids),
        )
        .await?;

        let password_hash = hash_password(&dto.password, self.bcrypt_cost)?;
        let teacher = self
            .teachers
            .create(TeacherRecord::new(dto, password_hash))
            .await?;
        Ok(teacher.into())
    }

    pub async fn find_all(&self) -> Result<Vec<Teacher>, AppError> {
        self.find(Filter::active()).await
    }

    #[instrument(skip(self))]
    pub async fn find_all_by_status(&self, status: Option<bool>) -> Result<Vec<Teacher>, AppError> {
        self.find(Filter::by_status(status)).await
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: i64) -> Result<Teacher, AppError> {
        Ok(self.teachers.find_by_id(id).await?.into())
    }

    #[instrument(skip(self))]
    pub async fn find_by_department(&self, department: &str) -> Result<Vec<Teacher>, AppError> {
        self.find(Filter::active().eq("department", department)).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_subject(&self, subject_id: i64) -> Result<Vec<Teacher>, AppError> {
        self.find(Filter::active().contains("subject_ids", subject_id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_grade(&self, grade_id: i64) -> Result<Vec<Teacher>, AppError> {
        self.find(Filter::active().contains("grade_ids", grade_id)).await
    }

    #[instrument(skip(self, dto))]
    pub async fn update(&self, id: i64, dto: UpdateTeacherDto) -> Result<Teacher, AppError> {
        self.teachers.find_by_id(id).await?;

        self.ensure_references(
            dto.role_id,
            dto.subject_ids.as_deref(),
            dto.grade_ids.as_deref(),
        )
        .await?;

        let password_hash = dto
            .password
            .as_deref()
            .map(|password| hash_password(password, self.bcrypt_cost))
            .transpose()?;

        let teacher = self
            .teachers
            .update(id, |teacher| dto.apply(teacher, password_hash))
            .await?;
        Ok(teacher.into())
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.teachers.soft_delete(id).await
    }

    async fn find(&self, filter: Filter) -> Result<Vec<Teacher>, AppError> {
        let teachers = self.teachers.find_where(filter).await?;
        Ok(teachers.into_iter().map(Teacher::from).collect())
    }
}
