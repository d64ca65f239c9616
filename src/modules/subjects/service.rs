use std::sync::Arc;

use reportcard_core::{AppError, MessageResponse};
use reportcard_store::{Collection, Repository};
use tracing::instrument;

use super::model::{CreateSubjectDto, Subject, UpdateSubjectDto};

pub struct SubjectService {
    subjects: Collection<Subject>,
}

impl SubjectService {
    pub fn new(repository: Arc<dyn Repository<Subject>>) -> Self {
        Self {
            subjects: Collection::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn create_subject(&self, dto: CreateSubjectDto) -> Result<Subject, AppError> {
        self.subjects.create(Subject::from(dto)).await
    }

    pub async fn find_all_subjects(&self) -> Result<Vec<Subject>, AppError> {
        self.subjects.find_all_active().await
    }

    #[instrument(skip(self))]
    pub async fn find_all_subjects_by_status(&self, status: Option<bool>) -> Result<Vec<Subject>, AppError> {
        self.subjects.find_all_by_status(status).await
    }

    #[instrument(skip(self))]
    pub async fn find_one_subject(&self, id: i64) -> Result<Subject, AppError> {
        self.subjects.find_by_id(id).await
    }

    /// Active subject with `id`, for reference checks in other services.
    pub async fn lookup(&self, id: i64) -> Result<Option<Subject>, AppError> {
        self.subjects.lookup(id).await
    }

    #[instrument(skip(self))]
    pub async fn update_subject(&self, id: i64, dto: UpdateSubjectDto) -> Result<Subject, AppError> {
        self.subjects.update(id, |subject| dto.apply(subject)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_subject(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.subjects.soft_delete(id).await
    }
}
