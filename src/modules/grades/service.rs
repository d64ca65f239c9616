use std::sync::Arc;

use reportcard_core::{AppError, MessageResponse};
use reportcard_store::{Collection, Repository};
use tracing::instrument;

use super::model::{CreateGradeDto, Grade, UpdateGradeDto};

pub struct GradeService {
    grades: Collection<Grade>,
}

impl GradeService {
    pub fn new(repository: Arc<dyn Repository<Grade>>) -> Self {
        Self {
            grades: Collection::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn create_grade(&self, dto: CreateGradeDto) -> Result<Grade, AppError> {
        self.grades.create(Grade::from(dto)).await
    }

    pub async fn find_all_grades(&self) -> Result<Vec<Grade>, AppError> {
        self.grades.find_all_active().await
    }

    #[instrument(skip(self))]
    pub async fn find_all_grades_by_status(&self, status: Option<bool>) -> Result<Vec<Grade>, AppError> {
        self.grades.find_all_by_status(status).await
    }

    #[instrument(skip(self))]
    pub async fn find_one_grade(&self, id: i64) -> Result<Grade, AppError> {
        self.grades.find_by_id(id).await
    }

    /// Active grade with `id`, for reference checks in other services.
    pub async fn lookup(&self, id: i64) -> Result<Option<Grade>, AppError> {
        self.grades.lookup(id).await
    }

    #[instrument(skip(self))]
    pub async fn update_grade(&self, id: i64, dto: UpdateGradeDto) -> Result<Grade, AppError> {
        self.grades.update(id, |grade| dto.apply(grade)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_grade(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.grades.soft_delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use reportcard_core::ErrorKind;
    use reportcard_store::Storage;

    use super::*;

    fn dto(level: &str) -> CreateGradeDto {
        CreateGradeDto {
            level: level.to_string(),
            description: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_level_is_unique_ignoring_case() {
        let grades = GradeService::new(Storage::Memory.repository());
        grades.create_grade(dto("1° Secundaria")).await.unwrap();

        let err = grades.create_grade(dto("1° SECUNDARIA")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateKey);
        assert_eq!(
            err.error.to_string(),
            "Grade with level '1° SECUNDARIA' already exists"
        );
    }

    #[tokio::test]
    async fn test_removed_level_can_be_reused() {
        let grades = GradeService::new(Storage::Memory.repository());
        let first = grades.create_grade(dto("Preescolar")).await.unwrap();

        let message = grades.remove_grade(first.id).await.unwrap();
        assert_eq!(message.message, "Grade with ID 1 has been removed");

        let second = grades.create_grade(dto("Preescolar")).await.unwrap();
        assert_eq!(second.id, 2);
        assert_eq!(grades.find_all_grades().await.unwrap(), vec![second]);
        assert!(grades.lookup(first.id).await.unwrap().is_none());
    }
}
