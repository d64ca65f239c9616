use std::sync::Arc;

use reportcard_core::{AppError, MessageResponse};
use reportcard_store::{Collection, Repository};
use tracing::instrument;

use super::model::{CreateRoleDto, Role, UpdateRoleDto};

pub struct RoleService {
    roles: Collection<Role>,
}

impl RoleService {
    pub fn new(repository: Arc<dyn Repository<Role>>) -> Self {
        Self {
            roles: Collection::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn create_role(&self, dto: CreateRoleDto) -> Result<Role, AppError> {
        self.roles.create(Role::from(dto)).await
    }

    pub async fn find_all_roles(&self) -> Result<Vec<Role>, AppError> {
        self.roles.find_all_active().await
    }

    #[instrument(skip(self))]
    pub async fn find_all_roles_by_status(&self, status: Option<bool>) -> Result<Vec<Role>, AppError> {
        self.roles.find_all_by_status(status).await
    }

    #[instrument(skip(self))]
    pub async fn find_one_role(&self, id: i64) -> Result<Role, AppError> {
        self.roles.find_by_id(id).await
    }

    /// Active role with `id`, for reference checks in other services.
    pub async fn lookup(&self, id: i64) -> Result<Option<Role>, AppError> {
        self.roles.lookup(id).await
    }

    #[instrument(skip(self))]
    pub async fn update_role(&self, id: i64, dto: UpdateRoleDto) -> Result<Role, AppError> {
        self.roles.update(id, |role| dto.apply(role)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_role(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.roles.soft_delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use reportcard_core::ErrorKind;
    use reportcard_store::Storage;

    use super::*;

    fn service() -> RoleService {
        RoleService::new(Storage::Memory.repository())
    }

    fn dto(name: &str) -> CreateRoleDto {
        CreateRoleDto {
            name: name.to_string(),
            description: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_role_lifecycle() {
        let roles = service();

        let admin = roles.create_role(dto("admin")).await.unwrap();
        assert_eq!(admin.id, 1);
        assert!(admin.status);

        let err = roles.create_role(dto("admin")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateKey);
        assert_eq!(err.error.to_string(), "Role with name 'admin' already exists");

        roles
            .update_role(
                1,
                UpdateRoleDto {
                    status: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(
            roles.find_one_role(1).await.unwrap_err().kind,
            ErrorKind::NotFound
        );

        let inactive = roles.find_all_roles_by_status(Some(false)).await.unwrap();
        assert!(inactive.iter().any(|role| role.id == 1));
        assert!(roles.find_all_roles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_name_is_accepted() {
        let roles = service();
        assert!(roles.create_role(dto("")).await.is_ok());
        assert_eq!(
            roles.create_role(dto("")).await.unwrap_err().kind,
            ErrorKind::DuplicateKey
        );
    }
}
