use std::sync::Arc;

use reportcard_core::{AppError, MessageResponse, hash_password};
use reportcard_store::{Collection, Repository};
use tracing::instrument;

use crate::modules::references::require_active;
use crate::modules::roles::service::RoleService;

use super::model::{CreateUserDto, UpdateUserDto, User, UserRecord, UserWithRole};

pub struct UserService {
    users: Collection<UserRecord>,
    roles: Arc<RoleService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn Repository<UserRecord>>,
        roles: Arc<RoleService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users: Collection::new(repository),
            roles,
            bcrypt_cost,
        }
    }

    async fn ensure_role(&self, role_id: i64) -> Result<(), AppError> {
        require_active("Role", role_id, self.roles.lookup(role_id).await?)?;
        Ok(())
    }

    #[instrument(skip(self, dto), fields(email = %dto.email))]
    pub async fn create(&self, dto: CreateUserDto) -> Result<User, AppError> {
        self.ensure_role(dto.role_id).await?;

        let password_hash = hash_password(&dto.password, self.bcrypt_cost)?;
        let user = self.users.create(UserRecord::new(dto, password_hash)).await?;
        Ok(user.into())
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let users = self.users.find_all_active().await?;
        Ok(users.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn find_all_by_status(&self, status: Option<bool>) -> Result<Vec<User>, AppError> {
        let users = self.users.find_all_by_status(status).await?;
        Ok(users.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: i64) -> Result<User, AppError> {
        Ok(self.users.find_by_id(id).await?.into())
    }

    /// The user plus its role; the role is left out once it has been removed.
    #[instrument(skip(self))]
    pub async fn find_user_with_role(&self, id: i64) -> Result<UserWithRole, AppError> {
        let user = self.users.find_by_id(id).await?;
        let role = self.roles.lookup(user.role_id).await?;

        Ok(UserWithRole {
            user: user.into(),
            role,
        })
    }

    #[instrument(skip(self, dto))]
    pub async fn update(&self, id: i64, dto: UpdateUserDto) -> Result<User, AppError> {
        self.users.find_by_id(id).await?;

        if let Some(role_id) = dto.role_id {
            self.ensure_role(role_id).await?;
        }

        let password_hash = dto
            .password
            .as_deref()
            .map(|password| hash_password(password, self.bcrypt_cost))
            .transpose()?;

        let user = self
            .users
            .update(id, |user| dto.apply(user, password_hash))
            .await?;
        Ok(user.into())
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.users.soft_delete(id).await
    }
}
