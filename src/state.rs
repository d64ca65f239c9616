use std::sync::Arc;

use anyhow::Context;
use reportcard_config::{CorsConfig, StorageBackend, StorageConfig};
use reportcard_store::Storage;

use crate::modules::grades::service::GradeService;
use crate::modules::roles::service::RoleService;
use crate::modules::student_subjects::service::StudentSubjectService;
use crate::modules::students::service::StudentService;
use crate::modules::subjects::service::SubjectService;
use crate::modules::teachers::service::TeacherService;
use crate::modules::users::service::UserService;

/// Services shared by every handler.
///
/// Services that check references hold handles to the services they
/// reference, so each entity has exactly one backing collection.
#[derive(Clone)]
pub struct AppState {
    pub roles: Arc<RoleService>,
    pub grades: Arc<GradeService>,
    pub subjects: Arc<SubjectService>,
    pub users: Arc<UserService>,
    pub teachers: Arc<TeacherService>,
    pub students: Arc<StudentService>,
    pub student_subjects: Arc<StudentSubjectService>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn build(storage: &Storage, bcrypt_cost: u32, cors_config: CorsConfig) -> Self {
        let roles = Arc::new(RoleService::new(storage.repository()));
        let grades = Arc::new(GradeService::new(storage.repository()));
        let subjects = Arc::new(SubjectService::new(storage.repository()));

        let users = Arc::new(UserService::new(
            storage.repository(),
            roles.clone(),
            bcrypt_cost,
        ));
        let teachers = Arc::new(TeacherService::new(
            storage.repository(),
            roles.clone(),
            subjects.clone(),
            grades.clone(),
            bcrypt_cost,
        ));
        let students = Arc::new(StudentService::new(
            storage.repository(),
            roles.clone(),
            grades.clone(),
            subjects.clone(),
            bcrypt_cost,
        ));
        let student_subjects = Arc::new(StudentSubjectService::new(
            storage.repository(),
            students.clone(),
            subjects.clone(),
        ));

        Self {
            roles,
            grades,
            subjects,
            users,
            teachers,
            students,
            student_subjects,
            cors_config,
        }
    }

    /// Empty in-memory state.
    pub fn in_memory(bcrypt_cost: u32) -> Self {
        Self::build(&Storage::Memory, bcrypt_cost, CorsConfig::default())
    }
}

/// Opens the configured backend and builds the services on top of it.
///
/// The PostgreSQL backend is migrated before any service is created.
pub async fn init_app_state(
    config: &StorageConfig,
    cors_config: CorsConfig,
) -> anyhow::Result<AppState> {
    let storage = match config.backend {
        StorageBackend::Memory => Storage::Memory,
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set for the postgres backend")?;
            let pool = reportcard_db::connect(url, config.max_connections)
                .await
                .context("Failed to connect to database")?;
            reportcard_db::run_migrations(&pool)
                .await
                .context("Failed to run migrations")?;
            Storage::Postgres(pool)
        }
    };

    tracing::info!(backend = %config.backend, "Storage initialized");
    Ok(AppState::build(&storage, config.bcrypt_cost, cors_config))
}
