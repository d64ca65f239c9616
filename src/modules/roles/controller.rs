use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use reportcard_core::{AppError, ErrorResponse, MessageResponse};
use reportcard_models::StatusQuery;

use crate::modules::roles::model::{CreateRoleDto, Role, UpdateRoleDto};
use crate::state::AppState;
use crate::validator::{Path, Query, ValidatedJson};

#[utoipa::path(
    post,
    path = "/api/roles",
    request_body = CreateRoleDto,
    responses(
        (status = 201, description = "Role created", body = Role),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "An active role already has this name", body = ErrorResponse)
    ),
    tag = "Roles"
)]
#[instrument(skip(state))]
pub async fn create_role(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateRoleDto>,
) -> Result<(StatusCode, Json<Role>), AppError> {
    let role = state.roles.create_role(dto).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

#[utoipa::path(
    get,
    path = "/api/roles",
    params(StatusQuery),
    responses(
        (status = 200, description = "Roles, filtered by status when given", body = Vec<Role>)
    ),
    tag = "Roles"
)]
#[instrument(skip(state))]
pub async fn get_roles(
    State(state): State<AppState>,
    Query(params): Query<StatusQuery>,
) -> Result<Json<Vec<Role>>, AppError> {
    let roles = state.roles.find_all_roles_by_status(params.status).await?;
    Ok(Json(roles))
}

#[utoipa::path(
    get,
    path = "/api/roles/{id}",
    params(("id" = i64, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Active role", body = Role),
        (status = 404, description = "No active role with this ID", body = ErrorResponse)
    ),
    tag = "Roles"
)]
#[instrument(skip(state))]
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Role>, AppError> {
    let role = state.roles.find_one_role(id).await?;
    Ok(Json(role))
}

#[utoipa::path(
    put,
    path = "/api/roles/{id}",
    params(("id" = i64, Path, description = "Role ID")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = Role),
        (status = 404, description = "No active role with this ID", body = ErrorResponse),
        (status = 409, description = "An active role already has this name", body = ErrorResponse)
    ),
    tag = "Roles"
)]
#[instrument(skip(state))]
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateRoleDto>,
) -> Result<Json<Role>, AppError> {
    let role = state.roles.update_role(id, dto).await?;
    Ok(Json(role))
}

#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    params(("id" = i64, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role removed", body = MessageResponse),
        (status = 404, description = "No active role with this ID", body = ErrorResponse)
    ),
    tag = "Roles"
)]
#[instrument(skip(state))]
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state.roles.remove_role(id).await?;
    Ok(Json(message))
}
