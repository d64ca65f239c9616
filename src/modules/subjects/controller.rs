use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use reportcard_core::{AppError, ErrorResponse, MessageResponse};
use reportcard_models::StatusQuery;

use crate::modules::subjects::model::{CreateSubjectDto, Subject, UpdateSubjectDto};
use crate::state::AppState;
use crate::validator::{Path, Query, ValidatedJson};

#[utoipa::path(
    post,
    path = "/api/subjects",
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = Subject),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "An active subject already has this subject name", body = ErrorResponse)
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn create_subject(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSubjectDto>,
) -> Result<(StatusCode, Json<Subject>), AppError> {
    let subject = state.subjects.create_subject(dto).await?;
    Ok((StatusCode::CREATED, Json(subject)))
}

#[utoipa::path(
    get,
    path = "/api/subjects",
    params(StatusQuery),
    responses(
        (status = 200, description = "Subjects, filtered by status when given", body = Vec<Subject>)
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn get_subjects(
    State(state): State<AppState>,
    Query(params): Query<StatusQuery>,
) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects = state.subjects.find_all_subjects_by_status(params.status).await?;
    Ok(Json(subjects))
}

#[utoipa::path(
    get,
    path = "/api/subjects/{id}",
    params(("id" = i64, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Active subject", body = Subject),
        (status = 404, description = "No active subject with this ID", body = ErrorResponse)
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Subject>, AppError> {
    let subject = state.subjects.find_one_subject(id).await?;
    Ok(Json(subject))
}

#[utoipa::path(
    put,
    path = "/api/subjects/{id}",
    params(("id" = i64, Path, description = "Subject ID")),
    request_body = UpdateSubjectDto,
    responses(
        (status = 200, description = "Subject updated", body = Subject),
        (status = 404, description = "No active subject with this ID", body = ErrorResponse),
        (status = 409, description = "An active subject already has this subject name", body = ErrorResponse)
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn update_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateSubjectDto>,
) -> Result<Json<Subject>, AppError> {
    let subject = state.subjects.update_subject(id, dto).await?;
    Ok(Json(subject))
}

#[utoipa::path(
    delete,
    path = "/api/subjects/{id}",
    params(("id" = i64, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subject removed", body = MessageResponse),
        (status = 404, description = "No active subject with this ID", body = ErrorResponse)
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state.subjects.remove_subject(id).await?;
    Ok(Json(message))
}
