use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use reportcard_core::{AppError, ErrorResponse, MessageResponse};
use reportcard_models::StatusQuery;

use crate::modules::grades::model::{CreateGradeDto, Grade, UpdateGradeDto};
use crate::state::AppState;
use crate::validator::{Path, Query, ValidatedJson};

#[utoipa::path(
    post,
    path = "/api/grades",
    request_body = CreateGradeDto,
    responses(
        (status = 201, description = "Grade created", body = Grade),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "An active grade already has this level", body = ErrorResponse)
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn create_grade(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateGradeDto>,
) -> Result<(StatusCode, Json<Grade>), AppError> {
    let grade = state.grades.create_grade(dto).await?;
    Ok((StatusCode::CREATED, Json(grade)))
}

#[utoipa::path(
    get,
    path = "/api/grades",
    params(StatusQuery),
    responses(
        (status = 200, description = "Grades, filtered by status when given", body = Vec<Grade>)
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn get_grades(
    State(state): State<AppState>,
    Query(params): Query<StatusQuery>,
) -> Result<Json<Vec<Grade>>, AppError> {
    let grades = state.grades.find_all_grades_by_status(params.status).await?;
    Ok(Json(grades))
}

#[utoipa::path(
    get,
    path = "/api/grades/{id}",
    params(("id" = i64, Path, description = "Grade ID")),
    responses(
        (status = 200, description = "Active grade", body = Grade),
        (status = 404, description = "No active grade with this ID", body = ErrorResponse)
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn get_grade(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Grade>, AppError> {
    let grade = state.grades.find_one_grade(id).await?;
    Ok(Json(grade))
}

#[utoipa::path(
    put,
    path = "/api/grades/{id}",
    params(("id" = i64, Path, description = "Grade ID")),
    request_body = UpdateGradeDto,
    responses(
        (status = 200, description = "Grade updated", body = Grade),
        (status = 404, description = "No active grade with this ID", body = ErrorResponse),
        (status = 409, description = "An active grade already has this level", body = ErrorResponse)
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn update_grade(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateGradeDto>,
) -> Result<Json<Grade>, AppError> {
    let grade = state.grades.update_grade(id, dto).await?;
    Ok(Json(grade))
}

#[utoipa::path(
    delete,
    path = "/api/grades/{id}",
    params(("id" = i64, Path, description = "Grade ID")),
    responses(
        (status = 200, description = "Grade removed", body = MessageResponse),
        (status = 404, description = "No active grade with this ID", body = ErrorResponse)
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn delete_grade(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state.grades.remove_grade(id).await?;
    Ok(Json(message))
}
