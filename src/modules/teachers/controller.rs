use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use reportcard_core::{AppError, ErrorResponse, MessageResponse};
use reportcard_models::StatusQuery;

use crate::modules::teachers::model::{
    CreateTeacherDto, DepartmentQuery, Teacher, UpdateTeacherDto,
};
use crate::state::AppState;
use crate::validator::{Path, Query, ValidatedJson};

#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Teacher created", body = Teacher),
        (status = 400, description = "Invalid input or unknown role, subject or grade", body = ErrorResponse),
        (status = 409, description = "Email or license number already in use", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTeacherDto>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    let teacher = state.teachers.create(dto).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

#[utoipa::path(
    get,
    path = "/api/teachers",
    params(StatusQuery),
    responses((status = 200, description = "Teachers, filtered by status when given", body = Vec<Teacher>)),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers(
    State(state): State<AppState>,
    Query(params): Query<StatusQuery>,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = state.teachers.find_all_by_status(params.status).await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    get,
    path = "/api/teachers/by-department",
    params(DepartmentQuery),
    responses((status = 200, description = "Active teachers in the department", body = Vec<Teacher>)),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers_by_department(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = state.teachers.find_by_department(&query.department).await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    get,
    path = "/api/teachers/by-subject/{subject_id}",
    params(("subject_id" = i64, Path, description = "Subject ID")),
    responses((status = 200, description = "Active teachers assigned the subject", body = Vec<Teacher>)),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers_by_subject(
    State(state): State<AppState>,
    Path(subject_id): Path<i64>,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = state.teachers.find_by_subject(subject_id).await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    get,
    path = "/api/teachers/by-grade/{grade_id}",
    params(("grade_id" = i64, Path, description = "Grade ID")),
    responses((status = 200, description = "Active teachers assigned the grade", body = Vec<Teacher>)),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers_by_grade(
    State(state): State<AppState>,
    Path(grade_id): Path<i64>,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = state.teachers.find_by_grade(grade_id).await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Active teacher", body = Teacher),
        (status = 404, description = "No active teacher with this ID", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = state.teachers.find_one(id).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated", body = Teacher),
        (status = 400, description = "Invalid input or unknown role, subject or grade", body = ErrorResponse),
        (status = 404, description = "No active teacher with this ID", body = ErrorResponse),
        (status = 409, description = "Email or license number already in use", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateTeacherDto>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = state.teachers.update(id, dto).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher removed", body = MessageResponse),
        (status = 404, description = "No active teacher with this ID", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state.teachers.remove(id).await?;
    Ok(Json(message))
}
