use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use reportcard_core::{AppError, ErrorResponse, MessageResponse};
use reportcard_models::StatusQuery;

use crate::modules::students::model::{
    CreateStudentDto, EnrollmentYearQuery, Student, UpdateStudentDto,
};
use crate::state::AppState;
use crate::validator::{Path, Query, ValidatedJson};

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Invalid input or unknown role, grade or subject", body = ErrorResponse),
        (status = 409, description = "Email or enrollment number already in use", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = state.students.create(dto).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    get,
    path = "/api/students",
    params(StatusQuery),
    responses((status = 200, description = "Students, filtered by status when given", body = Vec<Student>)),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    Query(params): Query<StatusQuery>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.students.find_all_by_status(params.status).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/by-grade/{grade_id}",
    params(("grade_id" = i64, Path, description = "Grade ID")),
    responses((status = 200, description = "Active students in the grade", body = Vec<Student>)),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students_by_grade(
    State(state): State<AppState>,
    Path(grade_id): Path<i64>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.students.find_by_grade(grade_id).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/by-subject/{subject_id}",
    params(("subject_id" = i64, Path, description = "Subject ID")),
    responses((status = 200, description = "Active students taking the subject", body = Vec<Student>)),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students_by_subject(
    State(state): State<AppState>,
    Path(subject_id): Path<i64>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.students.find_by_subject(subject_id).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/by-enrollment-year",
    params(EnrollmentYearQuery),
    responses((status = 200, description = "Active students enrolled that year", body = Vec<Student>)),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students_by_enrollment_year(
    State(state): State<AppState>,
    Query(query): Query<EnrollmentYearQuery>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.students.find_by_enrollment_year(query.year).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/by-enrollment/{enrollment_number}",
    params(("enrollment_number" = String, Path, description = "Enrollment number, any case")),
    responses(
        (status = 200, description = "Active student", body = Student),
        (status = 404, description = "No active student with this enrollment number", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student_by_enrollment_number(
    State(state): State<AppState>,
    Path(enrollment_number): Path<String>,
) -> Result<Json<Student>, AppError> {
    let student = state
        .students
        .find_by_enrollment_number(&enrollment_number)
        .await?;
    Ok(Json(student))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Active student", body = Student),
        (status = 404, description = "No active student with this ID", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, AppError> {
    let student = state.students.find_one(id).await?;
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student ID")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 400, description = "Invalid input or unknown role, grade or subject", body = ErrorResponse),
        (status = 404, description = "No active student with this ID", body = ErrorResponse),
        (status = 409, description = "Email or enrollment number already in use", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> Result<Json<Student>, AppError> {
    let student = state.students.update(id, dto).await?;
    Ok(Json(student))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student removed", body = MessageResponse),
        (status = 404, description = "No active student with this ID", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state.students.remove(id).await?;
    Ok(Json(message))
}
