use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use reportcard_core::{AppError, ErrorResponse, MessageResponse};
use reportcard_models::StatusQuery;

use crate::modules::student_subjects::model::{
    AcademicPeriodQuery, CompleteSubjectDto, CreateStudentSubjectDto, StudentSubject,
    UpdateStudentSubjectDto,
};
use crate::state::AppState;
use crate::validator::{Path, Query, ValidatedJson};

#[utoipa::path(
    post,
    path = "/api/student-subjects",
    request_body = CreateStudentSubjectDto,
    responses(
        (status = 201, description = "Student enrolled", body = StudentSubject),
        (status = 400, description = "Invalid input or unknown student or subject", body = ErrorResponse),
        (status = 409, description = "Already enrolled for this academic period", body = ErrorResponse)
    ),
    tag = "Student Subjects"
)]
#[instrument(skip(state))]
pub async fn create_student_subject(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentSubjectDto>,
) -> Result<(StatusCode, Json<StudentSubject>), AppError> {
    let enrollment = state.student_subjects.create(dto).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

#[utoipa::path(
    get,
    path = "/api/student-subjects",
    params(StatusQuery),
    responses((status = 200, description = "Enrollments, filtered by status when given", body = Vec<StudentSubject>)),
    tag = "Student Subjects"
)]
#[instrument(skip(state))]
pub async fn get_student_subjects(
    State(state): State<AppState>,
    Query(params): Query<StatusQuery>,
) -> Result<Json<Vec<StudentSubject>>, AppError> {
    let enrollments = state
        .student_subjects
        .find_all_by_status(params.status)
        .await?;
    Ok(Json(enrollments))
}

#[utoipa::path(
    get,
    path = "/api/student-subjects/student/{student_id}",
    params(("student_id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Active enrollments of the student", body = Vec<StudentSubject>),
        (status = 404, description = "The student has no active enrollments", body = ErrorResponse)
    ),
    tag = "Student Subjects"
)]
#[instrument(skip(state))]
pub async fn get_student_subjects_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<StudentSubject>>, AppError> {
    let enrollments = state.student_subjects.find_by_student(student_id).await?;
    Ok(Json(enrollments))
}

#[utoipa::path(
    get,
    path = "/api/student-subjects/subject/{subject_id}",
    params(("subject_id" = i64, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Active enrollments in the subject", body = Vec<StudentSubject>),
        (status = 404, description = "The subject has no active enrollments", body = ErrorResponse)
    ),
    tag = "Student Subjects"
)]
#[instrument(skip(state))]
pub async fn get_student_subjects_by_subject(
    State(state): State<AppState>,
    Path(subject_id): Path<i64>,
) -> Result<Json<Vec<StudentSubject>>, AppError> {
    let enrollments = state.student_subjects.find_by_subject(subject_id).await?;
    Ok(Json(enrollments))
}

#[utoipa::path(
    get,
    path = "/api/student-subjects/academic-period",
    params(AcademicPeriodQuery),
    responses((status = 200, description = "Active enrollments in the period", body = Vec<StudentSubject>)),
    tag = "Student Subjects"
)]
#[instrument(skip(state))]
pub async fn get_student_subjects_by_academic_period(
    State(state): State<AppState>,
    Query(query): Query<AcademicPeriodQuery>,
) -> Result<Json<Vec<StudentSubject>>, AppError> {
    let enrollments = state
        .student_subjects
        .find_by_academic_period(query.year, query.semester)
        .await?;
    Ok(Json(enrollments))
}

#[utoipa::path(
    get,
    path = "/api/student-subjects/{id}",
    params(("id" = i64, Path, description = "Enrollment ID")),
    responses(
        (status = 200, description = "Active enrollment", body = StudentSubject),
        (status = 404, description = "No active enrollment with this ID", body = ErrorResponse)
    ),
    tag = "Student Subjects"
)]
#[instrument(skip(state))]
pub async fn get_student_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StudentSubject>, AppError> {
    let enrollment = state.student_subjects.find_one(id).await?;
    Ok(Json(enrollment))
}

#[utoipa::path(
    patch,
    path = "/api/student-subjects/{id}",
    params(("id" = i64, Path, description = "Enrollment ID")),
    request_body = UpdateStudentSubjectDto,
    responses(
        (status = 200, description = "Enrollment updated", body = StudentSubject),
        (status = 400, description = "Invalid input or unknown student or subject", body = ErrorResponse),
        (status = 404, description = "No active enrollment with this ID", body = ErrorResponse),
        (status = 409, description = "Already enrolled for this academic period", body = ErrorResponse)
    ),
    tag = "Student Subjects"
)]
#[instrument(skip(state))]
pub async fn update_student_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentSubjectDto>,
) -> Result<Json<StudentSubject>, AppError> {
    let enrollment = state.student_subjects.update(id, dto).await?;
    Ok(Json(enrollment))
}

#[utoipa::path(
    patch,
    path = "/api/student-subjects/{id}/complete",
    params(("id" = i64, Path, description = "Enrollment ID")),
    request_body = CompleteSubjectDto,
    responses(
        (status = 200, description = "Final grade recorded", body = StudentSubject),
        (status = 400, description = "Final grade outside 0 to 100", body = ErrorResponse),
        (status = 404, description = "No active enrollment with this ID", body = ErrorResponse)
    ),
    tag = "Student Subjects"
)]
#[instrument(skip(state))]
pub async fn complete_student_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<CompleteSubjectDto>,
) -> Result<Json<StudentSubject>, AppError> {
    let enrollment = state.student_subjects.complete_subject(id, dto).await?;
    Ok(Json(enrollment))
}

#[utoipa::path(
    delete,
    path = "/api/student-subjects/{id}",
    params(("id" = i64, Path, description = "Enrollment ID")),
    responses(
        (status = 200, description = "Enrollment removed", body = MessageResponse),
        (status = 404, description = "No active enrollment with this ID", body = ErrorResponse)
    ),
    tag = "Student Subjects"
)]
#[instrument(skip(state))]
pub async fn delete_student_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state.student_subjects.remove(id).await?;
    Ok(Json(message))
}
