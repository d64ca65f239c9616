use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_student, delete_student, get_student, get_student_by_enrollment_number, get_students,
    get_students_by_enrollment_year, get_students_by_grade, get_students_by_subject,
    update_student,
};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_student).get(get_students))
        .route("/by-grade/{grade_id}", get(get_students_by_grade))
        .route("/by-subject/{subject_id}", get(get_students_by_subject))
        .route("/by-enrollment-year", get(get_students_by_enrollment_year))
        .route(
            "/by-enrollment/{enrollment_number}",
            get(get_student_by_enrollment_number),
        )
        .route(
            "/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
}
