use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    complete_student_subject, create_student_subject, delete_student_subject,
    get_student_subject, get_student_subjects, get_student_subjects_by_academic_period,
    get_student_subjects_by_student, get_student_subjects_by_subject, update_student_subject,
};

pub fn init_student_subjects_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_student_subject).get(get_student_subjects))
        .route("/student/{student_id}", get(get_student_subjects_by_student))
        .route("/subject/{subject_id}", get(get_student_subjects_by_subject))
        .route(
            "/academic-period",
            get(get_student_subjects_by_academic_period),
        )
        .route(
            "/{id}",
            get(get_student_subject)
                .patch(update_student_subject)
                .delete(delete_student_subject),
        )
        .route("/{id}/complete", patch(complete_student_subject))
}
