use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_teacher, delete_teacher, get_teacher, get_teachers, get_teachers_by_department,
    get_teachers_by_grade, get_teachers_by_subject, update_teacher,
};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_teacher).get(get_teachers))
        .route("/by-department", get(get_teachers_by_department))
        .route("/by-subject/{subject_id}", get(get_teachers_by_subject))
        .route("/by-grade/{grade_id}", get(get_teachers_by_grade))
        .route(
            "/{id}",
            get(get_teacher).put(update_teacher).delete(delete_teacher),
        )
}
