use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_role, delete_role, get_role, get_roles, update_role};

pub fn init_roles_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_role).get(get_roles))
        .route("/{id}", get(get_role).put(update_role).delete(delete_role))
}
