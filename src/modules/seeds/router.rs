use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{clear_seed_data, seed_database};

pub fn init_seeds_router() -> Router<AppState> {
    Router::new().route("/", post(seed_database).delete(clear_seed_data))
}
