use axum::{Json, extract::State};
use tracing::instrument;

use reportcard_core::{AppError, ErrorResponse};

use crate::state::AppState;

use super::model::SeedResponse;
use super::service::SeedService;

#[utoipa::path(
    post,
    path = "/api/seeds",
    responses(
        (status = 200, description = "Database seeded", body = SeedResponse),
        (status = 500, description = "Seeding failed", body = ErrorResponse)
    ),
    tag = "Seeds"
)]
#[instrument(skip(state))]
pub async fn seed_database(State(state): State<AppState>) -> Result<Json<SeedResponse>, AppError> {
    let response = SeedService::new(state).seed_all().await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/seeds",
    responses(
        (status = 200, description = "Every active record soft-deleted", body = SeedResponse),
        (status = 500, description = "Clearing failed", body = ErrorResponse)
    ),
    tag = "Seeds"
)]
#[instrument(skip(state))]
pub async fn clear_seed_data(
    State(state): State<AppState>,
) -> Result<Json<SeedResponse>, AppError> {
    let response = SeedService::new(state).clear_all().await?;
    Ok(Json(response))
}
