use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeedResponse {
    #[schema(example = "Database seeded successfully with sample data")]
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl SeedResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
