//! Health check DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "emprega-admin")]
    pub name: String,
    #[schema(example = "0.1.0")]
    pub version: String,
}
