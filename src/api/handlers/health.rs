//! Liveness probe.

use axum::{Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::HEALTH_TAG;
use crate::api::dto::HealthResponse;
use crate::state::AppState;

pub fn health_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(health_check))
}

/// GET /health
///
/// Answers as long as the process serves requests; does not touch the database.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        name: state.application.name.clone(),
        version: state.application.version.clone(),
    })
}
