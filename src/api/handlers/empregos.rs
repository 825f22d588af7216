//! Job listing handlers.
//!
//! Extractors run in argument order, so each handler checks the session
//! first, then the path id, then the body, before touching the store.

use axum::{
    Json,
    extract::{FromRequestParts, Path, State},
    http::{StatusCode, request::Parts},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::EMPREGO_TAG;
use crate::api::dto::{
    EmpregoDetailResponse, EmpregoRequest, EmpregoResponse, ErrorResponse, MessageResponse,
};
use crate::api::middleware::RequireSession;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::ValidatedJson;

const INVALID_ID: &str = "ID inválido.";

/// Integer listing id taken from the `{id}` path segment.
///
/// Anything that does not parse as an `i32` is rejected with 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmpregoId(pub i32);

impl<S> FromRequestParts<S> for EmpregoId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request(INVALID_ID))?;

        raw.parse::<i32>()
            .map(EmpregoId)
            .map_err(|_| AppError::bad_request(INVALID_ID))
    }
}

/// # Routes
/// - `GET /` - List listings with relations
/// - `POST /` - Create a listing (session required)
/// - `GET /{id}` - One listing with relations
/// - `PUT /{id}` - Replace a listing (session required)
/// - `DELETE /{id}` - Delete a listing (session required)
pub fn emprego_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_empregos, create_emprego))
        .routes(routes!(get_emprego, update_emprego, delete_emprego))
}

#[utoipa::path(
    get,
    path = "/",
    tag = EMPREGO_TAG,
    responses(
        (status = 200, description = "All listings", body = Vec<EmpregoDetailResponse>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn list_empregos(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EmpregoDetailResponse>>> {
    let rows = state.services.empregos.list_empregos().await?;
    Ok(Json(rows.into_iter().map(EmpregoDetailResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/",
    tag = EMPREGO_TAG,
    request_body = EmpregoRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Listing created", body = EmpregoResponse),
        (status = 400, description = "Missing fields or unknown ramo/regiao", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn create_emprego(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    ValidatedJson(payload): ValidatedJson<EmpregoRequest>,
) -> AppResult<(StatusCode, Json<EmpregoResponse>)> {
    let emprego = state
        .services
        .empregos
        .create_emprego(payload.into_changes())
        .await?;
    tracing::info!(emprego_id = emprego.id, admin_id = session.admin_id, "Emprego created");
    Ok((StatusCode::CREATED, Json(emprego.into())))
}

/// GET /api/empregos/{id} - Listing with its ramo and regiao
#[utoipa::path(
    get,
    path = "/{id}",
    tag = EMPREGO_TAG,
    params(("id" = i32, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Listing found", body = EmpregoDetailResponse),
        (status = 400, description = "Non-numeric id", body = ErrorResponse),
        (status = 404, description = "No listing with this id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn get_emprego(
    State(state): State<AppState>,
    EmpregoId(id): EmpregoId,
) -> AppResult<Json<EmpregoDetailResponse>> {
    let row = state.services.empregos.get_emprego(id).await?;
    Ok(Json(row.into()))
}

/// PUT /api/empregos/{id} - Replace every field of a listing
#[utoipa::path(
    put,
    path = "/{id}",
    tag = EMPREGO_TAG,
    params(("id" = i32, Path, description = "Listing id")),
    request_body = EmpregoRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Listing updated", body = EmpregoResponse),
        (status = 400, description = "Non-numeric id, missing fields or unknown ramo/regiao", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "No listing with this id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn update_emprego(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    EmpregoId(id): EmpregoId,
    ValidatedJson(payload): ValidatedJson<EmpregoRequest>,
) -> AppResult<Json<EmpregoResponse>> {
    let emprego = state
        .services
        .empregos
        .update_emprego(id, payload.into_changes())
        .await?;
    tracing::info!(emprego_id = id, admin_id = session.admin_id, "Emprego updated");
    Ok(Json(emprego.into()))
}

/// DELETE /api/empregos/{id}
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = EMPREGO_TAG,
    params(("id" = i32, Path, description = "Listing id")),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Listing deleted", body = MessageResponse),
        (status = 400, description = "Non-numeric id", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 404, description = "No listing with this id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn delete_emprego(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    EmpregoId(id): EmpregoId,
) -> AppResult<Json<MessageResponse>> {
    state.services.empregos.delete_emprego(id).await?;
    tracing::info!(emprego_id = id, admin_id = session.admin_id, "Emprego deleted");
    Ok(Json(MessageResponse::new("Emprego deletado com sucesso.")))
}
