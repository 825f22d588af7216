//! Admin account handlers.

use axum::{Json, extract::State, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::ADMIN_TAG;
use crate::api::dto::{AdminResponse, AdminSummary, CreateAdminRequest, ErrorResponse};
use crate::api::middleware::RequireSession;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// # Routes
/// - `GET /` - List admins
/// - `POST /` - Create an admin (session required)
pub fn admin_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(list_admins, create_admin))
}

/// GET /api/admins - List all admins ordered by id
///
/// Public, so password hashes are left out.
#[utoipa::path(
    get,
    path = "/",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All admins", body = Vec<AdminSummary>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn list_admins(State(state): State<AppState>) -> AppResult<Json<Vec<AdminSummary>>> {
    let admins = state.services.admins.list_admins().await?;
    Ok(Json(admins.into_iter().map(AdminSummary::from).collect()))
}

/// POST /api/admins - Create an admin
///
/// The password is hashed before it is stored; the response carries the hash.
#[utoipa::path(
    post,
    path = "/",
    tag = ADMIN_TAG,
    request_body = CreateAdminRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Admin created", body = AdminResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 409, description = "Username or email already taken", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn create_admin(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    ValidatedJson(payload): ValidatedJson<CreateAdminRequest>,
) -> AppResult<(StatusCode, Json<AdminResponse>)> {
    let admin = state
        .services
        .admins
        .create_admin(payload.into_input())
        .await?;

    tracing::info!(admin_id = admin.id, created_by = session.admin_id, "Admin created");
    Ok((StatusCode::CREATED, Json(admin.into())))
}
