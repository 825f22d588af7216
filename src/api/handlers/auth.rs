//! Login handler.

use axum::{Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AUTH_TAG;
use crate::api::dto::{ErrorResponse, LoginRequest, LoginResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::ValidatedJson;
use crate::utils::jwt::issue_session_token;

pub fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(login))
}

/// POST /api/auth/login - Exchange credentials for a session token
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let email = payload.email.unwrap_or_default();
    let admin = state
        .services
        .admins
        .authenticate(&email, payload.password.unwrap_or_default())
        .await?;

    let token = issue_session_token(
        admin.id,
        admin.email.clone(),
        admin.username.clone(),
        &state.session.secret,
        state.session.expiration_hours,
    )?;

    tracing::info!(admin_id = admin.id, "Admin logged in");
    Ok(Json(LoginResponse {
        token,
        admin: admin.into(),
    }))
}
