//! Router configuration for the API.

use axum::{Json, Router, http::Method, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware, session_middleware};
use crate::state::AppState;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Last added runs first:
/// 1. CORS
/// 2. Request ID
/// 3. Logging (needs the request ID)
/// 4. Session resolution
///
/// # Routes
/// - `/api/admins`, `/api/empregos`, `/api/auth`
/// - `/health`
/// - `/api-docs/openapi.json`
pub fn create_router(state: AppState) -> Router {
    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/admins", handlers::admins::admin_routes())
        .nest("/api/empregos", handlers::empregos::emprego_routes())
        .nest("/api/auth", handlers::auth::auth_routes())
        .merge(handlers::health::health_routes())
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    router
        .route(OPENAPI_PATH, get(move || async move { Json(openapi) }))
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .with_state(state)
}
