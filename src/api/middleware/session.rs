//! Session resolution.
//!
//! `session_middleware` runs ahead of every handler and, when the request
//! carries a valid `Authorization: Bearer <token>`, stores the `Session` in
//! the request extensions. Handlers that mutate state take `RequireSession`,
//! which rejects before any other extractor runs.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt::{Claims, validate_session_token};

pub const UNAUTHORIZED_MESSAGE: &str = "Não autorizado.";

/// Authenticated admin identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub admin_id: i32,
    pub email: String,
    pub username: String,
}

impl TryFrom<Claims> for Session {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            admin_id: claims.admin_id()?,
            email: claims.email,
            username: claims.username,
        })
    }
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

/// Resolves the optional session; never rejects on its own.
///
/// A missing, malformed or expired token leaves the request anonymous.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let session = bearer_token(&request).and_then(|token| {
        validate_session_token(token, &state.session.secret)
            .and_then(Session::try_from)
            .map_err(|e| tracing::debug!(error = %e, "Ignoring invalid session token"))
            .ok()
    });

    if let Some(session) = session {
        request.extensions_mut().insert(session);
    }

    next.run(request).await
}

/// Extractor that requires a resolved session.
#[derive(Debug, Clone)]
pub struct RequireSession(pub Session);

impl<S> FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(RequireSession)
            .ok_or_else(|| AppError::unauthorized(UNAUTHORIZED_MESSAGE))
    }
}
