//! Request/response logging inside an `http_request` span.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{Instrument, info, info_span};

use super::RequestId;

/// Logs method, path, status and duration, correlated by request ID.
///
/// Must run inside `request_id_middleware`.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let span = info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = %request_id
    );

    async move {
        info!("Request received");

        let start = Instant::now();
        let response = next.run(request).await;
        let duration = start.elapsed();

        let status = response.status();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), duration_ms = duration.as_millis() as u64, "Response sent");
        } else {
            info!(status = status.as_u16(), duration_ms = duration.as_millis() as u64, "Response sent");
        }

        response
    }
    .instrument(span)
    .await
}
