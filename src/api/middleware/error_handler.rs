//! Error handler for converting AppError to HTTP responses.
//!
//! Every failure leaves the API as `{"error": "...", "details"?: ...}`.
//! Server-side failures are logged with their cause and answered with a
//! generic message so store internals never reach the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::ErrorResponse;
use crate::error::{AppError, ValidationFieldError};

const INTERNAL_ERROR: &str = "Erro interno do servidor.";

impl IntoResponse for AppError {
    /// # Status Code Mapping
    /// - NotFound → 404
    /// - Duplicate → 409
    /// - Validation, ValidationErrors, BadRequest → 400
    /// - Unauthorized → 401
    /// - ConnectionPool → 503
    /// - Database, Configuration, Internal → 500
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound { entity, .. } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(format!("{} não encontrado.", entity)),
            ),
            AppError::Duplicate { field, value, .. } => (
                StatusCode::CONFLICT,
                ErrorResponse::new(format!("Já existe um registro com {} '{}'.", field, value))
                    .with_details(json!({ "field": field })),
            ),
            AppError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(reason.clone()).with_details(json!({ "field": field })),
            ),
            AppError::ValidationErrors { errors } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(summarize(errors)).with_details(json!(errors)),
            ),
            AppError::BadRequest { message, details } => {
                let body = ErrorResponse::new(message.clone());
                let body = match details {
                    Some(details) => body.with_details(details.clone()),
                    None => body,
                };
                (StatusCode::BAD_REQUEST, body)
            }
            AppError::Unauthorized { message } => {
                (StatusCode::UNAUTHORIZED, ErrorResponse::new(message.clone()))
            }
            AppError::Database { operation, source } => {
                tracing::error!(operation = %operation, error = %format!("{:#}", source), "Database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(format!("Erro ao {}.", operation)),
                )
            }
            AppError::ConnectionPool { source } => {
                tracing::error!(error = %format!("{:#}", source), "Database connection unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new("Serviço indisponível."),
                )
            }
            AppError::Configuration { key, source } => {
                tracing::error!(key = %key, error = %format!("{:#}", source), "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(INTERNAL_ERROR),
                )
            }
            AppError::Internal { source } => {
                tracing::error!(error = %format!("{:#}", source), "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(INTERNAL_ERROR),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// One shared message stands for the whole payload; mixed failures get a
/// generic one and the per-field list stays in `details`.
fn summarize(errors: &[ValidationFieldError]) -> String {
    match errors.split_first() {
        Some((first, rest)) if rest.iter().all(|e| e.message == first.message) => {
            first.message.clone()
        }
        _ => "Dados inválidos.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found() {
        let (status, body) = render(AppError::not_found_by_id("Emprego", 9)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Emprego não encontrado." }));
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let (status, body) = render(AppError::unauthorized("Não autorizado.")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Não autorizado." }));
    }

    #[tokio::test]
    async fn test_bad_request_without_details_omits_key() {
        let (status, body) = render(AppError::bad_request("ID inválido.")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "ID inválido." }));
    }

    #[tokio::test]
    async fn test_validation_errors_share_message() {
        let errors = vec![
            ValidationFieldError {
                field: "ramoId".to_string(),
                message: "Todos os campos são obrigatórios.".to_string(),
            },
            ValidationFieldError {
                field: "titulo".to_string(),
                message: "Todos os campos são obrigatórios.".to_string(),
            },
        ];
        let (status, body) = render(AppError::ValidationErrors { errors }).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Todos os campos são obrigatórios.");
        assert_eq!(body["details"][0]["field"], "ramoId");
        assert_eq!(body["details"][1]["field"], "titulo");
    }

    #[tokio::test]
    async fn test_validation_errors_mixed_messages() {
        let errors = vec![
            ValidationFieldError {
                field: "email".to_string(),
                message: "Email inválido.".to_string(),
            },
            ValidationFieldError {
                field: "password".to_string(),
                message: "Todos os campos são obrigatórios.".to_string(),
            },
        ];
        let (_, body) = render(AppError::ValidationErrors { errors }).await;
        assert_eq!(body["error"], "Dados inválidos.");
    }

    #[tokio::test]
    async fn test_duplicate_is_conflict() {
        let (status, body) = render(AppError::Duplicate {
            entity: "admins".to_string(),
            field: "email".to_string(),
            value: "a@b.c".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["details"]["field"], "email");
    }

    #[tokio::test]
    async fn test_database_error_hides_cause() {
        let (status, body) = render(AppError::Database {
            operation: "deletar emprego".to_string(),
            source: anyhow::anyhow!("relation \"empregos\" does not exist"),
        })
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Erro ao deletar emprego." }));
    }

    #[tokio::test]
    async fn test_pool_error_is_service_unavailable() {
        let (status, _) = render(AppError::ConnectionPool {
            source: anyhow::anyhow!("timed out"),
        })
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_internal_error_is_generic() {
        let (status, body) = render(AppError::Internal {
            source: anyhow::anyhow!("secret detail"),
        })
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": INTERNAL_ERROR }));
    }
}
