use crate::error::DatabaseErrorConverter;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// A single field failure reported by request validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationFieldError {
    /// Field name as it appears in the JSON payload
    pub field: String,
    /// Human readable failure message
    pub message: String,
}

/// Application-wide error type that represents all possible errors in the system.
///
/// Handlers return `AppResult<T>`; the `IntoResponse` implementation in
/// `api::middleware::error_handler` maps each variant to a status code and a
/// JSON body carrying an `error` string. Callers and tests branch on the
/// variant instead of matching message text.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Duplicate entry error for unique constraint violations
    #[error("Duplicate entry: {entity}.{field} = '{value}' already exists")]
    Duplicate {
        entity: String,
        field: String,
        value: String,
    },

    /// Validation error for a single field, usually raised by the store
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Validation errors collected from a request payload
    #[error("Validation failed for {} field(s)", errors.len())]
    ValidationErrors { errors: Vec<ValidationFieldError> },

    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Unauthorized access error with authentication message
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Shorthand for a bad request without details.
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            details: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError::Unauthorized {
            message: message.into(),
        }
    }

    /// Not found error for a lookup by primary key.
    pub fn not_found_by_id(entity: &str, id: i32) -> Self {
        AppError::NotFound {
            entity: entity.to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "acessar o banco de dados")
    }
}

impl From<diesel_async::pooled_connection::PoolError> for AppError {
    fn from(error: diesel_async::pooled_connection::PoolError) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::from(error),
        }
    }
}

impl From<bb8::RunError<diesel_async::pooled_connection::PoolError>> for AppError {
    fn from(error: bb8::RunError<diesel_async::pooled_connection::PoolError>) -> Self {
        AppError::ConnectionPool {
            source: anyhow::anyhow!("{}", error),
        }
    }
}

impl From<crate::config::error::ConfigError> for AppError {
    fn from(error: crate::config::error::ConfigError) -> Self {
        let key = match &error {
            crate::config::error::ConfigError::ValidationError { field, .. } => field.clone(),
            _ => "configuration".to_string(),
        };
        AppError::Configuration {
            key,
            source: anyhow::Error::from(error),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut collected: Vec<ValidationFieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let name = snake_to_camel(&field);
                field_errors.iter().map(move |e| ValidationFieldError {
                    field: name.clone(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();
        collected.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::ValidationErrors { errors: collected }
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest {
            message: "Corpo da requisição inválido.".to_string(),
            details: Some(serde_json::json!({ "reason": rejection.body_text() })),
        }
    }
}

/// Converts a Rust field name into the camelCase name used on the wire.
pub(crate) fn snake_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
