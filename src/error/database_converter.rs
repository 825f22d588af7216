use crate::error::app_error::snake_to_camel;
use crate::error::{AppError, ConstraintParser};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Utility for converting Diesel errors to structured `AppError` variants.
///
/// `operation` is a short Portuguese verb phrase ("buscar emprego") that
/// ends up in the generic 500 message when nothing more specific applies.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info, operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "Registro".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: Box<dyn diesel::result::DatabaseErrorInformation + Send + Sync>,
        operation: &str,
    ) -> AppError {
        // PostgreSQL reports "Key (col)=(value)" in DETAIL, not in the primary message
        let text = match info.details() {
            Some(details) => format!("{}\n{}", info.message(), details),
            None => info.message().to_string(),
        };
        let message = text.as_str();
        let constraint_name = info.constraint_name();

        match kind {
            DatabaseErrorKind::UniqueViolation => {
                match ConstraintParser::parse_unique_violation(message, constraint_name) {
                    Some((entity, field, value)) => AppError::Duplicate {
                        entity,
                        field: snake_to_camel(&field),
                        value,
                    },
                    None => Self::generic(operation, "Unique constraint violation", message),
                }
            }
            DatabaseErrorKind::ForeignKeyViolation => {
                match ConstraintParser::parse_foreign_key_violation(message, constraint_name) {
                    Some((_, field, value)) => AppError::Validation {
                        field: snake_to_camel(&field),
                        reason: format!("Referência inexistente: '{}'.", value),
                    },
                    None => Self::generic(operation, "Foreign key constraint violation", message),
                }
            }
            DatabaseErrorKind::NotNullViolation => {
                match ConstraintParser::parse_not_null_violation(message) {
                    Some((_, field)) => AppError::Validation {
                        field: snake_to_camel(&field),
                        reason: "Campo obrigatório.".to_string(),
                    },
                    None => Self::generic(operation, "Not null constraint violation", message),
                }
            }
            _ => Self::generic(operation, "Database error", message),
        }
    }

    fn generic(operation: &str, label: &str, message: &str) -> AppError {
        AppError::Database {
            operation: operation.to_string(),
            source: anyhow::anyhow!("{}: {}", label, message),
        }
    }
}
