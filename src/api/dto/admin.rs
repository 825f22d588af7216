//! Admin-related Data Transfer Objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::limits::{max_50, max_255};
use crate::models::Admin;
use crate::services::AdminInput;

/// Create admin request payload
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateAdminRequest {
    #[validate(
        required(message = "Todos os campos são obrigatórios."),
        length(min = 1, message = "Todos os campos são obrigatórios."),
        custom(function = max_50)
    )]
    #[schema(example = "maria", value_type = String)]
    pub username: Option<String>,

    #[validate(
        required(message = "Todos os campos são obrigatórios."),
        length(min = 1, message = "Todos os campos são obrigatórios."),
        email(message = "Email inválido."),
        custom(function = max_255)
    )]
    #[schema(example = "maria@example.com", format = "email", value_type = String)]
    pub email: Option<String>,

    /// Plain text; hashed before it is stored
    #[validate(
        required(message = "Todos os campos são obrigatórios."),
        length(min = 1, message = "Todos os campos são obrigatórios.")
    )]
    #[schema(example = "segredo123", format = "password", value_type = String)]
    pub password: Option<String>,
}

impl CreateAdminRequest {
    /// Only called after validation, so every field is present.
    pub fn into_input(self) -> AdminInput {
        AdminInput {
            username: self.username.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        }
    }
}

/// Stored admin record
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Argon2id PHC hash, never the plaintext
    #[schema(example = "$argon2id$v=19$m=19456,t=2,p=1$...")]
    pub password: String,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.username,
            email: admin.email,
            password: admin.password,
        }
    }
}

/// Admin as listed publicly; the hash stays out of unauthenticated reads
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminSummary {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl From<Admin> for AdminSummary {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.username,
            email: admin.email,
        }
    }
}
