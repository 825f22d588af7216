//! Authentication-related Data Transfer Objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Admin;

/// Login request payload
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "Todos os campos são obrigatórios."),
        email(message = "Email inválido.")
    )]
    #[schema(example = "maria@example.com", format = "email", value_type = String)]
    pub email: Option<String>,

    #[validate(
        required(message = "Todos os campos são obrigatórios."),
        length(min = 1, message = "Todos os campos são obrigatórios.")
    )]
    #[schema(example = "segredo123", format = "password", value_type = String)]
    pub password: Option<String>,
}

/// Identity carried by a session
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionAdmin {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl From<Admin> for SessionAdmin {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.username,
            email: admin.email,
        }
    }
}

/// Login response with the signed session token
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Send as `Authorization: Bearer <token>`
    #[schema(example = "eyJ0eXAiOiJKV1QiLCJhbGc...")]
    pub token: String,
    pub admin: SessionAdmin,
}
