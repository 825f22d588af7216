//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `admin` - Admin account requests and responses
//! - `emprego` - Job listing requests and responses
//! - `auth` - Login
//! - `error` - Common error and message bodies

mod admin;
mod auth;
mod emprego;
mod error;
mod health;
mod limits;

pub use admin::{AdminResponse, AdminSummary, CreateAdminRequest};
pub use auth::{LoginRequest, LoginResponse, SessionAdmin};
pub use emprego::{
    EmpregoDetailResponse, EmpregoRequest, EmpregoResponse, RamoResponse, RegiaoResponse,
};
pub use error::{ErrorResponse, MessageResponse};
pub use health::HealthResponse;
