use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const ADMIN_TAG: &str = "Admins";
pub const EMPREGO_TAG: &str = "Empregos";
pub const AUTH_TAG: &str = "Auth";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Emprega Admin",
        description = "Back-office API for admins and job listings",
    ),
    modifiers(&SecurityAddon),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::error::ValidationFieldError,
        )
    ),
    tags(
        (name = ADMIN_TAG, description = "Admin account endpoints"),
        (name = EMPREGO_TAG, description = "Job listing endpoints"),
        (name = AUTH_TAG, description = "Session endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from POST /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
