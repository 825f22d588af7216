//! Create-admin command handler

use validator::Validate;

use crate::api::dto::CreateAdminRequest;
use crate::config::Settings;
use crate::db::establish_async_connection_pool;
use crate::error::AppResult;
use crate::models::Admin;
use crate::services::AdminService;
use crate::state::AppState;

/// Handler for the create-admin command
pub struct CreateAdminCommandHandler {
    config: Settings,
}

impl CreateAdminCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Connects to the database and stores a new admin.
    ///
    /// Input goes through the same rules as `POST /api/admins`.
    pub async fn execute(&self, username: String, email: String, password: String) -> AppResult<()> {
        let request = Self::validated_request(username, email, password)?;

        let pool = establish_async_connection_pool(&self.config.database).await?;
        let state = AppState::new(pool, &self.config)?;

        let admin = Self::create(&state.services.admins, request).await?;
        println!("✓ Created admin '{}' <{}> with id {}", admin.username, admin.email, admin.id);
        Ok(())
    }

    fn validated_request(
        username: String,
        email: String,
        password: String,
    ) -> AppResult<CreateAdminRequest> {
        let request = CreateAdminRequest {
            username: Some(username),
            email: Some(email),
            password: Some(password),
        };
        request.validate()?;
        Ok(request)
    }

    async fn create(service: &AdminService, request: CreateAdminRequest) -> AppResult<Admin> {
        let admin = service.create_admin(request.into_input()).await?;
        tracing::info!(admin_id = admin.id, username = %admin.username, "Admin created from CLI");
        Ok(admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::error::AppError;
    use crate::test_support::InMemoryAdminStore;
    use crate::utils::password::test_hasher;

    #[test]
    fn test_rejects_invalid_email_before_connecting() {
        let result = CreateAdminCommandHandler::validated_request(
            "maria".to_string(),
            "not-an-email".to_string(),
            "segredo123".to_string(),
        );

        assert!(matches!(result, Err(AppError::ValidationErrors { .. })));
    }

    #[test]
    fn test_rejects_empty_password() {
        let result = CreateAdminCommandHandler::validated_request(
            "maria".to_string(),
            "maria@example.com".to_string(),
            String::new(),
        );

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_create_stores_hashed_admin() {
        let store = Arc::new(InMemoryAdminStore::new());
        let service = AdminService::new(store.clone(), test_hasher());
        let request = CreateAdminCommandHandler::validated_request(
            "maria".to_string(),
            "maria@example.com".to_string(),
            "segredo123".to_string(),
        )
        .unwrap();

        let admin = CreateAdminCommandHandler::create(&service, request).await.unwrap();

        assert_eq!(admin.username, "maria");
        assert_ne!(admin.password, "segredo123");
        assert!(test_hasher().verify("segredo123", &admin.password));
        assert_eq!(store.admins().len(), 1);
    }

    #[tokio::test]
    async fn test_create_reports_duplicate() {
        let store = Arc::new(InMemoryAdminStore::new());
        let service = AdminService::new(store, test_hasher());

        for expected_ok in [true, false] {
            let request = CreateAdminCommandHandler::validated_request(
                "maria".to_string(),
                "maria@example.com".to_string(),
                "segredo123".to_string(),
            )
            .unwrap();
            let result = CreateAdminCommandHandler::create(&service, request).await;
            assert_eq!(result.is_ok(), expected_ok);
        }
    }
}
