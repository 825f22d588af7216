//! Admin account operations.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{Admin, NewAdmin};
use crate::repositories::AdminStore;
use crate::utils::PasswordHasher;

const INVALID_CREDENTIALS: &str = "Credenciais inválidas.";

/// Plaintext admin data as received from a client or the CLI.
#[derive(Debug, Clone)]
pub struct AdminInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone)]
pub struct AdminService {
    store: Arc<dyn AdminStore>,
    hasher: PasswordHasher,
}

impl AdminService {
    pub fn new(store: Arc<dyn AdminStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    pub async fn list_admins(&self) -> AppResult<Vec<Admin>> {
        self.store.list_all().await
    }

    /// Hashes the password and stores the admin.
    ///
    /// The plaintext never reaches the store.
    pub async fn create_admin(&self, input: AdminInput) -> AppResult<Admin> {
        let password = self.hash_blocking(input.password).await?;

        self.store
            .create(NewAdmin {
                username: input.username,
                email: input.email,
                password,
            })
            .await
    }

    /// Resolves the admin owning `email` if `password` matches its hash.
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn authenticate(&self, email: &str, password: String) -> AppResult<Admin> {
        let admin = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        let hasher = self.hasher.clone();
        let stored = admin.password.clone();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored))
            .await
            .map_err(|e| AppError::Internal {
                source: anyhow::anyhow!("Password verification task failed: {}", e),
            })?;

        if !matches {
            tracing::info!(admin_id = admin.id, "Rejected login with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        Ok(admin)
    }

    async fn hash_blocking(&self, password: String) -> AppResult<String> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::Internal {
                source: anyhow::anyhow!("Password hashing task failed: {}", e),
            })?
    }
}
