//! Application state for Axum web framework.

use crate::config::{ApplicationConfig, SessionConfig, Settings};
use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::repositories::Repositories;
use crate::services::Services;
use crate::utils::PasswordHasher;

/// State shared by every handler.
///
/// Cloning only bumps `Arc` counts and copies small config values.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    /// Secret and lifetime for issuing and checking session tokens
    pub session: SessionConfig,
    pub application: ApplicationConfig,
}

impl AppState {
    /// Wires the Diesel-backed stores over `pool`.
    pub fn new(pool: AsyncDbPool, settings: &Settings) -> AppResult<Self> {
        Self::from_repositories(Repositories::new(pool), settings)
    }

    /// Wires arbitrary store implementations; the password hasher is built
    /// from `settings.password` here so bad cost parameters fail at startup.
    pub fn from_repositories(repos: Repositories, settings: &Settings) -> AppResult<Self> {
        let hasher = PasswordHasher::new(&settings.password)?;

        Ok(Self {
            services: Services::new(repos, hasher),
            session: settings.session.clone(),
            application: settings.application.clone(),
        })
    }
}
