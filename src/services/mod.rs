//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! stores and handlers.

mod admin_service;
mod emprego_service;

pub use admin_service::{AdminInput, AdminService};
pub use emprego_service::EmpregoService;

use crate::repositories::Repositories;
use crate::utils::PasswordHasher;

/// Aggregates all services; used inside the Axum application state.
///
/// Cloning only bumps `Arc` counts.
#[derive(Clone)]
pub struct Services {
    pub admins: AdminService,
    pub empregos: EmpregoService,
}

impl Services {
    pub fn new(repos: Repositories, hasher: PasswordHasher) -> Self {
        Self {
            admins: AdminService::new(repos.admins, hasher),
            empregos: EmpregoService::new(repos.empregos),
        }
    }
}
