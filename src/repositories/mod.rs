//! Repository layer for data access operations.
//!
//! Each resource is reached through a store trait (`AdminStore`,
//! `EmpregoStore`); the Diesel-backed repositories are the production
//! implementations, and tests substitute in-memory ones.

mod admin_repo;
mod emprego_repo;
mod traits;

pub use admin_repo::AdminRepository;
pub use emprego_repo::EmpregoRepository;
pub use traits::{AdminStore, EmpregoStore};

use std::sync::Arc;

use crate::db::AsyncDbPool;

/// Aggregates all stores for convenient access.
///
/// Cloning only bumps the `Arc` counts.
#[derive(Clone)]
pub struct Repositories {
    pub admins: Arc<dyn AdminStore>,
    pub empregos: Arc<dyn EmpregoStore>,
}

impl Repositories {
    /// Creates the Diesel-backed stores sharing one connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            admins: Arc::new(AdminRepository::new(pool.clone())),
            empregos: Arc::new(EmpregoRepository::new(pool)),
        }
    }

    /// Builds the aggregate from arbitrary store implementations.
    pub fn from_stores(admins: Arc<dyn AdminStore>, empregos: Arc<dyn EmpregoStore>) -> Self {
        Self { admins, empregos }
    }
}
