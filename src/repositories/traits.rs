use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Admin, Emprego, EmpregoChanges, EmpregoWithRelations, NewAdmin};

/// Persistence operations for admin accounts.
#[async_trait]
pub trait AdminStore: Send + Sync {
    /// All admins ordered by id.
    async fn list_all(&self) -> AppResult<Vec<Admin>>;

    /// Inserts an admin and returns the stored row with its generated id.
    async fn create(&self, new_admin: NewAdmin) -> AppResult<Admin>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>>;
}

/// Persistence operations for job listings.
///
/// Every method issues exactly one statement.
#[async_trait]
pub trait EmpregoStore: Send + Sync {
    /// All listings with their branch and region, ordered by id.
    async fn list_with_relations(&self) -> AppResult<Vec<EmpregoWithRelations>>;

    /// Looks up one listing with its branch and region eagerly joined.
    async fn find_with_relations(&self, id: i32) -> AppResult<Option<EmpregoWithRelations>>;

    async fn create(&self, changes: EmpregoChanges) -> AppResult<Emprego>;

    /// Replaces every column of the listing. `None` when no row has `id`.
    async fn update(&self, id: i32, changes: EmpregoChanges) -> AppResult<Option<Emprego>>;

    /// Returns the number of deleted rows (0 or 1).
    async fn delete(&self, id: i32) -> AppResult<usize>;
}
