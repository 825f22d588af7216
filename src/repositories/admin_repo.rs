//! Admin repository for async database operations.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppResult, DatabaseErrorConverter};
use crate::models::{Admin, NewAdmin};
use crate::repositories::AdminStore;

/// Admin repository holding an async connection pool.
///
/// `AsyncDbPool` (bb8::Pool) is an `Arc` internally, so cloning is cheap.
#[derive(Clone)]
pub struct AdminRepository {
    pool: AsyncDbPool,
}

impl AdminRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminStore for AdminRepository {
    async fn list_all(&self) -> AppResult<Vec<Admin>> {
        use crate::schema::admins::dsl::*;
        let mut conn = self.pool.get().await?;

        admins
            .order(id.asc())
            .select(Admin::as_select())
            .load(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "listar admins"))
    }

    async fn create(&self, new_admin: NewAdmin) -> AppResult<Admin> {
        use crate::schema::admins::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(admins)
            .values(&new_admin)
            .returning(Admin::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "criar admin"))
    }

    async fn find_by_email(&self, admin_email: &str) -> AppResult<Option<Admin>> {
        use crate::schema::admins::dsl::*;
        let mut conn = self.pool.get().await?;

        admins
            .filter(email.eq(admin_email))
            .select(Admin::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "buscar admin"))
    }
}
