//! Job listing repository for async database operations.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppResult, DatabaseErrorConverter};
use crate::models::{Emprego, EmpregoChanges, EmpregoWithRelations, Ramo, Regiao};
use crate::repositories::EmpregoStore;
use crate::schema::{empregos, ramos, regioes};

#[derive(Clone)]
pub struct EmpregoRepository {
    pool: AsyncDbPool,
}

impl EmpregoRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmpregoStore for EmpregoRepository {
    async fn list_with_relations(&self) -> AppResult<Vec<EmpregoWithRelations>> {
        let mut conn = self.pool.get().await?;

        let rows = empregos::table
            .inner_join(ramos::table)
            .inner_join(regioes::table)
            .order(empregos::id.asc())
            .select((Emprego::as_select(), Ramo::as_select(), Regiao::as_select()))
            .load::<(Emprego, Ramo, Regiao)>(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "listar empregos"))?;

        Ok(rows.into_iter().map(EmpregoWithRelations::from).collect())
    }

    async fn find_with_relations(&self, emprego_id: i32) -> AppResult<Option<EmpregoWithRelations>> {
        let mut conn = self.pool.get().await?;

        let row = empregos::table
            .inner_join(ramos::table)
            .inner_join(regioes::table)
            .filter(empregos::id.eq(emprego_id))
            .select((Emprego::as_select(), Ramo::as_select(), Regiao::as_select()))
            .first::<(Emprego, Ramo, Regiao)>(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "buscar emprego"))?;

        Ok(row.map(EmpregoWithRelations::from))
    }

    async fn create(&self, changes: EmpregoChanges) -> AppResult<Emprego> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(empregos::table)
            .values(&changes)
            .returning(Emprego::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "criar emprego"))
    }

    async fn update(&self, emprego_id: i32, changes: EmpregoChanges) -> AppResult<Option<Emprego>> {
        let mut conn = self.pool.get().await?;

        diesel::update(empregos::table.find(emprego_id))
            .set(&changes)
            .returning(Emprego::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "atualizar emprego"))
    }

    async fn delete(&self, emprego_id: i32) -> AppResult<usize> {
        let mut conn = self.pool.get().await?;

        diesel::delete(empregos::table.find(emprego_id))
            .execute(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "deletar emprego"))
    }
}
