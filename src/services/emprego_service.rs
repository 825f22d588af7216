//! Job listing operations.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{Emprego, EmpregoChanges, EmpregoWithRelations};
use crate::repositories::EmpregoStore;

const ENTITY: &str = "Emprego";

/// Wraps the listing store and turns missing rows into `NotFound`.
#[derive(Clone)]
pub struct EmpregoService {
    store: Arc<dyn EmpregoStore>,
}

impl EmpregoService {
    pub fn new(store: Arc<dyn EmpregoStore>) -> Self {
        Self { store }
    }

    pub async fn list_empregos(&self) -> AppResult<Vec<EmpregoWithRelations>> {
        self.store.list_with_relations().await
    }

    pub async fn get_emprego(&self, id: i32) -> AppResult<EmpregoWithRelations> {
        self.store
            .find_with_relations(id)
            .await?
            .ok_or_else(|| AppError::not_found_by_id(ENTITY, id))
    }

    pub async fn create_emprego(&self, changes: EmpregoChanges) -> AppResult<Emprego> {
        self.store.create(changes).await
    }

    /// Full replace; a single UPDATE decides whether the row exists.
    pub async fn update_emprego(&self, id: i32, changes: EmpregoChanges) -> AppResult<Emprego> {
        self.store
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found_by_id(ENTITY, id))
    }

    pub async fn delete_emprego(&self, id: i32) -> AppResult<()> {
        match self.store.delete(id).await? {
            0 => Err(AppError::not_found_by_id(ENTITY, id)),
            _ => Ok(()),
        }
    }
}
