//! Embedded schema migrations.
//!
//! `diesel_migrations` only drives synchronous connections, so these
//! helpers open a plain `PgConnection` on a blocking thread.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::error::{AppError, AppResult};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies every pending migration and returns the applied versions.
pub async fn run_pending_migrations(database_url: &str) -> AppResult<Vec<String>> {
    let database_url = database_url.to_string();
    tokio::task::spawn_blocking(move || {
        let mut conn = connect(&database_url)?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::Database {
                operation: "aplicar migrações".to_string(),
                source: anyhow::anyhow!("Migration error: {}", e),
            })?;
        Ok::<_, AppError>(applied.iter().map(|m| m.to_string()).collect::<Vec<String>>())
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })?
}

/// Lists migrations that have not been applied yet.
pub async fn pending_migrations(database_url: &str) -> AppResult<Vec<String>> {
    let database_url = database_url.to_string();
    tokio::task::spawn_blocking(move || {
        let mut conn = connect(&database_url)?;
        let pending = conn
            .pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::Database {
                operation: "verificar migrações".to_string(),
                source: anyhow::anyhow!("Migration error: {}", e),
            })?;
        Ok::<_, AppError>(pending.iter().map(|m| m.name().to_string()).collect::<Vec<String>>())
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })?
}

fn connect(database_url: &str) -> AppResult<PgConnection> {
    PgConnection::establish(database_url).map_err(|e| AppError::Database {
        operation: "conectar ao banco de dados".to_string(),
        source: anyhow::anyhow!("Connection error: {}", e),
    })
}
