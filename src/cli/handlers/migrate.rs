//! Migrate command handler

use crate::config::Settings;
use crate::db::{pending_migrations, run_pending_migrations};
use crate::error::AppResult;

/// Handler for the migrate command
pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Applies pending migrations, or lists them when `dry_run` is set.
    ///
    /// # Errors
    /// - Invalid database configuration
    /// - Connection or migration failures
    pub async fn execute(&self, dry_run: bool) -> AppResult<()> {
        self.config.database.validate()?;

        if dry_run {
            self.show_pending_migrations().await
        } else {
            self.run_migrations().await
        }
    }

    async fn show_pending_migrations(&self) -> AppResult<()> {
        println!("Checking for pending migrations...");

        let pending = pending_migrations(&self.config.database.url).await?;

        if pending.is_empty() {
            println!("✓ No pending migrations found - database is up to date");
        } else {
            println!("Found {} pending migration(s):", pending.len());
            for migration in &pending {
                println!("  - {}", migration);
            }
            println!("\nRun without --dry-run to apply these migrations");
        }

        Ok(())
    }

    async fn run_migrations(&self) -> AppResult<()> {
        println!("Running database migrations...");

        let applied = run_pending_migrations(&self.config.database.url).await?;
        tracing::info!(count = applied.len(), migrations = ?applied, "Migrations applied");

        if applied.is_empty() {
            println!("✓ No migrations to apply - database is already up to date");
        } else {
            println!("✓ Applied {} migration(s):", applied.len());
            for migration in &applied {
                println!("  - {}", migration);
            }
        }

        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_migrate_handler_new() {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/empregos".to_string();
        let handler = MigrateCommandHandler::new(config.clone());
        assert_eq!(handler.config(), &config);
    }

    #[tokio::test]
    async fn test_migrate_handler_rejects_invalid_database_url() {
        let mut config = Settings::default();
        config.database.url = "sqlite://empregos.db".to_string();
        let handler = MigrateCommandHandler::new(config);

        match handler.execute(true).await {
            Err(AppError::Configuration { key, .. }) => assert_eq!(key, "database.url"),
            other => panic!("Expected configuration error, got {:?}", other.map(|_| ())),
        }
    }
}
