//! Serve command handler
//!
//! Handles the serve command including dry-run validation and server startup.

use crate::config::{Environment, Settings};
use crate::server::Server;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
    environment: Environment,
}

impl ServeCommandHandler {
    pub fn new(config: Settings, environment: Environment) -> Self {
        Self {
            config,
            environment,
        }
    }

    /// Runs the server, or only validates the configuration when `dry_run` is set.
    pub async fn execute(self, dry_run: bool) -> anyhow::Result<()> {
        if dry_run {
            self.validate_only()
        } else {
            Server::new(self.config, self.environment).run().await
        }
    }

    /// Validate configuration without starting the server
    pub fn validate_only(&self) -> anyhow::Result<()> {
        self.config.validate_for(self.environment)?;

        println!("✓ Configuration is valid for {}", self.environment);
        println!("✓ Server would bind to: {}", self.config.server.address());
        println!(
            "✓ Database pool: {}..{} connections, auto_migrate = {}",
            self.config.database.min_connections,
            self.config.database.max_connections,
            self.config.database.auto_migrate
        );
        println!(
            "✓ Sessions expire after {} hour(s)",
            self.config.session.expiration_hours
        );
        println!("Dry run completed successfully - configuration is ready for deployment");
        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_valid_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/empregos".to_string();
        config.session.secret = "0123456789abcdef0123456789abcdef".to_string();
        config
    }

    #[test]
    fn test_serve_handler_new() {
        let config = create_valid_config();
        let handler = ServeCommandHandler::new(config.clone(), Environment::Test);
        assert_eq!(handler.config(), &config);
    }

    #[tokio::test]
    async fn test_serve_handler_dry_run() {
        let handler = ServeCommandHandler::new(create_valid_config(), Environment::Test);
        assert!(handler.execute(true).await.is_ok());
    }

    #[tokio::test]
    async fn test_serve_handler_dry_run_invalid_config() {
        let mut config = create_valid_config();
        config.server.port = 0;
        let handler = ServeCommandHandler::new(config, Environment::Test);

        assert!(handler.execute(true).await.is_err());
    }
}
