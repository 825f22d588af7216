//! Command executor for dispatching CLI commands

use super::handlers::{CreateAdminCommandHandler, MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::{Environment, Settings};

/// Runs the parsed command with merged settings; no command means `serve`.
///
/// # Errors
/// Returns errors from the command handlers or the server itself
pub async fn execute_command(
    cli: Cli,
    settings: Settings,
    environment: Environment,
) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Serve { dry_run, .. }) => {
            ServeCommandHandler::new(settings, environment)
                .execute(dry_run)
                .await
        }
        None => ServeCommandHandler::new(settings, environment).execute(false).await,
        Some(Commands::Migrate { dry_run }) => {
            MigrateCommandHandler::new(settings).execute(dry_run).await?;
            Ok(())
        }
        Some(Commands::CreateAdmin {
            username,
            email,
            password,
        }) => {
            CreateAdminCommandHandler::new(settings)
                .execute(username, email, password)
                .await?;
            Ok(())
        }
    }
}
