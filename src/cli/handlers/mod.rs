//! Command handlers for CLI operations

pub mod create_admin;
pub mod migrate;
pub mod serve;

pub use create_admin::CreateAdminCommandHandler;
pub use migrate::MigrateCommandHandler;
pub use serve::ServeCommandHandler;
