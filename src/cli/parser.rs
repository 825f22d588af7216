//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Admin backend for the emprega job board
#[derive(Parser, Debug)]
#[command(name = "emprega-admin")]
#[command(version, about = "Admin backend for the emprega job board")]
#[command(long_about = "
Serves the admin REST API for job postings (empregos) and administrator
accounts, backed by PostgreSQL.

EXAMPLES:
    # Start the server with the layered configuration in ./config
    emprega-admin serve

    # Bind to all interfaces on port 8080
    emprega-admin serve --host 0.0.0.0 --port 8080

    # Use a single configuration file
    emprega-admin --config /etc/emprega-admin/emprega.toml serve

    # Check configuration without starting the server
    emprega-admin --env production serve --dry-run

    # Apply pending migrations
    emprega-admin migrate

    # Create the first administrator
    EMPREGA_ADMIN_PASSWORD=... emprega-admin create-admin --username maria --email maria@example.com
")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Load this single TOML file instead of the layered `config/` directory.
    /// `EMPREGA_*` environment variables still apply on top of it.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection (`EMPREGA_APP_ENV`)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Decrease log verbosity (-q warn, -qq error)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Examples:
    ///   emprega-admin serve                           # Start with defaults
    ///   emprega-admin serve --host 0.0.0.0 --port 80 # Bind to all interfaces on port 80
    ///   emprega-admin serve --dry-run                 # Validate config without starting
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Validate configuration and exit
        #[arg(long)]
        dry_run: bool,
    },
    /// Apply the embedded database migrations
    Migrate {
        /// Show pending migrations without applying
        #[arg(long)]
        dry_run: bool,
    },
    /// Create an administrator account
    ///
    /// Creating admins through the API requires a session, so the first
    /// account is created here.
    CreateAdmin {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        /// Plain text password; prefer the environment variable over the flag
        #[arg(long, env = "EMPREGA_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl Cli {
    /// Net verbosity change requested by `-v`/`-q`.
    pub fn verbosity_delta(&self) -> i8 {
        self.verbose.min(4) as i8 - self.quiet.min(4) as i8
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
