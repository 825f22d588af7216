//! Command-line interface: argument parsing, configuration merging and
//! the `serve`, `migrate` and `create-admin` handlers.

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment};

use crate::config::Settings;
use crate::logger::init_logger;

/// Loads configuration for `cli` and applies its overrides.
///
/// Returns the validated settings along with the environment they were
/// validated for.
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<(Settings, crate::config::Environment)> {
    let merger = ConfigurationMerger::from_cli(cli)?;
    let settings = merger.merge_cli_args(cli)?;
    Ok((settings, merger.environment()))
}

/// Installs the global subscriber from `settings`, adjusted by `-v`/`-q`.
pub fn init_logger_from_settings(settings: &Settings, cli: &Cli) -> anyhow::Result<()> {
    let mut logger_config = settings.logger.clone().into_logger_config()?;
    logger_config.adjust_verbosity(cli.verbosity_delta());
    init_logger(logger_config)
}
