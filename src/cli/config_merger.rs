//! Configuration merger for CLI arguments and config files
//!
//! CLI arguments sit above every file and environment source.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Environment, Settings};

/// Applies CLI overrides on top of file-based configuration.
pub struct ConfigurationMerger {
    base_config: Settings,
    environment: Environment,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings, environment: Environment) -> Self {
        Self {
            base_config,
            environment,
        }
    }

    /// Loads the unvalidated base configuration honouring `--config` and `--env`.
    ///
    /// # Errors
    /// Returns ConfigError if loading or deserialization fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = ConfigLoader::new()?;

        if let Some(path) = &cli.config {
            loader = loader.with_config_file(path);
        }

        if let Some(env) = cli.env {
            loader = loader.with_environment(env.into());
        }

        let environment = loader.environment();
        Ok(Self::new(loader.load_unvalidated()?, environment))
    }

    /// Returns the merged configuration, validated for the selected environment.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if let Some(command) = &cli.command {
            Self::apply_command_overrides(&mut config, command);
        }

        config.validate_for(self.environment)?;

        Ok(config)
    }

    fn apply_command_overrides(config: &mut Settings, command: &Commands) {
        if let Commands::Serve { host, port, .. } = command {
            if let Some(host_addr) = host {
                config.server.host = host_addr.clone();
            }

            if let Some(port_num) = port {
                config.server.port = *port_num;
            }
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PasswordConfig;
    use clap::Parser;

    fn create_valid_base_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/empregos".to_string();
        config.session.secret = "0123456789abcdef0123456789abcdef".to_string();
        config
    }

    fn merger() -> ConfigurationMerger {
        ConfigurationMerger::new(create_valid_base_config(), Environment::Test)
    }

    #[test]
    fn test_configuration_merger_new() {
        let merger = merger();
        assert_eq!(merger.config(), &create_valid_base_config());
        assert_eq!(merger.environment(), Environment::Test);
    }

    #[test]
    fn test_merge_serve_host_and_port() {
        let cli = Cli::try_parse_from(["emprega-admin", "serve", "--host", "0.0.0.0", "--port", "8080"])
            .unwrap();
        let merged = merger().merge_cli_args(&cli).unwrap();

        assert_eq!(merged.server.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_merge_without_command_keeps_base() {
        let cli = Cli::try_parse_from(["emprega-admin"]).unwrap();
        let merged = merger().merge_cli_args(&cli).unwrap();

        assert_eq!(merged, create_valid_base_config());
    }

    #[test]
    fn test_migrate_ignores_server_overrides() {
        let cli = Cli::try_parse_from(["emprega-admin", "migrate"]).unwrap();
        let merged = merger().merge_cli_args(&cli).unwrap();

        assert_eq!(merged.server, create_valid_base_config().server);
    }

    #[test]
    fn test_merge_validates_result() {
        let mut base = create_valid_base_config();
        base.session.secret.clear();
        let merger = ConfigurationMerger::new(base, Environment::Test);

        let cli = Cli::try_parse_from(["emprega-admin", "serve"]).unwrap();
        match merger.merge_cli_args(&cli) {
            Err(ConfigError::ValidationError { field, .. }) => assert_eq!(field, "session.secret"),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_uses_selected_environment() {
        let mut base = create_valid_base_config();
        base.password = PasswordConfig {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
        };
        let cli = Cli::try_parse_from(["emprega-admin", "serve"]).unwrap();

        assert!(ConfigurationMerger::new(base.clone(), Environment::Test).merge_cli_args(&cli).is_ok());
        assert!(
            ConfigurationMerger::new(base, Environment::Production)
                .merge_cli_args(&cli)
                .is_err()
        );
    }
}
