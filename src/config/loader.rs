//! Configuration loader for emprega-admin
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "EMPREGA_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "EMPREGA_CONFIG_FILE";

const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "EMPREGA";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// Sources in order of priority (lowest first):
/// 1. `default.toml` - Base default configuration (required)
/// 2. `{environment}.toml` - Environment-specific configuration (optional)
/// 3. `local.toml` - Local development overrides (optional)
/// 4. `EMPREGA_*` environment variables
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    /// When set, layered loading is skipped
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a loader from `EMPREGA_CONFIG_DIR`, `EMPREGA_CONFIG_FILE` and
    /// `EMPREGA_APP_ENV`.
    ///
    /// # Errors
    ///
    /// Returns `MutualExclusivityError` if both `EMPREGA_CONFIG_DIR` and
    /// `EMPREGA_CONFIG_FILE` are set.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir_var = std::env::var(CONFIG_DIR_ENV).ok();
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && config_dir_var.is_some() {
            return Err(ConfigError::MutualExclusivityError(format!(
                "{} and {} cannot both be set. Use {} for layered configuration or \
                 {} for a single configuration file.",
                CONFIG_DIR_ENV, CONFIG_FILE_ENV, CONFIG_DIR_ENV, CONFIG_FILE_ENV
            )));
        }

        Ok(Self {
            config_dir: config_dir_var
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Load a single file instead of the layered directory (`--config`).
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Override the environment read from `EMPREGA_APP_ENV` (`--env`).
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load, deserialize and validate configuration from all sources.
    ///
    /// # Errors
    ///
    /// - `default.toml` is not found (layered loading)
    /// - the single configuration file is not found
    /// - parsing or validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let settings = self.load_unvalidated()?;
        settings.validate_for(self.environment)?;
        Ok(settings)
    }

    /// Load and deserialize without validation, so CLI overrides can be
    /// merged before the final check.
    pub fn load_unvalidated(&self) -> Result<Settings, ConfigError> {
        self.build_config()?.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match self.config_file {
            Some(ref config_file) => Self::add_file_source(builder, config_file, true)?,
            None => self.build_layered_config(builder)?,
        };

        // EMPREGA_SERVER__PORT -> server.port
        Self::add_env_source(builder)
            .build()
            .map_err(ConfigError::from)
    }

    fn build_layered_config(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let builder = Self::add_file_source(builder, &self.config_dir.join("default.toml"), true)?;

        let env_path = self
            .config_dir
            .join(format!("{}.toml", self.environment.as_str()));
        let builder = Self::add_file_source(builder, &env_path, false)?;

        Self::add_file_source(builder, &self.config_dir.join("local.toml"), false)
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        let name = path.to_str().ok_or_else(|| {
            ConfigError::ParseError(format!("Configuration path is not UTF-8: {}", path.display()))
        })?;

        Ok(builder.add_source(File::new(name, FileFormat::Toml).required(required)))
    }

    fn add_env_source(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}
