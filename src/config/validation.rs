//! Configuration validation logic
//!
//! Each section validates itself; `Settings::validate_for` runs them all and
//! stops at the first failure.

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::{
    DatabaseConfig, FileSettings, LoggerSettings, PasswordConfig, ServerConfig, SessionConfig,
    Settings,
};

const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// HS256 keys shorter than the hash output weaken the signature.
const MIN_SECRET_LEN: usize = 32;

/// One year.
pub const MAX_SESSION_HOURS: i64 = 24 * 365;

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation("server.host", "Host must not be empty."));
        }

        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    /// # Validation Rules
    /// - URL must not be empty and must use a PostgreSQL scheme
    /// - Connection counts must be positive and min <= max
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "Database URL is required. Set database.url or EMPREGA_DATABASE__URL.",
            ));
        }

        if !(self.url.starts_with("postgres://") || self.url.starts_with("postgresql://")) {
            return Err(ConfigError::validation(
                "database.url",
                "Invalid database URL format. Expected postgres://[user:password@]host[:port]/database",
            ));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Max connections must be greater than 0.",
            ));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections",
                format!(
                    "Min connections ({}) cannot exceed max connections ({}).",
                    self.min_connections, self.max_connections
                ),
            ));
        }

        if self.connection_timeout == 0 {
            return Err(ConfigError::validation(
                "database.connection_timeout",
                "Connection timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::validation(
                "session.secret",
                "Session secret cannot be empty. Set EMPREGA_SESSION__SECRET.",
            ));
        }

        if self.secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::validation(
                "session.secret",
                format!("Session secret should be at least {} characters.", MIN_SECRET_LEN),
            ));
        }

        if self.expiration_hours <= 0 {
            return Err(ConfigError::validation(
                "session.expiration_hours",
                "Session expiration must be positive.",
            ));
        }

        if self.expiration_hours > MAX_SESSION_HOURS {
            return Err(ConfigError::validation(
                "session.expiration_hours",
                format!("Session expiration cannot exceed {} hours.", MAX_SESSION_HOURS),
            ));
        }

        Ok(())
    }
}

impl PasswordConfig {
    /// Argon2 limits always apply; deployed environments must also meet the
    /// default cost so a test profile cannot leak into production.
    pub fn validate(&self, environment: Environment) -> Result<(), ConfigError> {
        if self.parallelism == 0 {
            return Err(ConfigError::validation(
                "password.parallelism",
                "Parallelism must be at least 1.",
            ));
        }

        if self.iterations == 0 {
            return Err(ConfigError::validation(
                "password.iterations",
                "Iterations must be at least 1.",
            ));
        }

        let min_memory = self.parallelism.saturating_mul(8);
        if self.memory_kib < min_memory {
            return Err(ConfigError::validation(
                "password.memory_kib",
                format!("Memory must be at least {} KiB for the configured parallelism.", min_memory),
            ));
        }

        let baseline = PasswordConfig::default();
        if environment.is_deployed()
            && (self.memory_kib < baseline.memory_kib || self.iterations < baseline.iterations)
        {
            return Err(ConfigError::validation(
                "password",
                format!(
                    "Hash cost below the {} KiB / {} iteration baseline is not allowed in {}.",
                    baseline.memory_kib, baseline.iterations, environment
                ),
            ));
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.file.format",
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level.trim().is_empty() {
            return Err(ConfigError::validation("logger.level", "Log level must not be empty."));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl Settings {
    /// Validates every section for the current `EMPREGA_APP_ENV`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_for(Environment::from_env())
    }

    pub fn validate_for(&self, environment: Environment) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.session.validate()?;
        self.password.validate(environment)?;
        self.logger.validate()?;
        Ok(())
    }
}
