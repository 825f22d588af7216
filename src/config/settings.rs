//! Configuration settings structures for emprega-admin
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "emprega-admin".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_session_expiration() -> i64 {
    8
}

// OWASP baseline for Argon2id: 19 MiB, 2 iterations, 1 lane
fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/app.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

/// Diesel database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Seconds to wait for a pooled connection
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Whether to automatically run pending migrations on startup
    #[serde(default)]
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
            auto_migrate: false,
        }
    }
}

// ============================================================================
// Session Configuration
// ============================================================================

/// Signed session token configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// HS256 signing secret; keep it out of committed files
    #[serde(default)]
    pub secret: String,

    /// Session lifetime in hours
    #[serde(default = "default_session_expiration")]
    pub expiration_hours: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiration_hours: default_session_expiration(),
        }
    }
}

// ============================================================================
// Password Hashing Configuration
// ============================================================================

/// Argon2id cost parameters, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordConfig {
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,

    #[serde(default = "default_iterations")]
    pub iterations: u32,

    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_log_path")]
    pub path: String,

    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration as it appears in the TOML files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level or full `EnvFilter` directive, e.g. "info,diesel=warn"
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub console: ConsoleSettings,

    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert the file representation into the runtime `LoggerConfig`.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self
            .file
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::validation("logger.file.format", e.to_string()))?;

        let console = ConsoleConfig::new(self.console.enabled, self.console.colored);
        let file = FileConfig::new(
            self.file.enabled,
            PathBuf::from(self.file.path),
            self.file.append,
            format,
        );

        LoggerConfig::new(console, file, self.level)
            .map_err(|e| ConfigError::validation("logger", e.to_string()))
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub password: PasswordConfig,

    #[serde(default)]
    pub logger: LoggerSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn parse(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .expect("config should build")
            .try_deserialize()
            .expect("settings should deserialize")
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.application.name, "emprega-admin");
        assert_eq!(settings.server.address(), "127.0.0.1:3000");
        assert_eq!(settings.database.max_connections, 10);
        assert!(!settings.database.auto_migrate);
        assert_eq!(settings.session.expiration_hours, 8);
        assert_eq!(settings.password.memory_kib, 19456);
        assert_eq!(settings.password.iterations, 2);
        assert_eq!(settings.logger.level, "info");
        assert!(settings.logger.console.enabled);
        assert!(!settings.logger.file.enabled);
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let settings = parse(
            r#"
            [server]
            port = 8080

            [session]
            secret = "a-secret-that-is-long-enough-for-hs256"
            "#,
        );

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.session.secret, "a-secret-that-is-long-enough-for-hs256");
        assert_eq!(settings.session.expiration_hours, 8);
        assert_eq!(settings.password, PasswordConfig::default());
    }

    #[test]
    fn test_settings_deserialize_full() {
        let settings = parse(
            r#"
            [application]
            name = "vagas"
            version = "2.0.0"

            [server]
            host = "0.0.0.0"
            port = 9000

            [database]
            url = "postgres://localhost/vagas"
            max_connections = 20
            min_connections = 2
            connection_timeout = 5
            auto_migrate = true

            [session]
            secret = "another-secret-that-is-long-enough-ok"
            expiration_hours = 24

            [password]
            memory_kib = 65536
            iterations = 3
            parallelism = 2

            [logger]
            level = "debug"

            [logger.console]
            enabled = true
            colored = false

            [logger.file]
            enabled = true
            path = "/var/log/vagas.log"
            append = false
            format = "compact"
            "#,
        );

        assert_eq!(settings.application.name, "vagas");
        assert_eq!(settings.server.address(), "0.0.0.0:9000");
        assert!(settings.database.auto_migrate);
        assert_eq!(settings.database.connection_timeout, 5);
        assert_eq!(settings.session.expiration_hours, 24);
        assert_eq!(settings.password.iterations, 3);
        assert_eq!(settings.logger.file.format, "compact");
        assert!(!settings.logger.console.colored);
    }

    #[test]
    fn test_logger_settings_into_logger_config() {
        let mut settings = LoggerSettings::default();
        settings.file.enabled = true;
        settings.file.format = "full".to_string();

        let config = settings.into_logger_config().expect("valid logger settings");
        assert!(config.console.enabled);
        assert!(config.file.enabled);
        assert_eq!(config.file.format, LogFormat::Full);
    }

    #[test]
    fn test_logger_settings_invalid_format() {
        let mut settings = LoggerSettings::default();
        settings.file.format = "xml".to_string();

        match settings.into_logger_config() {
            Err(ConfigError::ValidationError { field, .. }) => assert_eq!(field, "logger.file.format"),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_logger_settings_both_outputs_disabled() {
        let mut settings = LoggerSettings::default();
        settings.console.enabled = false;

        assert!(settings.into_logger_config().is_err());
    }
}
