//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite:app.db`;
//!   the file is created if missing)
//! - `LISTEN` - Bind address (default: `0.0.0.0:5555`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:app.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5555".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a SQLite connection string
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is missing a port
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            listen_addr: "0.0.0.0:5555".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
            db_connect_timeout: 30,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "5555".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:5555".to_string();

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pool_settings_must_be_nonzero() {
        let mut config = base_config();

        config.db_max_connections = 0;
        assert!(config.validate().is_err());

        config.db_max_connections = 5;
        config.db_connect_timeout = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_is_empty() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env();

        assert_eq!(config.database_url, "sqlite:app.db");
        assert_eq!(config.listen_addr, "0.0.0.0:5555");
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_database_url_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATABASE_URL", "sqlite:custom.db");
        }

        let config = Config::from_env();
        assert_eq!(config.database_url, "sqlite:custom.db");

        // Cleanup
        unsafe {
            env::remove_var("DATABASE_URL");
        }
    }
}
