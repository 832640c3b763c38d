//! Library configuration loaded from environment variables.
//!
//! The model layer itself needs no settings; configuration only drives how
//! diagnostics are emitted when the host application asks this crate to set
//! up logging (see [`crate::telemetry::init_tracing`]).
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log filter directives (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! Variables may also come from a `.env` file, loaded by [`load_from_env`].

use anyhow::Result;
use std::env;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_FORMAT: &str = "text";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Reads configuration from the process environment, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Self {
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        let log_format =
            env::var("LOG_FORMAT").unwrap_or_else(|_| DEFAULT_LOG_FORMAT.to_string());

        Self {
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `log_level` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.log_level.trim().is_empty() {
            anyhow::bail!("RUST_LOG must not be empty");
        }

        Ok(())
    }

    pub fn is_json(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads `.env` (if present), then reads and validates configuration.
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<Config> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "yaml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
        assert!(config.is_json());

        config.log_level = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("RUST_LOG", "boardgamegeek_core=debug");
            env::set_var("LOG_FORMAT", "json");
        }

        let config = Config::from_env();
        assert_eq!(config.log_level, "boardgamegeek_core=debug");
        assert!(config.is_json());

        // Cleanup
        unsafe {
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
        }
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_bad_format() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        let result = load_from_env();
        assert!(result.is_err());

        // Cleanup
        unsafe {
            env::remove_var("LOG_FORMAT");
        }
    }
}
