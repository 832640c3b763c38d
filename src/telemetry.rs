//! `tracing` subscriber setup for applications embedding this crate.
//!
//! Libraries normally leave subscriber installation to the host. This helper
//! exists for scripts and tools that just want diagnostics on stderr.

use crate::config::Config;
use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber configured from `config`.
///
/// # Errors
///
/// Returns an error if the filter directives cannot be parsed or a global
/// subscriber is already installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    config.validate()?;

    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.is_json() {
        builder.json().try_init().map_err(|e| anyhow!(e))?;
    } else {
        builder.try_init().map_err(|e| anyhow!(e))?;
    }

    config.print_summary();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_rejects_invalid_format() {
        let config = Config {
            log_level: "info".to_string(),
            log_format: "xml".to_string(),
        };

        assert!(init_tracing(&config).is_err());
    }

    #[test]
    fn test_init_twice_fails() {
        let config = Config::default();
        let _ = init_tracing(&config);

        assert!(init_tracing(&config).is_err());
    }
}
