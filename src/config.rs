//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SITE_PROFILE` - Registry profile: `production` or `staging` (default: `production`)
//! - `DEFAULT_HOST` - Host assumed when a request carries no `Host` header
//!   (default: `localhost:3000`)
//! - `MAX_INPUT_LENGTH` - Longest navigation input accepted by the classify API
//!   (default: 2048, max: 65536)
//!
//! Variables may also come from a `.env` file loaded via `dotenvy` in `main.rs`.

use crate::domain::profiles::Profile;
use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub profile: Profile,
    /// Host used for tenant resolution when the `Host` header is missing.
    pub default_host: String,
    /// Upper bound on classify request input, in bytes.
    pub max_input_length: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SITE_PROFILE` names an unknown profile.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let profile = match env::var("SITE_PROFILE") {
            Ok(value) => value.parse().context("Failed to parse SITE_PROFILE")?,
            Err(_) => Profile::default(),
        };

        let default_host =
            env::var("DEFAULT_HOST").unwrap_or_else(|_| "localhost:3000".to_string());

        let max_input_length = env::var("MAX_INPUT_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2048);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            profile,
            default_host,
            max_input_length,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `default_host` is empty
    /// - `max_input_length` is outside `1..=65536`
    pub fn validate(&self) -> Result<()> {
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

        if self.default_host.trim().is_empty() {
            anyhow::bail!("DEFAULT_HOST must not be empty");
        }

        if self.max_input_length == 0 || self.max_input_length > 65_536 {
            anyhow::bail!(
                "MAX_INPUT_LENGTH must be between 1 and 65536, got {}",
                self.max_input_length
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Site profile: {}", self.profile);
        tracing::info!("  Default host: {}", self.default_host);
        tracing::info!("  Max input length: {}", self.max_input_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            profile: Profile::Production,
            default_host: "localhost:3000".to_string(),
            max_input_length: 2048,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();
        config.default_host = "  ".to_string();
        assert!(config.validate().is_err());

        config.default_host = "localhost:3000".to_string();
        config.max_input_length = 0;
        assert!(config.validate().is_err());

        config.max_input_length = 100_000;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("SITE_PROFILE");
            env::remove_var("DEFAULT_HOST");
            env::remove_var("MAX_INPUT_LENGTH");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.profile, Profile::Production);
        assert_eq!(config.default_host, "localhost:3000");
        assert_eq!(config.max_input_length, 2048);
    }

    #[test]
    #[serial]
    fn test_from_env_profile() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SITE_PROFILE", "staging");
            env::set_var("MAX_INPUT_LENGTH", "512");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.profile, Profile::Staging);
        assert_eq!(config.max_input_length, 512);

        unsafe {
            env::set_var("SITE_PROFILE", "qa");
        }
        assert!(Config::from_env().is_err());

        // Cleanup
        unsafe {
            env::remove_var("SITE_PROFILE");
            env::remove_var("MAX_INPUT_LENGTH");
        }
    }
}
