//! Configuration for embedding applications.
//!
//! The directory itself needs no configuration. These settings size the
//! initial allocation and pick the default log filter for the import binary.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial capacity of the directory (default: 64)
    pub initial_capacity: usize,

    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_DIRECTORY_CAPACITY`: initial directory capacity (default: 64)
    /// - `LOG_LEVEL`: logging level (default: "warn")
    ///
    /// A `.env` file is read first if present.
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        let initial_capacity =
            Self::parse_env_usize("CONTACT_DIRECTORY_CAPACITY", defaults.initial_capacity)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            initial_capacity,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_capacity: 64,
            log_level: "warn".to_string(),
        }
    }
}
