//! Environment-driven runtime configuration.

use crate::error::ConfigError;

/// Runtime settings read from the process environment.
pub struct Config {
    /// Connection string for the catalog and snapshot database.
    pub database_url: String,
}

impl Config {
    /// Read the configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
        })
    }
}

fn require_env(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
