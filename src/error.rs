//! Error types for the zenith core.
//!
//! Only infrastructure failures surface as [`Error`]. Domain outcomes such
//! as "city not found" or "no data yet" are ordinary reply data carried in
//! `ok: false` envelopes, never `Err` values, so a misspelled city in a
//! batch cannot abort the batch.

use thiserror::Error;

/// Configuration error raised while reading the process environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Main error type for the zenith core.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
