//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `HOST` - `PostgreSQL` server host
//! - `DATABASE` - Database name
//! - `DATABASE_USER` - Database user
//! - `DATABASE_PASSWORD` - Database password
//!
//! ## Optional
//! - `DATABASE_PORT` - Server port (default: 5432)

use secrecy::{ExposeSecret, SecretString};
use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Database connection configuration.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct StoreConfig {
    /// `PostgreSQL` server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database name
    pub database: String,
    /// Database user
    pub user: String,
    /// Database password
    pub password: SecretString,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_required_env("HOST")?;
        let port = get_env_or_default("DATABASE_PORT", "5432")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("DATABASE_PORT".to_string(), e.to_string()))?;
        let database = get_required_env("DATABASE")?;
        let user = get_required_env("DATABASE_USER")?;
        let password = SecretString::from(get_required_env("DATABASE_PASSWORD")?);

        Ok(Self {
            host,
            port,
            database,
            user,
            password,
        })
    }

    /// Build `PostgreSQL` connection options from this configuration.
    ///
    /// The password only leaves its `SecretString` wrapper here, directly
    /// into the connect options.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(self.password.expose_secret())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
