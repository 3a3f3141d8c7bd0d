//! Database operations for Roster `PostgreSQL`.
//!
//! ## Tables
//!
//! - `users(name TEXT, age INTEGER, email TEXT)` - [`UserStore`]
//! - `admins(name TEXT, age INTEGER, email TEXT, role TEXT)` - [`AdminStore`]
//!
//! The two tables are fully independent; an admin row is not a user row.
//! Both are created lazily: `save` issues `CREATE TABLE IF NOT EXISTS`
//! before inserting, so there is no migration step.
//!
//! Queries use the runtime-checked `sqlx::query` API rather than the
//! compile-time macros: with lazy table creation there is no schema at
//! compile time to verify against.

pub mod admins;
pub mod users;

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use crate::config::StoreConfig;
use crate::models::ValidationError;

pub use admins::AdminStore;
pub use users::UserStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input failed the validation predicate; nothing reached the database.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

impl StoreError {
    /// True when the failure is `PostgreSQL`'s "undefined table" error
    /// (SQLSTATE 42P01).
    ///
    /// Tables are created lazily on first save, so a read that arrives
    /// before any save sees this error. Callers that want the
    /// empty-sequence/zero reading of "no table yet" branch on it.
    #[must_use]
    pub fn is_undefined_table(&self) -> bool {
        match self {
            Self::Database(sqlx::Error::Database(db_err)) => {
                db_err.code().as_deref() == Some("42P01")
            }
            _ => false,
        }
    }
}

/// The operations every record store supports.
///
/// `UserStore` and `AdminStore` target different tables with different row
/// shapes; this trait is the capability they share. Operations only one
/// table supports (email updates, deletion, statistics) are inherent
/// methods on the store that declares them.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// The validated record type this store persists.
    type Record;

    /// Insert one record, creating the table first if it does not exist.
    ///
    /// A single statement, so there is no partial state on failure.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if either statement fails.
    async fn save(&self, record: &Self::Record) -> Result<(), StoreError>;

    /// Return every record, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails (including when
    /// the table has never been created).
    async fn retrieve_all(&self) -> Result<Vec<Self::Record>, StoreError>;

    /// Return records whose name contains `needle`, case-insensitively.
    ///
    /// The needle is matched as a literal substring; `LIKE` wildcards in it
    /// are escaped.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails.
    async fn search_by_name(&self, needle: &str) -> Result<Vec<Self::Record>, StoreError>;
}

/// Create a `PostgreSQL` connection pool from store configuration.
///
/// The pool is capped at a single connection: operations are sequenced by
/// the driver, and pooling is explicitly out of scope.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(config: &StoreConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(config.connect_options())
        .await
}

/// Escape `LIKE` metacharacters so a needle matches as a literal substring.
///
/// Backslash is the `LIKE` escape character in `PostgreSQL`.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build the `LIKE` pattern for a case-insensitive substring search.
fn substring_pattern(needle: &str) -> String {
    format!("%{}%", escape_like(&needle.to_lowercase()))
}
