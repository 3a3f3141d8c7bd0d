//! User store for database operations.
//!
//! This module provides database access for the `users` table. Beyond the
//! shared [`RecordStore`] capability, `UserStore` declares the operations
//! only the user table supports: email updates, deletion, and the two
//! aggregate statistics.

use sqlx::PgPool;

use roster_core::{Age, Email, Name};

use super::{RecordStore, StoreError, substring_pattern};
use crate::models::{UserRecord, ValidationError};

// =============================================================================
// Internal Row Type
// =============================================================================

/// Internal row type for `users` queries.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    name: String,
    age: i32,
    email: String,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let name = Name::parse(&row.name)
            .map_err(|e| StoreError::DataCorruption(format!("invalid name in database: {e}")))?;
        let age = Age::parse(i64::from(row.age))
            .map_err(|e| StoreError::DataCorruption(format!("invalid age in database: {e}")))?;
        let email = Email::parse(&row.email)
            .map_err(|e| StoreError::DataCorruption(format!("invalid email in database: {e}")))?;

        Ok(Self { name, age, email })
    }
}

// =============================================================================
// Store
// =============================================================================

/// Store for user records in the `users` table.
pub struct UserStore<'a> {
    pool: &'a PgPool,
}

impl<'a> UserStore<'a> {
    /// Create a new user store.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create the `users` table if it does not exist.
    async fn ensure_table(&self) -> Result<(), StoreError> {
        sqlx::query("CREATE TABLE IF NOT EXISTS users (name TEXT, age INTEGER, email TEXT)")
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// Update the email of every user whose name matches case-insensitively.
    ///
    /// Both the name and the new email run through the same predicate as
    /// `save`; age is not involved since only the email changes. Matching
    /// ignores case but not whitespace.
    ///
    /// # Returns
    ///
    /// The number of rows updated (0 if no name matched).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if `name` or `new_email` fails the
    /// predicate; nothing reaches the database in that case.
    /// Returns `StoreError::Database` if the update fails.
    pub async fn update_email(&self, name: &str, new_email: &str) -> Result<u64, StoreError> {
        let name = Name::parse(name).map_err(ValidationError::from)?;
        let email = Email::parse(new_email).map_err(ValidationError::from)?;

        let result = sqlx::query("UPDATE users SET email = $1 WHERE LOWER(name) = $2")
            .bind(email.as_str())
            .bind(name.as_str().to_lowercase())
            .execute(self.pool)
            .await?;

        tracing::debug!(name = %name, rows = result.rows_affected(), "updated user email");
        Ok(result.rows_affected())
    }

    /// Delete every user whose name matches exactly (case-sensitive).
    ///
    /// # Returns
    ///
    /// The number of rows deleted (0 if no name matched).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the delete fails.
    pub async fn delete(&self, name: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE name = $1")
            .bind(name)
            .execute(self.pool)
            .await?;

        tracing::debug!(name, rows = result.rows_affected(), "deleted users");
        Ok(result.rows_affected())
    }

    /// Count the user rows.
    ///
    /// Returns 0 for an empty table.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Mean of the age column.
    ///
    /// Returns 0.0 for an empty table (SQL `AVG` over no rows is NULL).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails.
    pub async fn average_age(&self) -> Result<f64, StoreError> {
        let average: Option<f64> = sqlx::query_scalar("SELECT AVG(age)::DOUBLE PRECISION FROM users")
            .fetch_one(self.pool)
            .await?;
        Ok(average.unwrap_or(0.0))
    }
}

impl RecordStore for UserStore<'_> {
    type Record = UserRecord;

    async fn save(&self, record: &UserRecord) -> Result<(), StoreError> {
        self.ensure_table().await?;

        sqlx::query("INSERT INTO users (name, age, email) VALUES ($1, $2, $3)")
            .bind(record.name.as_str())
            .bind(record.age.as_i32())
            .bind(record.email.as_str())
            .execute(self.pool)
            .await?;

        tracing::debug!(name = %record.name, "saved user");
        Ok(())
    }

    async fn retrieve_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        let rows: Vec<UserRow> =
            sqlx::query_as("SELECT name, age, email FROM users ORDER BY ctid")
                .fetch_all(self.pool)
                .await?;

        rows.into_iter().map(UserRecord::try_from).collect()
    }

    async fn search_by_name(&self, needle: &str) -> Result<Vec<UserRecord>, StoreError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            "SELECT name, age, email FROM users WHERE LOWER(name) LIKE $1 ORDER BY ctid",
        )
        .bind(substring_pattern(needle))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(UserRecord::try_from).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion_valid() {
        let row = UserRow {
            name: "John Doe".to_string(),
            age: 25,
            email: "john.doe@example.com".to_string(),
        };

        let record = UserRecord::try_from(row).unwrap();
        assert_eq!(record.name.as_str(), "John Doe");
        assert_eq!(record.age.as_i32(), 25);
    }

    #[test]
    fn test_row_conversion_rejects_corrupt_email() {
        let row = UserRow {
            name: "John Doe".to_string(),
            age: 25,
            email: "not-an-email".to_string(),
        };

        let err = UserRecord::try_from(row).unwrap_err();
        assert!(matches!(err, StoreError::DataCorruption(_)));
    }

    #[test]
    fn test_row_conversion_rejects_negative_age() {
        let row = UserRow {
            name: "John Doe".to_string(),
            age: -3,
            email: "john@example.com".to_string(),
        };

        let err = UserRecord::try_from(row).unwrap_err();
        assert!(matches!(err, StoreError::DataCorruption(_)));
    }

    /// A lazy pool never connects, so these only pass if validation
    /// rejects the input before any query is issued.
    fn lazy_pool() -> PgPool {
        sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://unused@localhost/unused")
            .unwrap()
    }

    #[tokio::test]
    async fn test_update_email_rejects_empty_name_before_querying() {
        let pool = lazy_pool();
        let store = UserStore::new(&pool);

        let err = store.update_email("", "new@example.com").await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::Name(_))
        ));
    }

    #[tokio::test]
    async fn test_update_email_rejects_invalid_email_before_querying() {
        let pool = lazy_pool();
        let store = UserStore::new(&pool);

        let err = store.update_email("John Doe", "no-at").await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::Email(_))
        ));
    }
}
