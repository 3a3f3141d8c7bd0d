//! Admin store for database operations.
//!
//! This module provides database access for the `admins` table - fully
//! independent storage from `users`, with an extra free-text `role` column.
//!
//! `AdminStore` implements [`RecordStore`] and nothing more. The user
//! table's email updates, deletion, and statistics are deliberately not
//! available here; a store only exposes operations against its own table.

use sqlx::PgPool;

use roster_core::{Age, Email, Name};

use super::{RecordStore, StoreError, substring_pattern};
use crate::models::AdminRecord;

// =============================================================================
// Internal Row Type
// =============================================================================

/// Internal row type for `admins` queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminRow {
    name: String,
    age: i32,
    email: String,
    role: String,
}

impl TryFrom<AdminRow> for AdminRecord {
    type Error = StoreError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        let name = Name::parse(&row.name)
            .map_err(|e| StoreError::DataCorruption(format!("invalid name in database: {e}")))?;
        let age = Age::parse(i64::from(row.age))
            .map_err(|e| StoreError::DataCorruption(format!("invalid age in database: {e}")))?;
        let email = Email::parse(&row.email)
            .map_err(|e| StoreError::DataCorruption(format!("invalid email in database: {e}")))?;

        Ok(Self {
            name,
            age,
            email,
            role: row.role,
        })
    }
}

// =============================================================================
// Store
// =============================================================================

/// Store for administrator records in the `admins` table.
pub struct AdminStore<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminStore<'a> {
    /// Create a new admin store.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create the `admins` table if it does not exist.
    async fn ensure_table(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS admins (name TEXT, age INTEGER, email TEXT, role TEXT)",
        )
        .execute(self.pool)
        .await?;
        Ok(())
    }
}

impl RecordStore for AdminStore<'_> {
    type Record = AdminRecord;

    async fn save(&self, record: &AdminRecord) -> Result<(), StoreError> {
        self.ensure_table().await?;

        sqlx::query("INSERT INTO admins (name, age, email, role) VALUES ($1, $2, $3, $4)")
            .bind(record.name.as_str())
            .bind(record.age.as_i32())
            .bind(record.email.as_str())
            .bind(&record.role)
            .execute(self.pool)
            .await?;

        tracing::debug!(name = %record.name, role = %record.role, "saved admin");
        Ok(())
    }

    async fn retrieve_all(&self) -> Result<Vec<AdminRecord>, StoreError> {
        let rows: Vec<AdminRow> =
            sqlx::query_as("SELECT name, age, email, role FROM admins ORDER BY ctid")
                .fetch_all(self.pool)
                .await?;

        rows.into_iter().map(AdminRecord::try_from).collect()
    }

    async fn search_by_name(&self, needle: &str) -> Result<Vec<AdminRecord>, StoreError> {
        let rows: Vec<AdminRow> = sqlx::query_as(
            "SELECT name, age, email, role FROM admins WHERE LOWER(name) LIKE $1 ORDER BY ctid",
        )
        .bind(substring_pattern(needle))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(AdminRecord::try_from).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion_carries_role() {
        let row = AdminRow {
            name: "Admin User".to_string(),
            age: 30,
            email: "admin@example.com".to_string(),
            role: "superuser".to_string(),
        };

        let record = AdminRecord::try_from(row).unwrap();
        assert_eq!(record.role, "superuser");
    }

    #[test]
    fn test_row_conversion_rejects_corrupt_name() {
        let row = AdminRow {
            name: "   ".to_string(),
            age: 30,
            email: "admin@example.com".to_string(),
            role: "superuser".to_string(),
        };

        let err = AdminRecord::try_from(row).unwrap_err();
        assert!(matches!(err, StoreError::DataCorruption(_)));
    }
}
