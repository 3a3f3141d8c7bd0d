//! Admin table commands.
//!
//! Admins live in their own table with an extra role column. There are no
//! update/delete/stats commands here: `AdminStore` does not declare those
//! operations.

use sqlx::PgPool;
use tracing::info;

use roster_store::{AdminRecord, AdminStore, RecordStore, StoreError};

use super::{default_if_no_table, emit_json};

/// Validate and save one admin.
///
/// # Errors
///
/// Returns `StoreError::Validation` if name/age/email fail the predicate
/// (the role is free text), `StoreError::Database` if the insert fails.
pub async fn add(
    pool: &PgPool,
    name: &str,
    age: i64,
    email: &str,
    role: &str,
) -> Result<(), StoreError> {
    let record = AdminRecord::new(name, age, email, role)?;
    AdminStore::new(pool).save(&record).await?;

    info!("Saved admin: {} ({})", record.name, record.role);
    Ok(())
}

/// List every admin in insertion order.
///
/// A never-created table lists as empty.
///
/// # Errors
///
/// Returns an error if the query fails or JSON serialization fails.
pub async fn list(pool: &PgPool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let admins = default_if_no_table(AdminStore::new(pool).retrieve_all().await)?;
    present(&admins, json)?;
    Ok(())
}

/// Search admins by case-insensitive substring of the name.
///
/// # Errors
///
/// Returns an error if the query fails or JSON serialization fails.
pub async fn search(
    pool: &PgPool,
    needle: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let admins = default_if_no_table(AdminStore::new(pool).search_by_name(needle).await)?;
    present(&admins, json)?;
    Ok(())
}

fn present(admins: &[AdminRecord], json: bool) -> Result<(), serde_json::Error> {
    if json {
        return emit_json(&admins);
    }

    if admins.is_empty() {
        info!("No admins found.");
        return Ok(());
    }

    for admin in admins {
        info!(
            "Name: {}, Age: {}, Email: {}, Role: {}",
            admin.name, admin.age, admin.email, admin.role
        );
    }
    Ok(())
}
