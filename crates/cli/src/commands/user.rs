//! User table commands.

use sqlx::PgPool;
use tracing::info;

use roster_store::{RecordStore, StoreError, UserRecord, UserStore};

use super::{default_if_no_table, emit_json};

/// Validate and save one user.
///
/// # Errors
///
/// Returns `StoreError::Validation` if the inputs fail the predicate,
/// `StoreError::Database` if the insert fails.
pub async fn add(pool: &PgPool, name: &str, age: i64, email: &str) -> Result<(), StoreError> {
    let record = UserRecord::new(name, age, email)?;
    UserStore::new(pool).save(&record).await?;

    info!("Saved user: {}", record.name);
    Ok(())
}

/// List every user in insertion order.
///
/// A never-created table lists as empty.
///
/// # Errors
///
/// Returns an error if the query fails or JSON serialization fails.
pub async fn list(pool: &PgPool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let users = default_if_no_table(UserStore::new(pool).retrieve_all().await)?;
    present(&users, json)?;
    Ok(())
}

/// Search users by case-insensitive substring of the name.
///
/// # Errors
///
/// Returns an error if the query fails or JSON serialization fails.
pub async fn search(
    pool: &PgPool,
    needle: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let users = default_if_no_table(UserStore::new(pool).search_by_name(needle).await)?;
    present(&users, json)?;
    Ok(())
}

/// Update the email of every user whose name matches case-insensitively.
///
/// # Errors
///
/// Returns `StoreError::Validation` if the new email fails the predicate,
/// `StoreError::Database` if the update fails.
pub async fn update_email(pool: &PgPool, name: &str, email: &str) -> Result<(), StoreError> {
    let updated = UserStore::new(pool).update_email(name, email).await?;

    if updated == 0 {
        info!("No users named {name:?} (case-insensitive)");
    } else {
        info!("Updated email on {updated} row(s)");
    }
    Ok(())
}

/// Delete every user with exactly this name.
///
/// # Errors
///
/// Returns `StoreError::Database` if the delete fails.
pub async fn delete(pool: &PgPool, name: &str) -> Result<(), StoreError> {
    let deleted = UserStore::new(pool).delete(name).await?;

    if deleted == 0 {
        info!("No users named {name:?} (case-sensitive)");
    } else {
        info!("Deleted {deleted} row(s)");
    }
    Ok(())
}

/// Print user count and average age.
///
/// A never-created table counts as zero rows with average age zero.
///
/// # Errors
///
/// Returns `StoreError::Database` if either query fails.
pub async fn stats(pool: &PgPool) -> Result<(), StoreError> {
    let store = UserStore::new(pool);
    let count = default_if_no_table(store.count().await)?;
    let average_age = default_if_no_table(store.average_age().await)?;

    info!("Users: {count}");
    info!("Average age: {average_age:.2}");
    Ok(())
}

fn present(users: &[UserRecord], json: bool) -> Result<(), serde_json::Error> {
    if json {
        return emit_json(&users);
    }

    if users.is_empty() {
        info!("No users found.");
        return Ok(());
    }

    for user in users {
        info!("Name: {}, Age: {}, Email: {}", user.name, user.age, user.email);
    }
    Ok(())
}
