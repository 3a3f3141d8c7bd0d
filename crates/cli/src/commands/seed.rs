//! Seed the database with the demo data set.
//!
//! Inserts three users and one admin - enough rows to exercise search,
//! update, delete, and the statistics by hand.

use sqlx::PgPool;
use tracing::info;

use roster_store::{AdminRecord, AdminStore, RecordStore, StoreError, UserRecord, UserStore};

/// The demo users: (name, age, email).
const DEMO_USERS: &[(&str, i64, &str)] = &[
    ("John Doe", 25, "john.doe@example.com"),
    ("Janet Smith", 25, "janet.smith@example.com"),
    ("Cole Deo", 5, "cole.deo@example.com"),
];

/// The demo admin: (name, age, email, role).
const DEMO_ADMIN: (&str, i64, &str, &str) = ("Admin User", 30, "admin@example.com", "superuser");

/// Insert the demo data set.
///
/// # Errors
///
/// Returns `StoreError::Database` if any insert fails. The demo data is
/// statically valid, so the predicate cannot fail here.
pub async fn run(pool: &PgPool) -> Result<(), StoreError> {
    let users = UserStore::new(pool);
    for &(name, age, email) in DEMO_USERS {
        users.save(&UserRecord::new(name, age, email)?).await?;
    }

    let (name, age, email, role) = DEMO_ADMIN;
    AdminStore::new(pool)
        .save(&AdminRecord::new(name, age, email, role)?)
        .await?;

    info!("Seeded {} users and 1 admin", DEMO_USERS.len());
    Ok(())
}
