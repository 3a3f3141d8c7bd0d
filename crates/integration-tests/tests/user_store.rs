//! Integration test for the user store.
//!
//! One sequential scenario per test binary: tests in a binary run in
//! parallel threads, and these share the `users` table.
//!
//! Run with:
//! `cargo test -p roster-integration-tests -- --ignored`

#![allow(clippy::unwrap_used)]

use roster_integration_tests::{reset_tables, test_pool};
use roster_store::{RecordStore, StoreError, UserRecord, UserStore};

#[tokio::test]
#[ignore = "requires a PostgreSQL database (ROSTER_TEST_DATABASE_URL)"]
async fn user_store_lifecycle() {
    let pool = test_pool().await;
    reset_tables(&pool).await;

    let store = UserStore::new(&pool);

    // Reads before any save see the undefined-table error that callers
    // present as an empty sequence / zero
    let err = store.retrieve_all().await.unwrap_err();
    assert!(err.is_undefined_table());
    let err = store.count().await.unwrap_err();
    assert!(err.is_undefined_table());

    // First save creates the table lazily
    let john = UserRecord::new("John Doe", 25, "john.doe@example.com").unwrap();
    store.save(&john).await.unwrap();
    store
        .save(&UserRecord::new("Janet Smith", 25, "janet.smith@example.com").unwrap())
        .await
        .unwrap();
    store
        .save(&UserRecord::new("Cole Deo", 5, "cole.deo@example.com").unwrap())
        .await
        .unwrap();

    // Saved records come back exactly, in insertion order
    let all = store.retrieve_all().await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all.first().unwrap(), &john);

    // Statistics over three rows
    assert_eq!(store.count().await.unwrap(), 3);
    let average = store.average_age().await.unwrap();
    assert!((average - 55.0 / 3.0).abs() < 1e-9, "got {average}");

    // Case-insensitive substring search: "doe" matches "John Doe" only
    // ("Cole Deo" contains "deo", not "doe")
    let hits = store.search_by_name("doe").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits.first().unwrap().name.as_str(), "John Doe");

    let hits = store.search_by_name("DOE").await.unwrap();
    assert_eq!(hits.len(), 1);

    // LIKE metacharacters match literally, not as wildcards
    assert!(store.search_by_name("%").await.unwrap().is_empty());

    // update_email validates before touching the database - the new email
    // and the name both run through the predicate
    let err = store.update_email("John Doe", "no-at-symbol").await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    let err = store.update_email("", "new@example.com").await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    let all = store.retrieve_all().await.unwrap();
    assert!(all.iter().all(|u| u.email.as_str() != "no-at-symbol"));
    assert!(all.iter().all(|u| u.email.as_str() != "new@example.com"));

    // Name matching for updates ignores case
    let updated = store
        .update_email("john doe", "new_email@example.com")
        .await
        .unwrap();
    assert_eq!(updated, 1);
    let hits = store.search_by_name("john doe").await.unwrap();
    assert_eq!(hits.first().unwrap().email.as_str(), "new_email@example.com");

    // Deletion is exact and case-sensitive
    assert_eq!(store.delete("john doe").await.unwrap(), 0);
    assert_eq!(store.delete("John Doe").await.unwrap(), 1);
    assert_eq!(store.count().await.unwrap(), 2);

    // Duplicates are permitted, and delete removes all matching rows
    let janet = UserRecord::new("Janet Smith", 30, "janet2@example.com").unwrap();
    store.save(&janet).await.unwrap();
    assert_eq!(store.count().await.unwrap(), 3);
    assert_eq!(store.delete("Janet Smith").await.unwrap(), 2);

    // Empty-table behavior
    assert_eq!(store.delete("Cole Deo").await.unwrap(), 1);
    assert_eq!(store.count().await.unwrap(), 0);
    assert!((store.average_age().await.unwrap() - 0.0).abs() < f64::EPSILON);
    assert!(store.retrieve_all().await.unwrap().is_empty());
    assert!(store.search_by_name("doe").await.unwrap().is_empty());
}
