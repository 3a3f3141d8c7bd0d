//! Roster Store - Record stores over `PostgreSQL`.
//!
//! This crate owns everything between the validated domain types in
//! `roster-core` and the database:
//!
//! - [`config`] - Environment-sourced connection configuration
//! - [`models`] - The `UserRecord` and `AdminRecord` domain types
//! - [`db`] - Connection establishment and the two record stores
//!
//! # Architecture
//!
//! Each table gets its own store type ([`UserStore`] for `users`,
//! [`AdminStore`] for `admins`). The operations both tables support live on
//! the [`RecordStore`] trait; everything else (email updates, deletion,
//! statistics) is an inherent method on the one store that supports it.
//!
//! Stores borrow a [`sqlx::PgPool`] created once in the driver; they never
//! own or hide the connection. Tables are created lazily - `save` issues an
//! idempotent `CREATE TABLE IF NOT EXISTS` before inserting, so no
//! migration step is required.
//!
//! This crate never prints. Every operation returns a typed
//! [`StoreError`]; presentation is the caller's job.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod models;

pub use config::{ConfigError, StoreConfig};
pub use db::{AdminStore, RecordStore, StoreError, UserStore, create_pool};
pub use models::{AdminRecord, UserRecord, ValidationError};
