//! Roster Core - Shared validated types.
//!
//! This crate provides the domain types used across all Roster components:
//! - `store` - Record stores over `PostgreSQL`
//! - `cli` - Command-line driver
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access. A value
//! of one of these types can only be obtained through its `parse`
//! constructor, so holding one is proof the validation predicate passed.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for names, ages, and email addresses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
