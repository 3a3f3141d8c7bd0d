//! Core types for Roster.
//!
//! This module provides type-safe wrappers for the record fields.

pub mod age;
pub mod email;
pub mod name;

pub use age::{Age, AgeError};
pub use email::{Email, EmailError};
pub use name::{Name, NameError};
