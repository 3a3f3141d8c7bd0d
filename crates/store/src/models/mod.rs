//! Record domain types.
//!
//! These types represent validated records separate from database row types.
//! Constructing one runs the shared validation predicate; holding one means
//! the record is fit to persist.

use roster_core::{Age, AgeError, Email, EmailError, Name, NameError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A record failed the validation predicate.
///
/// Carries the specific field failure so callers can report precisely what
/// was wrong without the store layer printing anything.
#[derive(Debug, Error, Clone)]
pub enum ValidationError {
    /// The name is empty or too long.
    #[error("invalid name: {0}")]
    Name(#[from] NameError),

    /// The age is negative or out of range.
    #[error("invalid age: {0}")]
    Age(#[from] AgeError),

    /// The email is empty, missing an @, or malformed.
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),
}

/// A user record (domain type).
///
/// Maps to one row of the `users` table. No identity beyond the fields
/// themselves - duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// The user's name.
    pub name: Name,
    /// The user's age in years.
    pub age: Age,
    /// The user's email address.
    pub email: Email,
}

impl UserRecord {
    /// Build a record from raw inputs, running the validation predicate.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name is empty, the age is negative,
    /// or the email is missing an `@` (or otherwise malformed).
    pub fn new(name: &str, age: i64, email: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::parse(name)?,
            age: Age::parse(age)?,
            email: Email::parse(email)?,
        })
    }
}

/// An administrator record (domain type).
///
/// Maps to one row of the `admins` table - fully independent storage from
/// `users`, no foreign-key relation. Same validated fields as
/// [`UserRecord`] plus a free-text role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRecord {
    /// The administrator's name.
    pub name: Name,
    /// The administrator's age in years.
    pub age: Age,
    /// The administrator's email address.
    pub email: Email,
    /// Free-text role, e.g. "superuser". Not validated.
    pub role: String,
}

impl AdminRecord {
    /// Build a record from raw inputs, running the validation predicate.
    ///
    /// The role is stored as given; only name, age, and email are validated.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` under the same conditions as
    /// [`UserRecord::new`].
    pub fn new(name: &str, age: i64, email: &str, role: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::parse(name)?,
            age: Age::parse(age)?,
            email: Email::parse(email)?,
            role: role.to_owned(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_valid() {
        let record = UserRecord::new("John Doe", 25, "john.doe@example.com").unwrap();
        assert_eq!(record.name.as_str(), "John Doe");
        assert_eq!(record.age.as_i32(), 25);
        assert_eq!(record.email.as_str(), "john.doe@example.com");
    }

    #[test]
    fn test_user_record_empty_name() {
        let err = UserRecord::new("", 25, "a@b.com").unwrap_err();
        assert!(matches!(err, ValidationError::Name(_)));
    }

    #[test]
    fn test_user_record_negative_age() {
        let err = UserRecord::new("John Doe", -1, "a@b.com").unwrap_err();
        assert!(matches!(err, ValidationError::Age(_)));
    }

    #[test]
    fn test_user_record_email_missing_at() {
        let err = UserRecord::new("John Doe", 25, "not-an-email").unwrap_err();
        assert!(matches!(err, ValidationError::Email(_)));
    }

    #[test]
    fn test_admin_record_valid() {
        let record = AdminRecord::new("Admin User", 30, "admin@example.com", "superuser").unwrap();
        assert_eq!(record.role, "superuser");
    }

    #[test]
    fn test_admin_record_role_not_validated() {
        // Role is free text, even empty
        assert!(AdminRecord::new("Admin User", 30, "admin@example.com", "").is_ok());
    }

    #[test]
    fn test_admin_record_shares_predicate() {
        let err = AdminRecord::new("Admin User", 30, "no-at", "superuser").unwrap_err();
        assert!(matches!(err, ValidationError::Email(_)));
    }

    #[test]
    fn test_validation_error_display() {
        let err = UserRecord::new("", 25, "a@b.com").unwrap_err();
        assert_eq!(err.to_string(), "invalid name: name cannot be empty");
    }

    #[test]
    fn test_user_record_serializes_flat() {
        let record = UserRecord::new("Jane Roe", 25, "jane@example.com").unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane Roe",
                "age": 25,
                "email": "jane@example.com",
            })
        );
    }
}
