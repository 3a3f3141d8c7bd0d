//! Age type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Age`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum AgeError {
    /// The value is negative.
    #[error("age must be a non-negative integer (got {0})")]
    Negative(i64),
    /// The value does not fit in a 32-bit integer column.
    #[error("age must be at most {max} (got {0})", max = i32::MAX)]
    OutOfRange(i64),
}

/// A non-negative age in years.
///
/// Stored in the database as `INTEGER`, so the parser also rejects values
/// that would not fit a signed 32-bit column.
///
/// ## Examples
///
/// ```
/// use roster_core::Age;
///
/// assert!(Age::parse(25).is_ok());
/// assert!(Age::parse(0).is_ok());
/// assert!(Age::parse(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Age(i32);

impl Age {
    /// Parse an `Age` from an integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or exceeds `i32::MAX`.
    pub const fn parse(value: i64) -> Result<Self, AgeError> {
        if value < 0 {
            return Err(AgeError::Negative(value));
        }

        if value > i32::MAX as i64 {
            return Err(AgeError::OutOfRange(value));
        }

        #[allow(clippy::cast_possible_truncation)] // range checked above
        let age = value as i32;
        Ok(Self(age))
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Age {
    type Error = AgeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Age> for i32 {
    fn from(age: Age) -> Self {
        age.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Age {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i32 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i32 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Age {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let v = <i32 as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(v))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Age {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i32 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
