//! CLI command implementations.
//!
//! One module per noun: `user` and `admin` wrap the corresponding stores,
//! `seed` inserts the demo data set. All presentation (logging results,
//! emitting JSON) happens here - the store layer only returns values.

pub mod admin;
pub mod seed;
pub mod user;

use roster_store::StoreError;

/// Print a JSON document on stdout.
///
/// Record listings are program output, not diagnostics, so they go to
/// stdout rather than through tracing.
#[allow(clippy::print_stdout)]
pub fn emit_json<T: serde::Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Map the undefined-table error to the type's default value.
///
/// Tables are created lazily on first save, so a read that runs before
/// anything was ever saved fails with `PostgreSQL`'s "undefined table".
/// The commands present that as an empty listing (or zero statistics)
/// rather than a failure - no table and an empty table read the same.
pub fn default_if_no_table<T: Default>(result: Result<T, StoreError>) -> Result<T, StoreError> {
    match result {
        Err(e) if e.is_undefined_table() => Ok(T::default()),
        other => other,
    }
}
