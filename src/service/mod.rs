//! Business logic layer between controllers and repositories.
//!
//! Services own input validation, existence checks, and the transaction
//! boundary: every create, update, and delete runs between `begin()` and
//! `commit()`, so a mutation either lands completely or not at all. An error
//! anywhere in the sequence drops the transaction and rolls back.

pub mod city;
pub mod dish;
pub mod restaurant;

#[cfg(test)]
mod test;

use crate::error::AppError;

/// Rejects a missing or empty required string field before any write happens.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }

    Ok(())
}
