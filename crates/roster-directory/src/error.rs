//! Error types for the employee directory.
//!
//! This module defines all errors that can occur while reading or changing
//! employee records.

use roster_core::EmployeeId;
use thiserror::Error;

use crate::validation::ValidationError;

/// A result type using `DirectoryError`.
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Errors that can occur in directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The requested employee was not found.
    #[error("employee {0} not found")]
    EmployeeNotFound(EmployeeId),

    /// The request failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Storage layer error.
    #[error("storage error: {0}")]
    Store(#[from] roster_store::StoreError),
}

impl DirectoryError {
    /// Returns the appropriate HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::EmployeeNotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Store(_) => 500,
        }
    }
}
