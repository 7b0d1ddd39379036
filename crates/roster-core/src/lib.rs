//! Core types and utilities for roster.
//!
//! This crate provides the foundational types used throughout the employee directory:
//!
//! - **Identifiers**: The strongly-typed `EmployeeId` and its parsing rules
//! - **Id errors**: Why an external identifier was rejected
//!
//! # Example
//!
//! ```
//! use roster_core::EmployeeId;
//!
//! // Parse an employee ID from a path segment
//! let id: EmployeeId = "42".parse().unwrap();
//! assert_eq!(id.get(), 42);
//!
//! // Anything but ASCII digits is rejected
//! assert!("4a".parse::<EmployeeId>().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ids;

pub use ids::{EmployeeId, IdError};
