//! Employee directory for roster.
//!
//! This crate provides the business logic for the employee record lifecycle:
//! create, read, update, delete, performance reviews and deactivation. It
//! validates requests and coordinates with the storage layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Gateway (HTTP)                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     DirectoryService                        │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐    │
//! │  │ Validation  │ │  Employee   │ │  Reviews /          │    │
//! │  │             │ │  CRUD       │ │  Deactivation       │    │
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                       ┌──────────────┐
//!                       │    Store     │
//!                       │  (RocksDB)   │
//!                       └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use roster_directory::{Directory, DirectoryService, EmployeeDetails};
//! use roster_store::RocksStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Initialize store
//! let store = Arc::new(RocksStore::open("/tmp/roster")?);
//!
//! // Create directory service
//! let directory = DirectoryService::new(store);
//!
//! // Add an employee and review them
//! let details = EmployeeDetails::new("Ana", "Engineer", "R&D", "ana@x.com");
//! let employee = directory.create_employee(details).await?;
//! directory.add_review(employee.id, "Good work".to_string()).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod service;
pub mod validation;

pub use error::{DirectoryError, Result};
pub use service::{Directory, DirectoryService};
pub use validation::ValidationError;

// Re-export store types for convenience
pub use roster_store::{Employee, EmployeeDetails};
