//! `RocksDB` storage layer for roster.
//!
//! This crate provides persistent storage for employee records using `RocksDB`.
//!
//! # Architecture
//!
//! The storage uses a single column family:
//!
//! - `employees`: Employee records, keyed by the big-endian `employee_id`
//!
//! Records are CBOR-encoded; performance reviews are stored as a native
//! sequence inside the record, so callers never see the encoded form.
//!
//! # Example
//!
//! ```no_run
//! use roster_store::{EmployeeDetails, RocksStore, Store};
//!
//! let store = RocksStore::open("/tmp/roster-db").unwrap();
//!
//! let employee = store
//!     .insert_employee(EmployeeDetails::new("Ana", "Engineer", "R&D", "ana@x.com"))
//!     .unwrap();
//! assert!(employee.active);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod rocks;
pub mod schema;
pub mod types;

pub use error::{Result, StoreError};
pub use rocks::RocksStore;
pub use types::{Employee, EmployeeDetails};

use roster_core::EmployeeId;

/// The storage trait defining all database operations.
///
/// This trait abstracts the storage layer, allowing for different implementations
/// (e.g., `RocksDB`, in-memory for testing).
///
/// Operations that modify an existing record read and write it as one unit;
/// implementations must not interleave two such operations on the same record.
pub trait Store: Send + Sync {
    /// Insert a new employee, assigning the next id.
    ///
    /// The id is one greater than the largest id currently stored, or
    /// [`EmployeeId::FIRST`] if the table is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or the id space is exhausted.
    fn insert_employee(&self, details: EmployeeDetails) -> Result<Employee>;

    /// Get an employee by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_employee(&self, employee_id: EmployeeId) -> Result<Option<Employee>>;

    /// List all employees in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_employees(&self) -> Result<Vec<Employee>>;

    /// Overwrite the editable fields of an employee.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the employee doesn't exist.
    fn update_employee_details(
        &self,
        employee_id: EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee>;

    /// Append a performance review to an employee.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the employee doesn't exist.
    fn append_review(&self, employee_id: EmployeeId, review: String) -> Result<Employee>;

    /// Set the `active` flag of an employee.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the employee doesn't exist.
    fn set_active(&self, employee_id: EmployeeId, active: bool) -> Result<Employee>;

    /// Delete an employee by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the employee doesn't exist.
    fn delete_employee(&self, employee_id: EmployeeId) -> Result<()>;
}
