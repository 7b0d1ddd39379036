//! Key encoding utilities for `RocksDB`.
//!
//! Employee keys are the 8-byte big-endian id, so the default bytewise
//! comparator orders records by id and the last key is the largest id.

use roster_core::EmployeeId;

/// Length of an encoded employee key.
pub const EMPLOYEE_KEY_LEN: usize = 8;

/// Encode an employee key.
#[must_use]
pub fn employee_key(employee_id: EmployeeId) -> [u8; EMPLOYEE_KEY_LEN] {
    employee_id.to_be_bytes()
}

/// Decode the employee id from a key.
///
/// Returns `None` if the key has the wrong length.
#[must_use]
pub fn extract_employee_id(key: &[u8]) -> Option<EmployeeId> {
    let bytes: [u8; EMPLOYEE_KEY_LEN] = key.try_into().ok()?;
    Some(EmployeeId::from_be_bytes(bytes))
}
