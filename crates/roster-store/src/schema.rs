//! Database schema definitions and column families.
//!
//! The employee table is a single column family. It is created on open when
//! missing, which is the whole of schema setup.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// Employee records, keyed by the big-endian employee id.
    pub const EMPLOYEES: &str = "employees";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![cf::EMPLOYEES]
}
