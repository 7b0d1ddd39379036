//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `Store` trait.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, IteratorMode, MultiThreaded,
    Options,
};
use roster_core::EmployeeId;

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf};
use crate::types::{Employee, EmployeeDetails};
use crate::Store;

/// RocksDB-backed storage implementation.
///
/// Reads go straight to the database. Every read-modify-write (id
/// assignment, updates, appends, deletes) holds `write_lock` from the read
/// until the write lands.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
    write_lock: Mutex<()>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// Missing column families are created, so opening a fresh directory
    /// yields an empty employee table.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path.as_ref(), cf_descriptors)?;

        tracing::debug!(path = %path.as_ref().display(), "Opened employee store");

        Ok(Self {
            db: Arc::new(db),
            write_lock: Mutex::new(()),
        })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Write a full record under its id.
    fn put_employee(&self, employee: &Employee) -> Result<()> {
        let cf = self.cf(cf::EMPLOYEES)?;
        let key = keys::employee_key(employee.id);
        let value = Self::serialize(employee)?;

        self.db.put_cf(&cf, key, value)?;
        Ok(())
    }

    /// The largest id in the table, found by seeking to the last key.
    fn max_employee_id(&self) -> Result<Option<EmployeeId>> {
        let cf = self.cf(cf::EMPLOYEES)?;
        let mut iter = self.db.iterator_cf(&cf, IteratorMode::End);

        let Some(item) = iter.next() else {
            return Ok(None);
        };
        let (key, _) = item?;

        keys::extract_employee_id(&key).map(Some).ok_or_else(|| {
            StoreError::Database(format!("malformed employee key of {} bytes", key.len()))
        })
    }

    /// Load a record, apply `change`, and write it back while holding the write lock.
    fn modify_employee<F>(&self, employee_id: EmployeeId, change: F) -> Result<Employee>
    where
        F: FnOnce(&mut Employee),
    {
        let _guard = self.write_lock.lock();

        let mut employee = self
            .get_employee(employee_id)?
            .ok_or(StoreError::NotFound)?;
        change(&mut employee);
        self.put_employee(&employee)?;

        Ok(employee)
    }
}

impl Store for RocksStore {
    fn insert_employee(&self, details: EmployeeDetails) -> Result<Employee> {
        let _guard = self.write_lock.lock();

        let employee_id = match self.max_employee_id()? {
            Some(max) => max
                .next()
                .ok_or_else(|| StoreError::Database("employee id space exhausted".to_string()))?,
            None => EmployeeId::FIRST,
        };

        let employee = Employee::new(employee_id, details);
        self.put_employee(&employee)?;

        Ok(employee)
    }

    fn get_employee(&self, employee_id: EmployeeId) -> Result<Option<Employee>> {
        let cf = self.cf(cf::EMPLOYEES)?;
        let key = keys::employee_key(employee_id);

        self.db
            .get_cf(&cf, key)?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    fn list_employees(&self) -> Result<Vec<Employee>> {
        let cf = self.cf(cf::EMPLOYEES)?;

        let mut employees = Vec::new();
        let iter = self.db.iterator_cf(&cf, IteratorMode::Start);

        for item in iter {
            let (_, value) = item?;
            let employee: Employee = Self::deserialize(&value)?;
            employees.push(employee);
        }

        Ok(employees)
    }

    fn update_employee_details(
        &self,
        employee_id: EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee> {
        self.modify_employee(employee_id, |employee| employee.apply_details(details))
    }

    fn append_review(&self, employee_id: EmployeeId, review: String) -> Result<Employee> {
        self.modify_employee(employee_id, |employee| {
            employee.performance_reviews.push(review);
        })
    }

    fn set_active(&self, employee_id: EmployeeId, active: bool) -> Result<Employee> {
        self.modify_employee(employee_id, |employee| employee.active = active)
    }

    fn delete_employee(&self, employee_id: EmployeeId) -> Result<()> {
        let _guard = self.write_lock.lock();

        let cf = self.cf(cf::EMPLOYEES)?;
        let key = keys::employee_key(employee_id);

        if self.db.get_pinned_cf(&cf, key)?.is_none() {
            return Err(StoreError::NotFound);
        }
        self.db.delete_cf(&cf, key)?;

        Ok(())
    }
}
