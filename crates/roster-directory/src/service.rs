//! Directory service implementation.
//!
//! This module provides the `Directory` trait and `DirectoryService` implementation
//! that carries out the employee record lifecycle against a `Store`.

use std::sync::Arc;

use async_trait::async_trait;
use roster_core::EmployeeId;
use roster_store::{Employee, EmployeeDetails, Store, StoreError};

use crate::error::{DirectoryError, Result};
use crate::validation;

/// Trait defining the employee directory operations.
///
/// Every operation touches at most one record. Inputs are expected to have
/// passed [`validation`] already; implementations re-check the invariants
/// they depend on.
#[async_trait]
pub trait Directory: Send + Sync {
    /// List all employees, oldest id first.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Store` if the store cannot be read.
    async fn list_employees(&self) -> Result<Vec<Employee>>;

    /// Get an employee by ID.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::EmployeeNotFound` if the employee doesn't exist.
    async fn get_employee(&self, employee_id: EmployeeId) -> Result<Employee>;

    /// Create a new employee.
    ///
    /// The new record is active, has no reviews, and gets the next id.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Validation` if any field is blank.
    async fn create_employee(&self, details: EmployeeDetails) -> Result<Employee>;

    /// Replace the name, position, department and contact of an employee.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Validation` if any field is blank.
    /// Returns `DirectoryError::EmployeeNotFound` if the employee doesn't exist.
    async fn update_employee(
        &self,
        employee_id: EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee>;

    /// Permanently remove an employee.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::EmployeeNotFound` if the employee doesn't exist,
    /// including when it was already deleted.
    async fn delete_employee(&self, employee_id: EmployeeId) -> Result<()>;

    /// Append a performance review.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Validation` if the review is blank.
    /// Returns `DirectoryError::EmployeeNotFound` if the employee doesn't exist.
    async fn add_review(&self, employee_id: EmployeeId, review: String) -> Result<Employee>;

    /// Mark an employee inactive. Repeating the call is not an error.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::EmployeeNotFound` if the employee doesn't exist.
    async fn deactivate_employee(&self, employee_id: EmployeeId) -> Result<Employee>;
}

/// The main directory service implementation.
pub struct DirectoryService<S: Store> {
    store: Arc<S>,
}

impl<S: Store> DirectoryService<S> {
    /// Create a new directory service.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

/// Turn a store miss on `employee_id` into the directory's not-found error.
fn not_found_as(employee_id: EmployeeId) -> impl FnOnce(StoreError) -> DirectoryError {
    move |err| match err {
        StoreError::NotFound => DirectoryError::EmployeeNotFound(employee_id),
        other => DirectoryError::Store(other),
    }
}

#[async_trait]
impl<S: Store + 'static> Directory for DirectoryService<S> {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let employees = self.store.list_employees()?;
        tracing::debug!(count = employees.len(), "Listed employees");
        Ok(employees)
    }

    async fn get_employee(&self, employee_id: EmployeeId) -> Result<Employee> {
        self.store
            .get_employee(employee_id)?
            .ok_or(DirectoryError::EmployeeNotFound(employee_id))
    }

    async fn create_employee(&self, details: EmployeeDetails) -> Result<Employee> {
        validation::check_details(&details)?;

        let employee = self.store.insert_employee(details)?;

        tracing::info!(
            employee_id = %employee.id,
            department = %employee.department,
            "Created employee"
        );

        Ok(employee)
    }

    async fn update_employee(
        &self,
        employee_id: EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee> {
        validation::check_details(&details)?;

        let employee = self
            .store
            .update_employee_details(employee_id, details)
            .map_err(not_found_as(employee_id))?;

        tracing::info!(employee_id = %employee_id, "Updated employee");

        Ok(employee)
    }

    async fn delete_employee(&self, employee_id: EmployeeId) -> Result<()> {
        self.store
            .delete_employee(employee_id)
            .map_err(not_found_as(employee_id))?;

        tracing::info!(employee_id = %employee_id, "Deleted employee");

        Ok(())
    }

    async fn add_review(&self, employee_id: EmployeeId, review: String) -> Result<Employee> {
        validation::check_review(&review)?;

        let employee = self
            .store
            .append_review(employee_id, review)
            .map_err(not_found_as(employee_id))?;

        tracing::info!(
            employee_id = %employee_id,
            review_count = employee.performance_reviews.len(),
            "Added performance review"
        );

        Ok(employee)
    }

    async fn deactivate_employee(&self, employee_id: EmployeeId) -> Result<Employee> {
        let employee = self
            .store
            .set_active(employee_id, false)
            .map_err(not_found_as(employee_id))?;

        tracing::info!(employee_id = %employee_id, "Deactivated employee");

        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use roster_store::RocksStore;
    use tempfile::TempDir;

    fn setup() -> (DirectoryService<RocksStore>, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(RocksStore::open(dir.path()).unwrap());
        (DirectoryService::new(store), dir)
    }

    fn ana() -> EmployeeDetails {
        EmployeeDetails::new("Ana", "Engineer", "R&D", "ana@x.com")
    }

    #[tokio::test]
    async fn create_employee_success() {
        let (service, _dir) = setup();

        let employee = service.create_employee(ana()).await.unwrap();

        assert_eq!(employee.id, EmployeeId::FIRST);
        assert_eq!(employee.name, "Ana");
        assert!(employee.active);
        assert!(employee.performance_reviews.is_empty());
    }

    #[tokio::test]
    async fn create_assigns_one_past_maximum() {
        let (service, _dir) = setup();

        for expected in 1..=3 {
            let employee = service.create_employee(ana()).await.unwrap();
            assert_eq!(employee.id.get(), expected);
        }
    }

    #[tokio::test]
    async fn create_rejects_blank_field_and_persists_nothing() {
        let (service, _dir) = setup();

        let result = service
            .create_employee(EmployeeDetails::new("Ana", "Engineer", "R&D", ""))
            .await;

        assert!(matches!(
            result,
            Err(DirectoryError::Validation(ValidationError::EmptyField(
                "contact"
            )))
        ));
        assert!(service.list_employees().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_missing_employee() {
        let (service, _dir) = setup();

        let result = service.get_employee(EmployeeId::new(5)).await;
        assert!(matches!(
            result,
            Err(DirectoryError::EmployeeNotFound(id)) if id.get() == 5
        ));
    }

    #[tokio::test]
    async fn update_overwrites_details_only() {
        let (service, _dir) = setup();
        let employee = service.create_employee(ana()).await.unwrap();
        service
            .add_review(employee.id, "Good work".to_string())
            .await
            .unwrap();
        service.deactivate_employee(employee.id).await.unwrap();

        let updated = service
            .update_employee(
                employee.id,
                EmployeeDetails::new("Ana Silva", "Staff Engineer", "Platform", "ana@y.com"),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, employee.id);
        assert_eq!(updated.name, "Ana Silva");
        assert_eq!(updated.department, "Platform");
        assert!(!updated.active);
        assert_eq!(updated.performance_reviews, vec!["Good work"]);
        assert_eq!(service.get_employee(employee.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_missing_employee() {
        let (service, _dir) = setup();

        let result = service.update_employee(EmployeeId::new(9), ana()).await;
        assert!(matches!(result, Err(DirectoryError::EmployeeNotFound(_))));
        assert!(service.list_employees().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reviews_keep_insertion_order() {
        let (service, _dir) = setup();
        let employee = service.create_employee(ana()).await.unwrap();

        service
            .add_review(employee.id, "Good work".to_string())
            .await
            .unwrap();
        service
            .add_review(employee.id, "Needs improvement".to_string())
            .await
            .unwrap();

        let stored = service.get_employee(employee.id).await.unwrap();
        assert_eq!(
            stored.performance_reviews,
            vec!["Good work", "Needs improvement"]
        );
    }

    #[tokio::test]
    async fn blank_review_rejected() {
        let (service, _dir) = setup();
        let employee = service.create_employee(ana()).await.unwrap();

        let result = service.add_review(employee.id, "  ".to_string()).await;
        assert!(matches!(result, Err(DirectoryError::Validation(_))));

        let stored = service.get_employee(employee.id).await.unwrap();
        assert!(stored.performance_reviews.is_empty());
    }

    #[tokio::test]
    async fn review_for_missing_employee() {
        let (service, _dir) = setup();

        let result = service
            .add_review(EmployeeId::new(3), "Good work".to_string())
            .await;
        assert!(matches!(result, Err(DirectoryError::EmployeeNotFound(_))));
    }

    #[tokio::test]
    async fn deactivate_is_idempotent() {
        let (service, _dir) = setup();
        let employee = service.create_employee(ana()).await.unwrap();

        let first = service.deactivate_employee(employee.id).await.unwrap();
        assert!(!first.active);

        let second = service.deactivate_employee(employee.id).await.unwrap();
        assert!(!second.active);
        assert!(!service.get_employee(employee.id).await.unwrap().active);
    }

    #[tokio::test]
    async fn delete_is_one_shot() {
        let (service, _dir) = setup();
        let employee = service.create_employee(ana()).await.unwrap();

        service.delete_employee(employee.id).await.unwrap();

        assert!(matches!(
            service.get_employee(employee.id).await,
            Err(DirectoryError::EmployeeNotFound(_))
        ));
        assert!(matches!(
            service.delete_employee(employee.id).await,
            Err(DirectoryError::EmployeeNotFound(_))
        ));
    }

    #[tokio::test]
    async fn list_returns_all_records() {
        let (service, _dir) = setup();
        service.create_employee(ana()).await.unwrap();
        service
            .create_employee(EmployeeDetails::new("Bo", "Designer", "UX", "bo@x.com"))
            .await
            .unwrap();

        let employees = service.list_employees().await.unwrap();
        let names: Vec<&str> = employees.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bo"]);
    }
}
