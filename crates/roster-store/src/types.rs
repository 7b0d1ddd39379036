//! Domain types stored in the database.
//!
//! These types represent the persisted state of an employee.

use roster_core::EmployeeId;
use serde::{Deserialize, Serialize};

/// An employee record stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier, assigned on insert.
    pub id: EmployeeId,
    /// Full name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Contact information (email, phone). Not format-checked.
    pub contact: String,
    /// Cleared by deactivation, never set again.
    pub active: bool,
    /// Performance reviews, oldest first.
    #[serde(default)]
    pub performance_reviews: Vec<String>,
}

impl Employee {
    /// Build a freshly created record: active with no reviews.
    #[must_use]
    pub fn new(id: EmployeeId, details: EmployeeDetails) -> Self {
        Self {
            id,
            name: details.name,
            position: details.position,
            department: details.department,
            contact: details.contact,
            active: true,
            performance_reviews: Vec::new(),
        }
    }

    /// Overwrite the editable fields, leaving `active` and reviews alone.
    pub fn apply_details(&mut self, details: EmployeeDetails) {
        self.name = details.name;
        self.position = details.position;
        self.department = details.department;
        self.contact = details.contact;
    }
}

/// The caller-supplied fields of an employee, used for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDetails {
    /// Full name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Department.
    pub department: String,
    /// Contact information.
    pub contact: String,
}

impl EmployeeDetails {
    /// Create a new set of details.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        department: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            department: department.into(),
            contact: contact.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_employee_is_active_without_reviews() {
        let employee = Employee::new(
            EmployeeId::FIRST,
            EmployeeDetails::new("Ana", "Engineer", "R&D", "ana@x.com"),
        );
        assert!(employee.active);
        assert!(employee.performance_reviews.is_empty());
        assert_eq!(employee.name, "Ana");
    }

    #[test]
    fn apply_details_keeps_status_and_reviews() {
        let mut employee = Employee::new(
            EmployeeId::FIRST,
            EmployeeDetails::new("Ana", "Engineer", "R&D", "ana@x.com"),
        );
        employee.active = false;
        employee.performance_reviews.push("Good work".to_string());

        employee.apply_details(EmployeeDetails::new("Ana B", "Lead", "Ops", "ana@y.com"));

        assert_eq!(employee.position, "Lead");
        assert_eq!(employee.contact, "ana@y.com");
        assert!(!employee.active);
        assert_eq!(employee.performance_reviews, vec!["Good work"]);
    }
}
