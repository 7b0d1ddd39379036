//! Request validation.
//!
//! Turns untyped JSON payloads and path segments into the typed inputs the
//! directory works on. Every required text field must be present, must be a
//! JSON string, and must not be blank. Checks run in field order and stop at
//! the first failure, so the message always names a single field.

use roster_core::{EmployeeId, IdError};
use roster_store::EmployeeDetails;
use serde_json::{Map, Value};
use thiserror::Error;

/// Field carrying the review text in an add-review payload.
pub const REVIEW_FIELD: &str = "review";

/// Reasons a request is rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The body is valid JSON but not an object.
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A required field is present but not a string.
    #[error("field '{0}' must be a string")]
    NotText(&'static str),

    /// A required field is an empty or whitespace-only string.
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// The employee id in the request path is malformed.
    #[error("invalid employee id: {0}")]
    InvalidId(#[from] IdError),
}

/// Parse an employee id from its external text form.
///
/// # Errors
///
/// Returns `ValidationError::InvalidId` unless `raw` is a run of ASCII digits
/// that fits in 64 bits.
pub fn employee_id(raw: &str) -> Result<EmployeeId, ValidationError> {
    Ok(raw.parse()?)
}

/// Extract and validate employee details from a create or update payload.
///
/// Fields other than the four required ones are ignored.
///
/// # Errors
///
/// Returns the first field-level problem found, checking `name`, `position`,
/// `department` and `contact` in that order.
pub fn employee_details(payload: &Value) -> Result<EmployeeDetails, ValidationError> {
    let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;

    Ok(EmployeeDetails {
        name: required_text(object, "name")?,
        position: required_text(object, "position")?,
        department: required_text(object, "department")?,
        contact: required_text(object, "contact")?,
    })
}

/// Extract and validate the review text from an add-review payload.
///
/// # Errors
///
/// Returns an error if the `review` field is missing, not a string, or blank.
pub fn review(payload: &Value) -> Result<String, ValidationError> {
    let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;
    required_text(object, REVIEW_FIELD)
}

/// Check already-typed details, for callers that skip the JSON layer.
///
/// # Errors
///
/// Returns `ValidationError::EmptyField` for the first blank field.
pub fn check_details(details: &EmployeeDetails) -> Result<(), ValidationError> {
    check_not_blank("name", &details.name)?;
    check_not_blank("position", &details.position)?;
    check_not_blank("department", &details.department)?;
    check_not_blank("contact", &details.contact)
}

/// Check an already-typed review.
///
/// # Errors
///
/// Returns `ValidationError::EmptyField` if the review is blank.
pub fn check_review(review: &str) -> Result<(), ValidationError> {
    check_not_blank(REVIEW_FIELD, review)
}

fn required_text(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(Value::String(text)) => {
            check_not_blank(field, text)?;
            Ok(text.clone())
        }
        Some(_) => Err(ValidationError::NotText(field)),
    }
}

fn check_not_blank(field: &'static str, text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ana() -> Value {
        json!({
            "name": "Ana",
            "position": "Engineer",
            "department": "R&D",
            "contact": "ana@x.com"
        })
    }

    #[test]
    fn accepts_complete_payload() {
        let details = employee_details(&ana()).unwrap();
        assert_eq!(
            details,
            EmployeeDetails::new("Ana", "Engineer", "R&D", "ana@x.com")
        );
    }

    #[test]
    fn ignores_unknown_and_server_owned_fields() {
        let mut payload = ana();
        payload["id"] = json!(99);
        payload["active"] = json!(false);
        payload["performance_reviews"] = json!(["forged"]);

        assert!(employee_details(&payload).is_ok());
    }

    #[test]
    fn reports_each_missing_field() {
        for field in ["name", "position", "department", "contact"] {
            let mut payload = ana();
            payload.as_object_mut().unwrap().remove(field);
            assert_eq!(
                employee_details(&payload),
                Err(ValidationError::MissingField(field))
            );
        }
    }

    #[test]
    fn null_counts_as_missing() {
        let mut payload = ana();
        payload["contact"] = Value::Null;
        assert_eq!(
            employee_details(&payload),
            Err(ValidationError::MissingField("contact"))
        );
    }

    #[test]
    fn rejects_non_text_fields() {
        let mut payload = ana();
        payload["department"] = json!(12);
        assert_eq!(
            employee_details(&payload),
            Err(ValidationError::NotText("department"))
        );

        let mut payload = ana();
        payload["name"] = json!(["Ana"]);
        assert_eq!(
            employee_details(&payload),
            Err(ValidationError::NotText("name"))
        );
    }

    #[test]
    fn rejects_blank_fields() {
        let mut payload = ana();
        payload["position"] = json!("   ");
        assert_eq!(
            employee_details(&payload),
            Err(ValidationError::EmptyField("position"))
        );
    }

    #[test]
    fn first_failing_field_wins() {
        let payload = json!({ "position": 3 });
        assert_eq!(
            employee_details(&payload),
            Err(ValidationError::MissingField("name"))
        );
    }

    #[test]
    fn rejects_non_object_payloads() {
        for payload in [json!([]), json!("Ana"), json!(1), Value::Null] {
            assert_eq!(
                employee_details(&payload),
                Err(ValidationError::NotAnObject)
            );
            assert_eq!(review(&payload), Err(ValidationError::NotAnObject));
        }
    }

    #[test]
    fn review_rules() {
        assert_eq!(
            review(&json!({ "review": "Good work" })).unwrap(),
            "Good work"
        );
        assert_eq!(
            review(&json!({})),
            Err(ValidationError::MissingField("review"))
        );
        assert_eq!(
            review(&json!({ "review": "" })),
            Err(ValidationError::EmptyField("review"))
        );
        assert_eq!(
            review(&json!({ "review": 5 })),
            Err(ValidationError::NotText("review"))
        );
    }

    #[test]
    fn typed_checks() {
        assert!(check_details(&EmployeeDetails::new("Ana", "Engineer", "R&D", "a")).is_ok());
        assert_eq!(
            check_details(&EmployeeDetails::new("Ana", "Engineer", "", "a")),
            Err(ValidationError::EmptyField("department"))
        );
        assert_eq!(
            check_review("\n"),
            Err(ValidationError::EmptyField("review"))
        );
    }

    #[test]
    fn employee_id_must_be_digits() {
        assert_eq!(employee_id("15").unwrap(), EmployeeId::new(15));
        assert!(matches!(
            employee_id("abc"),
            Err(ValidationError::InvalidId(IdError::NotDigits(_)))
        ));
        assert!(matches!(
            employee_id("-3"),
            Err(ValidationError::InvalidId(IdError::NotDigits(_)))
        ));
    }
}
