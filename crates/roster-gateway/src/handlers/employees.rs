//! Employee endpoints.
//!
//! Each handler parses the path id and JSON body, runs validation, calls the
//! directory, and wraps the result in the response envelope. Failures travel
//! back through `ApiError`.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use roster_core::EmployeeId;
use roster_directory::{validation, Directory, Employee};

use crate::error::ApiError;
use crate::response::{created, ok};
use crate::state::GatewayState;

// =============================================================================
// Response Types
// =============================================================================

/// Response for a single employee.
///
/// Separate from the stored `Employee` so the CBOR record layout can change
/// without changing the JSON the API returns.
#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    /// Employee ID.
    pub id: EmployeeId,
    /// Full name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Department.
    pub department: String,
    /// Contact information.
    pub contact: String,
    /// Whether the employee is still active.
    pub active: bool,
    /// Performance reviews, oldest first.
    pub performance_reviews: Vec<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            position: employee.position,
            department: employee.department,
            contact: employee.contact,
            active: employee.active,
            performance_reviews: employee.performance_reviews,
        }
    }
}

/// Decode the `{id}` path segment. Undecodable segments and non-digit ids
/// both end up as a 400 envelope.
fn parse_employee_id(
    path: Result<Path<String>, PathRejection>,
) -> Result<EmployeeId, ApiError> {
    let Path(raw) = path?;
    Ok(validation::employee_id(&raw)?)
}

// =============================================================================
// Handlers
// =============================================================================

/// `GET /api/v1/employees`
///
/// # Errors
///
/// Returns an error if the directory operation fails.
pub async fn list_employees<D>(
    State(state): State<Arc<GatewayState<D>>>,
) -> Result<impl IntoResponse, ApiError>
where
    D: Directory + 'static,
{
    let employees = state.directory.list_employees().await?;

    Ok(ok(employees
        .into_iter()
        .map(EmployeeResponse::from)
        .collect::<Vec<_>>()))
}

/// `GET /api/v1/employees/{id}`
///
/// # Errors
///
/// Returns an error if the id is malformed or the employee is not found.
pub async fn get_employee<D>(
    State(state): State<Arc<GatewayState<D>>>,
    employee_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    D: Directory + 'static,
{
    let employee_id = parse_employee_id(employee_id)?;
    let employee = state.directory.get_employee(employee_id).await?;

    Ok(ok(EmployeeResponse::from(employee)))
}

/// `POST /api/v1/employees`
///
/// # Errors
///
/// Returns an error if the body is not valid JSON or fails validation.
pub async fn create_employee<D>(
    State(state): State<Arc<GatewayState<D>>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    D: Directory + 'static,
{
    let Json(body) = body?;
    let details = validation::employee_details(&body)?;
    let employee = state.directory.create_employee(details).await?;

    Ok(created(EmployeeResponse::from(employee)))
}

/// `PUT /api/v1/employees/{id}`
///
/// The body is validated before the id is looked up, so an invalid body is
/// reported as 400 even for an unknown id.
///
/// # Errors
///
/// Returns an error if the id or body is invalid, or the employee is not found.
pub async fn update_employee<D>(
    State(state): State<Arc<GatewayState<D>>>,
    employee_id: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    D: Directory + 'static,
{
    let employee_id = parse_employee_id(employee_id)?;
    let Json(body) = body?;
    let details = validation::employee_details(&body)?;
    let employee = state
        .directory
        .update_employee(employee_id, details)
        .await?;

    Ok(ok(EmployeeResponse::from(employee)))
}

/// `DELETE /api/v1/employees/{id}`
///
/// Responds 204 with an empty body.
///
/// # Errors
///
/// Returns an error if the id is malformed or the employee is not found.
pub async fn delete_employee<D>(
    State(state): State<Arc<GatewayState<D>>>,
    employee_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    D: Directory + 'static,
{
    let employee_id = parse_employee_id(employee_id)?;
    state.directory.delete_employee(employee_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/v1/employees/{id}/reviews` with body `{"review": "..."}`
///
/// # Errors
///
/// Returns an error if the id or review is invalid, or the employee is not found.
pub async fn add_review<D>(
    State(state): State<Arc<GatewayState<D>>>,
    employee_id: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    D: Directory + 'static,
{
    let employee_id = parse_employee_id(employee_id)?;
    let Json(body) = body?;
    let review = validation::review(&body)?;
    let employee = state.directory.add_review(employee_id, review).await?;

    Ok(created(EmployeeResponse::from(employee)))
}

/// `PATCH /api/v1/employees/{id}/deactivate`
///
/// Takes no body. Deactivating an inactive employee succeeds again.
///
/// # Errors
///
/// Returns an error if the id is malformed or the employee is not found.
pub async fn deactivate_employee<D>(
    State(state): State<Arc<GatewayState<D>>>,
    employee_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    D: Directory + 'static,
{
    let employee_id = parse_employee_id(employee_id)?;
    let employee = state.directory.deactivate_employee(employee_id).await?;

    Ok(ok(EmployeeResponse::from(employee)))
}
