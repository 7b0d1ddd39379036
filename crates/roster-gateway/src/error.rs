//! API error types and responses.
//!
//! `ApiError` is the single place where failures become HTTP responses.
//! Handlers return `Result<_, ApiError>` and use `?` on directory, validation
//! and extractor errors; the `From` impls below decide the status code.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use roster_directory::{DirectoryError, ValidationError};

use crate::response::Envelope;

/// Message returned for every 500; the cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// API error type that implements `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request body or parameters.
    #[error("{0}")]
    BadRequest(String),

    /// The requested resource was not found.
    #[error("{0}")]
    NotFound(String),

    /// Internal server error. The payload is for logs, not for clients.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message placed in the error envelope.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::BadRequest(message) | Self::NotFound(message) => message.clone(),
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::Internal(detail) = &self {
            tracing::error!(error = %detail, "Request failed with internal error");
        }

        let body = Envelope::<()>::Error {
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::EmployeeNotFound(_) => Self::NotFound(err.to_string()),
            DirectoryError::Validation(validation) => Self::from(validation),
            DirectoryError::Store(store_err) => Self::Internal(store_err.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(format!("invalid employee id: {}", rejection.body_text()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(format!("invalid JSON body: {}", rejection.body_text()))
    }
}
