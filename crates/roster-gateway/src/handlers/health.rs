//! Liveness endpoint.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process is serving requests.
    pub status: &'static str,
    /// Binary name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// Report that the gateway is up.
///
/// Sits outside `/api/v1`, so the body is not wrapped in the envelope.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
