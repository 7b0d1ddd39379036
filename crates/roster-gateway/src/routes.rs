//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;

use axum::extract::OriginalUri;
use axum::http::{HeaderValue, StatusCode};
use axum::middleware;
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use roster_directory::Directory;

use crate::error::ApiError;
use crate::handlers::{employees, health};
use crate::response::envelope_bare_errors;
use crate::state::GatewayState;

/// Create the gateway router with all routes and middleware.
///
/// # Routes
///
/// - `GET /health` - Health check
/// - `GET /api/v1/employees` - List employees
/// - `POST /api/v1/employees` - Create employee
/// - `GET /api/v1/employees/{id}` - Get employee
/// - `PUT /api/v1/employees/{id}` - Replace employee details
/// - `DELETE /api/v1/employees/{id}` - Delete employee
/// - `POST /api/v1/employees/{id}/reviews` - Append performance review
/// - `PATCH /api/v1/employees/{id}/deactivate` - Deactivate employee
///
/// Every response under `/api/v1`, including unknown paths, wrong methods,
/// timeouts and oversized bodies, carries the JSON envelope. Any other path
/// is served from the configured static directory, with `index.html`
/// answering for `/`.
pub fn create_router<D>(state: GatewayState<D>) -> Router
where
    D: Directory + 'static,
{
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout = state.config.request_timeout();
    let static_dir = state.config.static_dir.clone();

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    let api = Router::new()
        .route(
            "/employees",
            get(employees::list_employees::<D>).post(employees::create_employee::<D>),
        )
        .route(
            "/employees/{id}",
            get(employees::get_employee::<D>)
                .put(employees::update_employee::<D>)
                .delete(employees::delete_employee::<D>),
        )
        .route("/employees/{id}/reviews", post(employees::add_review::<D>))
        .route(
            "/employees/{id}/deactivate",
            patch(employees::deactivate_employee::<D>),
        )
        .fallback(api_not_found)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(middleware::map_response(envelope_bare_errors));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        // Web UI
        .fallback_service(ServeDir::new(static_dir))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Unknown paths under `/api/v1` answer 404 in the envelope rather than
/// falling through to the static files.
async fn api_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!(origin = %o, "Skipping invalid CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
