//! The JSON envelope wrapped around every API response.
//!
//! ```json
//! { "status": "success", "data": { ... } }
//! { "status": "error", "message": "employee 7 not found" }
//! ```

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Envelope body, tagged by `status`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Envelope<T> {
    /// The request succeeded; `data` carries the payload.
    Success {
        /// Response payload.
        data: T,
    },
    /// The request failed; `message` says why.
    Error {
        /// Human-readable failure reason.
        message: String,
    },
}

/// A successful response: status code plus enveloped payload.
#[derive(Debug)]
pub struct ApiSuccess<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        let Self(status, data) = self;
        (status, Json(Envelope::Success { data })).into_response()
    }
}

/// 200 with `data` in the envelope.
#[must_use]
pub fn ok<T: Serialize>(data: T) -> ApiSuccess<T> {
    ApiSuccess(StatusCode::OK, data)
}

/// 201 with `data` in the envelope.
#[must_use]
pub fn created<T: Serialize>(data: T) -> ApiSuccess<T> {
    ApiSuccess(StatusCode::CREATED, data)
}

/// Wrap error responses that carry no JSON body in the error envelope.
///
/// Covers responses produced outside the handlers: 405 from the method
/// router, 408 from the timeout layer and 413 from the body limit. JSON
/// responses pass through untouched, and the `Allow` header of a 405 is kept.
pub async fn envelope_bare_errors(response: Response) -> Response {
    let status = response.status();
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/json"));

    if !(status.is_client_error() || status.is_server_error()) || is_json {
        return response;
    }

    let message = status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_lowercase();
    let allow = response.headers().get(header::ALLOW).cloned();

    let mut enveloped = (status, Json(Envelope::<()>::Error { message })).into_response();
    if let Some(allow) = allow {
        enveloped.headers_mut().insert(header::ALLOW, allow);
    }
    enveloped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_shape() {
        let body = serde_json::to_value(Envelope::Success { data: json!([1, 2]) }).unwrap();
        assert_eq!(body, json!({ "status": "success", "data": [1, 2] }));
    }

    #[test]
    fn error_shape() {
        let body = serde_json::to_value(Envelope::<()>::Error {
            message: "nope".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({ "status": "error", "message": "nope" }));
    }

    #[tokio::test]
    async fn bare_errors_get_enveloped() {
        let bare = (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "GET,HEAD")],
        )
            .into_response();

        let response = envelope_bare_errors(bare).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET,HEAD");
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[tokio::test]
    async fn json_and_success_responses_pass_through() {
        let ok_response = envelope_bare_errors(StatusCode::NO_CONTENT.into_response()).await;
        assert_eq!(ok_response.status(), StatusCode::NO_CONTENT);
        assert!(ok_response.headers().get(header::CONTENT_TYPE).is_none());

        let enveloped = envelope_bare_errors(
            (StatusCode::NOT_FOUND, Json(json!({ "status": "error" }))).into_response(),
        )
        .await;
        assert_eq!(enveloped.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            enveloped.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn helpers_pick_status() {
        assert_eq!(ok(1).into_response().status(), StatusCode::OK);
        assert_eq!(created(1).into_response().status(), StatusCode::CREATED);
    }
}
