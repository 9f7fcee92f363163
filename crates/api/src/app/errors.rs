//! Consistent responses for handler results.
//!
//! Handlers return a tagged `HandlerResult` instead of writing through a
//! callback chain; `dispatch` is the one place that inspects the tag and
//! routes to either envelope serialization or the centralized error shape.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use armature_core::{ApiResponse, HandlerError, HandlerResult};

/// Turn a handler outcome into exactly one HTTP response.
///
/// Success writes the envelope with its own status code; failure is
/// forwarded verbatim to the error shape. Nothing is retried, suppressed, or
/// reclassified.
pub fn dispatch(result: HandlerResult<ApiResponse>) -> Response {
    match result {
        Ok(envelope) => envelope_response(envelope),
        Err(err) => handler_failure_response(&err),
    }
}

pub fn envelope_response(envelope: ApiResponse) -> Response {
    let status =
        StatusCode::from_u16(envelope.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(envelope)).into_response()
}

pub fn handler_failure_response(err: &HandlerError) -> Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "handler_failure", err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
