//! Error helpers shared by handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use qeval::ServiceError;

use super::api_types::ErrorBody;

pub fn bad_request(message: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, message.into())
}

pub fn not_found(message: impl Into<String>) -> Response {
    error_response(StatusCode::NOT_FOUND, message.into())
}

pub fn internal_error(err: impl std::fmt::Display) -> Response {
    let message = err.to_string();
    tracing::error!("request failed: {}", message);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}

/// Map a service error onto its HTTP status.
pub fn service_error(err: ServiceError) -> Response {
    match err {
        ServiceError::Validation(msg) => bad_request(msg),
        ServiceError::NotFound(msg) => not_found(msg),
        ServiceError::Store(e) => internal_error(e),
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}
