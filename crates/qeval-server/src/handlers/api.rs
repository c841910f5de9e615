//! Service-level endpoints.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::api_types::MessageResponse;

/// Health check for container orchestration.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    tag = "Service"
)]
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Service identification message.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service name", body = MessageResponse)),
    tag = "Service"
)]
pub async fn root() -> impl IntoResponse {
    Json(MessageResponse {
        message: "qeval text annotation API".to_string(),
    })
}
