//! CSV export endpoints.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use qeval::services::export;

use super::super::AppState;
use super::helpers::service_error;

fn csv_attachment(csv: String, filename: &str) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(csv))
        .unwrap()
        .into_response()
}

/// Export every annotation as a CSV download.
///
/// Zero annotations yield a header-only file, not an error.
#[utoipa::path(
    get,
    path = "/export/annotations-csv",
    responses((status = 200, description = "Annotations CSV", content_type = "text/csv")),
    tag = "Export"
)]
pub async fn export_annotations_csv(State(state): State<AppState>) -> impl IntoResponse {
    match export::annotations_csv(&state.annotations).await {
        Ok(csv) => csv_attachment(csv, "annotations.csv"),
        Err(e) => service_error(e),
    }
}

/// Export samples joined with their annotations as a CSV download.
///
/// Inner join: samples without annotations produce no row.
#[utoipa::path(
    get,
    path = "/export/full-dataset-csv",
    responses((status = 200, description = "Joined dataset CSV", content_type = "text/csv")),
    tag = "Export"
)]
pub async fn export_full_dataset_csv(State(state): State<AppState>) -> impl IntoResponse {
    match export::full_dataset_csv(&state.samples, &state.annotations).await {
        Ok(csv) => csv_attachment(csv, "full_dataset.csv"),
        Err(e) => service_error(e),
    }
}
