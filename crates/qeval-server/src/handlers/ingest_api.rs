//! Bulk upload endpoints.

use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use qeval::services::ingest::{self, IngestReport};

use super::super::AppState;
use super::api_types::UploadResponse;
use super::helpers::{bad_request, service_error};

/// Pull the `file` part out of a multipart upload.
async fn read_upload(multipart: &mut Multipart) -> Result<(Option<String>, Vec<u8>), Response> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(bad_request("Missing 'file' field in upload")),
            Err(e) => return Err(bad_request(format!("Invalid multipart upload: {}", e))),
        };
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return Err(bad_request(format!("Invalid multipart upload: {}", e))),
        };
        return Ok((filename, bytes.to_vec()));
    }
}

fn upload_response(report: IngestReport) -> Response {
    let mut message = format!("Successfully uploaded {} text samples", report.inserted);
    if report.skipped > 0 {
        message.push_str(&format!(" ({} rows skipped)", report.skipped));
    }
    Json(UploadResponse {
        message,
        inserted_count: report.inserted,
    })
    .into_response()
}

/// Upload text samples as CSV.
///
/// Required `text` column; optional `source` and `topic`. Rows with
/// empty text are skipped, an unparseable file fails as a whole.
#[utoipa::path(
    post,
    path = "/text-samples/upload-csv",
    responses(
        (status = 200, description = "Upload result", body = UploadResponse),
        (status = 400, description = "Unparseable file or missing text column")
    ),
    tag = "Ingest"
)]
pub async fn upload_csv(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let (filename, bytes) = match read_upload(&mut multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };
    if let Some(name) = &filename {
        if !name.to_ascii_lowercase().ends_with(".csv") {
            return bad_request("File must be a CSV");
        }
    }

    match ingest::ingest_csv(&state.samples, &bytes).await {
        Ok(report) => upload_response(report),
        Err(e) => service_error(e),
    }
}

/// Upload text samples as a JSON array.
#[utoipa::path(
    post,
    path = "/text-samples/upload-json",
    responses(
        (status = 200, description = "Upload result", body = UploadResponse),
        (status = 400, description = "Malformed JSON")
    ),
    tag = "Ingest"
)]
pub async fn upload_json(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let (filename, bytes) = match read_upload(&mut multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };
    if let Some(name) = &filename {
        if !name.to_ascii_lowercase().ends_with(".json") {
            return bad_request("File must be JSON");
        }
    }

    match ingest::ingest_json(&state.samples, &bytes).await {
        Ok(report) => upload_response(report),
        Err(e) => service_error(e),
    }
}
