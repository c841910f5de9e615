//! Text sample endpoints.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use qeval::models::TextSample;
use qeval::services::review;

use super::super::AppState;
use super::api_types::{CreateSampleRequest, MessageResponse, PageParams, SampleResponse};
use super::helpers::{bad_request, internal_error, not_found, service_error};

/// List text samples in creation order.
#[utoipa::path(
    get,
    path = "/text-samples",
    params(PageParams),
    responses((status = 200, description = "Samples in creation order", body = [SampleResponse])),
    tag = "Samples"
)]
pub async fn list_samples(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    match state.samples.get_page(params.skip(), params.limit()).await {
        Ok(samples) => Json(
            samples
                .into_iter()
                .map(SampleResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => internal_error(e),
    }
}

/// Create a single text sample.
#[utoipa::path(
    post,
    path = "/text-samples",
    request_body = CreateSampleRequest,
    responses(
        (status = 200, description = "Created sample", body = SampleResponse),
        (status = 400, description = "Empty text")
    ),
    tag = "Samples"
)]
pub async fn create_sample(
    State(state): State<AppState>,
    Json(body): Json<CreateSampleRequest>,
) -> impl IntoResponse {
    let text = body.text.trim();
    if text.is_empty() {
        return bad_request("text must not be empty");
    }

    let sample = TextSample::new(
        text.to_string(),
        body.source.filter(|s| !s.trim().is_empty()),
        body.topic.filter(|s| !s.trim().is_empty()),
    );
    match state.samples.insert(&sample).await {
        Ok(()) => Json(SampleResponse::from(sample)).into_response(),
        Err(e) => internal_error(e),
    }
}

/// Get one text sample by id.
#[utoipa::path(
    get,
    path = "/text-samples/{sample_id}",
    params(("sample_id" = String, Path, description = "Sample ID")),
    responses(
        (status = 200, description = "The sample", body = SampleResponse),
        (status = 404, description = "Sample not found")
    ),
    tag = "Samples"
)]
pub async fn get_sample(
    State(state): State<AppState>,
    Path(sample_id): Path<String>,
) -> impl IntoResponse {
    match state.samples.get(&sample_id).await {
        Ok(Some(sample)) => Json(SampleResponse::from(sample)).into_response(),
        Ok(None) => not_found("Text sample not found"),
        Err(e) => internal_error(e),
    }
}

/// Delete one text sample.
///
/// Annotations referencing it are kept; orphans are tolerated.
#[utoipa::path(
    delete,
    path = "/text-samples/{sample_id}",
    params(("sample_id" = String, Path, description = "Sample ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 404, description = "Sample not found")
    ),
    tag = "Samples"
)]
pub async fn delete_sample(
    State(state): State<AppState>,
    Path(sample_id): Path<String>,
) -> impl IntoResponse {
    match state.samples.delete(&sample_id).await {
        Ok(true) => Json(MessageResponse {
            message: "Text sample deleted successfully".to_string(),
        })
        .into_response(),
        Ok(false) => not_found("Text sample not found"),
        Err(e) => internal_error(e),
    }
}

/// Draw two distinct samples at random for pairwise comparison.
///
/// Returns an empty list when fewer than two samples exist.
#[utoipa::path(
    get,
    path = "/text-samples/random-pair",
    responses((status = 200, description = "Two samples, or empty", body = [SampleResponse])),
    tag = "Samples"
)]
pub async fn random_pair(State(state): State<AppState>) -> impl IntoResponse {
    match review::random_pair(&state.samples).await {
        Ok(pair) => Json(
            pair.into_iter()
                .map(SampleResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => service_error(e),
    }
}
