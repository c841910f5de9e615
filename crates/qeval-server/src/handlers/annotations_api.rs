//! Annotation endpoints.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use qeval::services::review::{self, AnnotationDraft};

use super::super::AppState;
use super::api_types::{AnnotationResponse, CreateAnnotationRequest, PageParams};
use super::helpers::{internal_error, service_error};

/// Create an annotation for a text sample.
///
/// The sample is not required to exist; integrity is advisory.
#[utoipa::path(
    post,
    path = "/annotations",
    request_body = CreateAnnotationRequest,
    responses(
        (status = 200, description = "Created annotation", body = AnnotationResponse),
        (status = 400, description = "Invalid quality level or issue tag")
    ),
    tag = "Annotations"
)]
pub async fn create_annotation(
    State(state): State<AppState>,
    Json(body): Json<CreateAnnotationRequest>,
) -> impl IntoResponse {
    let draft = AnnotationDraft {
        text_sample_id: body.text_sample_id,
        quality_level: body.quality_level,
        issue_tags: body.issue_tags,
        notes: body.notes,
        annotator_id: body.annotator_id,
    };
    match review::create_annotation(&state.annotations, draft).await {
        Ok(annotation) => Json(AnnotationResponse::from(annotation)).into_response(),
        Err(e) => service_error(e),
    }
}

/// List annotations in creation order.
#[utoipa::path(
    get,
    path = "/annotations",
    params(PageParams),
    responses((status = 200, description = "Annotations in creation order", body = [AnnotationResponse])),
    tag = "Annotations"
)]
pub async fn list_annotations(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    match state
        .annotations
        .get_page(params.skip(), params.limit())
        .await
    {
        Ok(annotations) => Json(
            annotations
                .into_iter()
                .map(AnnotationResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => internal_error(e),
    }
}

/// List all annotations for one sample.
#[utoipa::path(
    get,
    path = "/annotations/text-sample/{sample_id}",
    params(("sample_id" = String, Path, description = "Sample ID")),
    responses((status = 200, description = "Annotations for the sample", body = [AnnotationResponse])),
    tag = "Annotations"
)]
pub async fn annotations_for_sample(
    State(state): State<AppState>,
    Path(sample_id): Path<String>,
) -> impl IntoResponse {
    match state.annotations.get_by_sample(&sample_id).await {
        Ok(annotations) => Json(
            annotations
                .into_iter()
                .map(AnnotationResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => internal_error(e),
    }
}
