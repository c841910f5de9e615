//! Pairwise comparison endpoints.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use qeval::services::review::{self, ComparisonDraft};

use super::super::AppState;
use super::api_types::{ComparisonResponse, CreateComparisonRequest, PageParams};
use super::helpers::{internal_error, service_error};

/// Record a pairwise preference between two samples.
#[utoipa::path(
    post,
    path = "/pairwise-comparisons",
    request_body = CreateComparisonRequest,
    responses(
        (status = 200, description = "Created comparison", body = ComparisonResponse),
        (status = 400, description = "Identical sides or better_text_id outside the pair")
    ),
    tag = "Comparisons"
)]
pub async fn create_comparison(
    State(state): State<AppState>,
    Json(body): Json<CreateComparisonRequest>,
) -> impl IntoResponse {
    let draft = ComparisonDraft {
        text_a_id: body.text_a_id,
        text_b_id: body.text_b_id,
        better_text_id: body.better_text_id,
        notes: body.notes,
        annotator_id: body.annotator_id,
    };
    match review::create_comparison(&state.comparisons, draft).await {
        Ok(comparison) => Json(ComparisonResponse::from(comparison)).into_response(),
        Err(e) => service_error(e),
    }
}

/// List comparisons in creation order.
#[utoipa::path(
    get,
    path = "/pairwise-comparisons",
    params(PageParams),
    responses((status = 200, description = "Comparisons in creation order", body = [ComparisonResponse])),
    tag = "Comparisons"
)]
pub async fn list_comparisons(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    match state
        .comparisons
        .get_page(params.skip(), params.limit())
        .await
    {
        Ok(comparisons) => Json(
            comparisons
                .into_iter()
                .map(ComparisonResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => internal_error(e),
    }
}
