//! Analytics endpoints.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use qeval::services::analytics;

use super::super::AppState;
use super::api_types::SummaryResponse;
use super::helpers::service_error;

/// Store-wide counts, distributions, and annotation progress.
///
/// Recomputed from the store on every call.
#[utoipa::path(
    get,
    path = "/analytics/summary",
    responses((status = 200, description = "Summary statistics", body = SummaryResponse)),
    tag = "Analytics"
)]
pub async fn analytics_summary(State(state): State<AppState>) -> impl IntoResponse {
    match analytics::summarize(&state.samples, &state.annotations, &state.comparisons).await {
        Ok(summary) => Json(SummaryResponse::from(summary)).into_response(),
        Err(e) => service_error(e),
    }
}
