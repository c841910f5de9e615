//! Demo-data seeding endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use qeval::services::seed::{self, SeedOutcome};

use super::super::AppState;
use super::api_types::MessageResponse;
use super::helpers::service_error;

/// Seed the store with the fixed demo samples.
///
/// Idempotent: if any sample already exists, nothing is inserted.
#[utoipa::path(
    post,
    path = "/initialize-sample-data",
    responses((status = 200, description = "Seed result", body = MessageResponse)),
    tag = "Service"
)]
pub async fn initialize_sample_data(State(state): State<AppState>) -> impl IntoResponse {
    match seed::seed_samples(&state.samples).await {
        Ok(SeedOutcome::Seeded(count)) => Json(MessageResponse {
            message: format!("Successfully created {} sample text entries", count),
        })
        .into_response(),
        Ok(SeedOutcome::AlreadySeeded(count)) => Json(MessageResponse {
            message: format!("Sample data already exists ({} samples)", count),
        })
        .into_response(),
        Err(e) => service_error(e),
    }
}
