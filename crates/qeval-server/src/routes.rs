//! Router configuration for the web server.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check for container orchestration
        .route("/health", get(handlers::health))
        .route("/", get(handlers::root))
        // Text samples
        .route(
            "/text-samples",
            get(handlers::list_samples).post(handlers::create_sample),
        )
        .route("/text-samples/random-pair", get(handlers::random_pair))
        .route("/text-samples/upload-csv", post(handlers::upload_csv))
        .route("/text-samples/upload-json", post(handlers::upload_json))
        .route(
            "/text-samples/:sample_id",
            get(handlers::get_sample).delete(handlers::delete_sample),
        )
        // Annotations
        .route(
            "/annotations",
            get(handlers::list_annotations).post(handlers::create_annotation),
        )
        .route(
            "/annotations/text-sample/:sample_id",
            get(handlers::annotations_for_sample),
        )
        // Pairwise comparisons
        .route(
            "/pairwise-comparisons",
            get(handlers::list_comparisons).post(handlers::create_comparison),
        )
        // Analytics
        .route("/analytics/summary", get(handlers::analytics_summary))
        // Export
        .route(
            "/export/annotations-csv",
            get(handlers::export_annotations_csv),
        )
        .route(
            "/export/full-dataset-csv",
            get(handlers::export_full_dataset_csv),
        )
        // Demo data
        .route(
            "/initialize-sample-data",
            post(handlers::initialize_sample_data),
        )
        // OpenAPI spec
        .route("/openapi.json", get(handlers::openapi_spec))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
