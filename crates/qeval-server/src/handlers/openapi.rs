//! OpenAPI spec generation and serving.

use axum::response::IntoResponse;
use axum::Json;
use utoipa::OpenApi;

use super::analytics_api;
use super::annotations_api;
use super::api;
use super::api_types;
use super::comparisons_api;
use super::export_api;
use super::ingest_api;
use super::samples_api;
use super::seed_api;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "qeval API",
        description = "Text-sample annotation and quality evaluation backend",
        version = "0.4.0"
    ),
    paths(
        // Service
        api::health,
        api::root,
        seed_api::initialize_sample_data,
        // Samples
        samples_api::list_samples,
        samples_api::create_sample,
        samples_api::get_sample,
        samples_api::delete_sample,
        samples_api::random_pair,
        // Ingest
        ingest_api::upload_csv,
        ingest_api::upload_json,
        // Annotations
        annotations_api::create_annotation,
        annotations_api::list_annotations,
        annotations_api::annotations_for_sample,
        // Comparisons
        comparisons_api::create_comparison,
        comparisons_api::list_comparisons,
        // Analytics
        analytics_api::analytics_summary,
        // Export
        export_api::export_annotations_csv,
        export_api::export_full_dataset_csv,
    ),
    components(schemas(
        api_types::AnnotationResponse,
        api_types::ComparisonResponse,
        api_types::CreateAnnotationRequest,
        api_types::CreateComparisonRequest,
        api_types::CreateSampleRequest,
        api_types::ErrorBody,
        api_types::MessageResponse,
        api_types::SampleResponse,
        api_types::SummaryResponse,
        api_types::UploadResponse,
    ))
)]
struct ApiDoc;

/// Serve the generated OpenAPI document.
pub async fn openapi_spec() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
