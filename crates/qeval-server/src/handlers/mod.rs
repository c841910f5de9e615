//! HTTP request handlers for the web server.

mod analytics_api;
mod annotations_api;
mod api;
pub mod api_types;
mod comparisons_api;
mod export_api;
mod helpers;
mod ingest_api;
mod openapi;
mod samples_api;
mod seed_api;

// Re-export handlers for use by the router
pub use analytics_api::analytics_summary;
pub use annotations_api::{annotations_for_sample, create_annotation, list_annotations};
pub use api::{health, root};
pub use comparisons_api::{create_comparison, list_comparisons};
pub use export_api::{export_annotations_csv, export_full_dataset_csv};
pub use ingest_api::{upload_csv, upload_json};
pub use openapi::openapi_spec;
pub use samples_api::{create_sample, delete_sample, get_sample, list_samples, random_pair};
pub use seed_api::initialize_sample_data;
