//! Typed API request and response structs.
//!
//! Domain models are mapped into explicit response structs deriving
//! `ToSchema` so the OpenAPI spec stays in lockstep with what the
//! handlers actually return.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use qeval::models::{Annotation, PairwiseComparison, TextSample};
use qeval::services::analytics::Summary;

/// Error payload returned on every failure.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Simple message payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Pagination parameters for listing endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageParams {
    /// Rows to skip
    pub skip: Option<i64>,
    /// Maximum rows to return (default 100, capped at 1000)
    pub limit: Option<i64>,
}

impl PageParams {
    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(100).clamp(1, 1000)
    }
}

/// Text sample returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct SampleResponse {
    pub id: String,
    pub text: String,
    pub source: Option<String>,
    pub topic: Option<String>,
    pub created_at: String,
}

impl From<TextSample> for SampleResponse {
    fn from(sample: TextSample) -> Self {
        Self {
            id: sample.id,
            text: sample.text,
            source: sample.source,
            topic: sample.topic,
            created_at: sample.created_at.to_rfc3339(),
        }
    }
}

/// Request to create a text sample manually.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSampleRequest {
    pub text: String,
    pub source: Option<String>,
    pub topic: Option<String>,
}

/// Annotation returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct AnnotationResponse {
    pub id: String,
    pub text_sample_id: String,
    pub quality_level: String,
    pub issue_tags: Vec<String>,
    pub notes: Option<String>,
    pub annotator_id: String,
    pub created_at: String,
}

impl From<Annotation> for AnnotationResponse {
    fn from(ann: Annotation) -> Self {
        Self {
            id: ann.id,
            text_sample_id: ann.text_sample_id,
            quality_level: ann.quality_level.as_str().to_string(),
            issue_tags: ann
                .issue_tags
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
            notes: ann.notes,
            annotator_id: ann.annotator_id,
            created_at: ann.created_at.to_rfc3339(),
        }
    }
}

/// Request to create an annotation. Enum-valued fields are plain
/// strings here; the review service validates them.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAnnotationRequest {
    pub text_sample_id: String,
    pub quality_level: String,
    #[serde(default)]
    pub issue_tags: Vec<String>,
    pub notes: Option<String>,
    pub annotator_id: Option<String>,
}

/// Pairwise comparison returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct ComparisonResponse {
    pub id: String,
    pub text_a_id: String,
    pub text_b_id: String,
    pub better_text_id: String,
    pub notes: Option<String>,
    pub annotator_id: String,
    pub created_at: String,
}

impl From<PairwiseComparison> for ComparisonResponse {
    fn from(cmp: PairwiseComparison) -> Self {
        Self {
            id: cmp.id,
            text_a_id: cmp.text_a_id,
            text_b_id: cmp.text_b_id,
            better_text_id: cmp.better_text_id,
            notes: cmp.notes,
            annotator_id: cmp.annotator_id,
            created_at: cmp.created_at.to_rfc3339(),
        }
    }
}

/// Request to record a pairwise comparison.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateComparisonRequest {
    pub text_a_id: String,
    pub text_b_id: String,
    pub better_text_id: String,
    pub notes: Option<String>,
    pub annotator_id: Option<String>,
}

/// Bulk upload result.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
    pub inserted_count: usize,
}

/// Analytics summary returned by `GET /analytics/summary`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    pub total_samples: i64,
    pub total_annotations: i64,
    pub total_comparisons: i64,
    pub annotation_progress: String,
    pub quality_distribution: std::collections::BTreeMap<String, i64>,
    pub issue_distribution: std::collections::BTreeMap<String, i64>,
}

impl From<Summary> for SummaryResponse {
    fn from(summary: Summary) -> Self {
        Self {
            total_samples: summary.total_samples,
            total_annotations: summary.total_annotations,
            total_comparisons: summary.total_comparisons,
            annotation_progress: summary.annotation_progress,
            quality_distribution: summary.quality_distribution,
            issue_distribution: summary.issue_distribution,
        }
    }
}
