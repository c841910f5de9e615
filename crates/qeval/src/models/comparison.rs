//! Pairwise preference judgments between two text samples.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DEFAULT_ANNOTATOR;

/// A recorded preference between two text samples.
///
/// Invariant: `better_text_id` is one of `text_a_id` / `text_b_id`,
/// and the two sides differ. Enforced at creation time, not by the
/// store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairwiseComparison {
    pub id: String,
    pub text_a_id: String,
    pub text_b_id: String,
    pub better_text_id: String,
    pub notes: Option<String>,
    pub annotator_id: String,
    pub created_at: DateTime<Utc>,
}

impl PairwiseComparison {
    /// Create a new comparison with a generated id and creation timestamp.
    pub fn new(
        text_a_id: String,
        text_b_id: String,
        better_text_id: String,
        notes: Option<String>,
        annotator_id: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text_a_id,
            text_b_id,
            better_text_id,
            notes,
            annotator_id: annotator_id.unwrap_or_else(|| DEFAULT_ANNOTATOR.to_string()),
            created_at: Utc::now(),
        }
    }
}
