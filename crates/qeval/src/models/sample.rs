//! Text samples awaiting quality review.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unit of text content to be evaluated by reviewers.
///
/// Samples are immutable after creation; reviewers attach annotations
/// and pairwise comparisons to them by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSample {
    /// Unique identifier, assigned at creation.
    pub id: String,
    /// The text under review.
    pub text: String,
    /// Where the text came from, if known.
    pub source: Option<String>,
    /// Free-form topic label, if known.
    pub topic: Option<String>,
    /// When the sample was created.
    pub created_at: DateTime<Utc>,
}

impl TextSample {
    /// Create a new sample with a generated id and creation timestamp.
    pub fn new(text: String, source: Option<String>, topic: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            source,
            topic,
            created_at: Utc::now(),
        }
    }
}
