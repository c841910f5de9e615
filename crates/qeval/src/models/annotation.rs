//! Quality annotations attached to text samples.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Annotator recorded when the caller does not identify one.
pub const DEFAULT_ANNOTATOR: &str = "default";

/// Discrete quality judgment for a text sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLevel {
    Good,
    Average,
    Poor,
}

impl QualityLevel {
    /// All levels, in display order.
    pub const ALL: [QualityLevel; 3] = [Self::Good, Self::Average, Self::Poor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "good" => Some(Self::Good),
            "average" => Some(Self::Average),
            "poor" => Some(Self::Poor),
            _ => None,
        }
    }
}

/// Defect category attached to an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueTag {
    GrammarError,
    IrrelevantContent,
    HarmfulUnsafe,
    IncompleteTruncated,
}

impl IssueTag {
    /// All tags, in display order.
    pub const ALL: [IssueTag; 4] = [
        Self::GrammarError,
        Self::IrrelevantContent,
        Self::HarmfulUnsafe,
        Self::IncompleteTruncated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GrammarError => "grammar_error",
            Self::IrrelevantContent => "irrelevant_content",
            Self::HarmfulUnsafe => "harmful_unsafe",
            Self::IncompleteTruncated => "incomplete_truncated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "grammar_error" => Some(Self::GrammarError),
            "irrelevant_content" => Some(Self::IrrelevantContent),
            "harmful_unsafe" => Some(Self::HarmfulUnsafe),
            "incomplete_truncated" => Some(Self::IncompleteTruncated),
            _ => None,
        }
    }
}

/// A single reviewer's quality judgment on one text sample.
///
/// Multiple annotations may exist per sample (one per reviewer pass);
/// uniqueness is deliberately not enforced. The referenced sample is
/// not required to exist, since reviewers may annotate samples known
/// only from exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    pub text_sample_id: String,
    pub quality_level: QualityLevel,
    pub issue_tags: Vec<IssueTag>,
    pub notes: Option<String>,
    pub annotator_id: String,
    pub created_at: DateTime<Utc>,
}

impl Annotation {
    /// Create a new annotation with a generated id and creation timestamp.
    pub fn new(
        text_sample_id: String,
        quality_level: QualityLevel,
        issue_tags: Vec<IssueTag>,
        notes: Option<String>,
        annotator_id: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text_sample_id,
            quality_level,
            issue_tags,
            notes,
            annotator_id: annotator_id.unwrap_or_else(|| DEFAULT_ANNOTATOR.to_string()),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_level_round_trip() {
        for level in QualityLevel::ALL {
            assert_eq!(QualityLevel::from_str(level.as_str()), Some(level));
        }
        assert_eq!(QualityLevel::from_str("great"), None);
        assert_eq!(QualityLevel::from_str(""), None);
    }

    #[test]
    fn test_issue_tag_round_trip() {
        for tag in IssueTag::ALL {
            assert_eq!(IssueTag::from_str(tag.as_str()), Some(tag));
        }
        assert_eq!(IssueTag::from_str("spelling"), None);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&QualityLevel::Good).unwrap();
        assert_eq!(json, "\"good\"");
        let tag: IssueTag = serde_json::from_str("\"incomplete_truncated\"").unwrap();
        assert_eq!(tag, IssueTag::IncompleteTruncated);
    }

    #[test]
    fn test_new_defaults_annotator() {
        let ann = Annotation::new("s1".to_string(), QualityLevel::Poor, vec![], None, None);
        assert_eq!(ann.annotator_id, DEFAULT_ANNOTATOR);

        let ann = Annotation::new(
            "s1".to_string(),
            QualityLevel::Good,
            vec![IssueTag::GrammarError],
            Some("typo".to_string()),
            Some("alice".to_string()),
        );
        assert_eq!(ann.annotator_id, "alice");
    }
}
