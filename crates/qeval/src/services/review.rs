//! Review operations: annotations, pairwise comparisons, random pairs.

use crate::error::ServiceError;
use crate::models::{Annotation, IssueTag, PairwiseComparison, QualityLevel, TextSample};
use crate::repository::{AnnotationRepository, ComparisonRepository, TextSampleRepository};

/// Annotation request as received at the API boundary.
///
/// Enum-valued fields arrive as strings and are validated here, so bad
/// values surface as validation errors with usable messages instead of
/// opaque decode failures.
#[derive(Debug, Clone)]
pub struct AnnotationDraft {
    pub text_sample_id: String,
    pub quality_level: String,
    pub issue_tags: Vec<String>,
    pub notes: Option<String>,
    pub annotator_id: Option<String>,
}

/// Comparison request as received at the API boundary.
#[derive(Debug, Clone)]
pub struct ComparisonDraft {
    pub text_a_id: String,
    pub text_b_id: String,
    pub better_text_id: String,
    pub notes: Option<String>,
    pub annotator_id: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Validate and store a single annotation.
///
/// The referenced sample is deliberately not required to exist:
/// reviewers may annotate samples known only from exports.
pub async fn create_annotation(
    repo: &AnnotationRepository,
    draft: AnnotationDraft,
) -> Result<Annotation, ServiceError> {
    if draft.text_sample_id.trim().is_empty() {
        return Err(ServiceError::validation("text_sample_id must not be empty"));
    }

    let quality_level = QualityLevel::from_str(&draft.quality_level).ok_or_else(|| {
        ServiceError::validation(format!(
            "Invalid quality level '{}': expected one of good, average, poor",
            draft.quality_level
        ))
    })?;

    let mut issue_tags: Vec<IssueTag> = Vec::new();
    for tag in &draft.issue_tags {
        let parsed = IssueTag::from_str(tag)
            .ok_or_else(|| ServiceError::validation(format!("Unknown issue tag '{}'", tag)))?;
        if !issue_tags.contains(&parsed) {
            issue_tags.push(parsed);
        }
    }

    let annotation = Annotation::new(
        draft.text_sample_id,
        quality_level,
        issue_tags,
        non_empty(draft.notes),
        non_empty(draft.annotator_id),
    );
    repo.insert(&annotation).await?;
    Ok(annotation)
}

/// Validate and store a pairwise comparison result.
pub async fn create_comparison(
    repo: &ComparisonRepository,
    draft: ComparisonDraft,
) -> Result<PairwiseComparison, ServiceError> {
    if draft.text_a_id.trim().is_empty() || draft.text_b_id.trim().is_empty() {
        return Err(ServiceError::validation(
            "text_a_id and text_b_id must not be empty",
        ));
    }
    if draft.text_a_id == draft.text_b_id {
        return Err(ServiceError::validation(
            "A comparison requires two different text samples",
        ));
    }
    if draft.better_text_id != draft.text_a_id && draft.better_text_id != draft.text_b_id {
        return Err(ServiceError::validation(
            "better_text_id must be one of text_a_id or text_b_id",
        ));
    }

    let comparison = PairwiseComparison::new(
        draft.text_a_id,
        draft.text_b_id,
        draft.better_text_id,
        non_empty(draft.notes),
        non_empty(draft.annotator_id),
    );
    repo.insert(&comparison).await?;
    Ok(comparison)
}

/// Draw two distinct samples uniformly at random, without replacement.
///
/// Returns an empty list when fewer than two samples exist; repeat
/// pairings across calls are allowed.
pub async fn random_pair(repo: &TextSampleRepository) -> Result<Vec<TextSample>, ServiceError> {
    let pair = repo.random_pair().await?;
    if pair.len() < 2 {
        return Ok(Vec::new());
    }
    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{migrations, DbContext};
    use tempfile::tempdir;

    async fn setup() -> (DbContext, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db_url = format!("sqlite:{}", db_path.display());
        migrations::run_migrations(&db_url).await.unwrap();
        (DbContext::from_sqlite_path(&db_path), dir)
    }

    fn draft(quality_level: &str, issue_tags: &[&str]) -> AnnotationDraft {
        AnnotationDraft {
            text_sample_id: "sample-1".to_string(),
            quality_level: quality_level.to_string(),
            issue_tags: issue_tags.iter().map(|s| s.to_string()).collect(),
            notes: None,
            annotator_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_annotation_persists() {
        let (ctx, _dir) = setup().await;
        let repo = ctx.annotations();

        let ann = create_annotation(&repo, draft("good", &["grammar_error"]))
            .await
            .unwrap();
        assert_eq!(ann.quality_level, QualityLevel::Good);
        assert_eq!(ann.issue_tags, vec![IssueTag::GrammarError]);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_annotation_rejects_bad_enum_values() {
        let (ctx, _dir) = setup().await;
        let repo = ctx.annotations();

        let err = create_annotation(&repo, draft("great", &[])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = create_annotation(&repo, draft("good", &["spelling"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let mut empty_id = draft("good", &[]);
        empty_id.text_sample_id = "  ".to_string();
        let err = create_annotation(&repo, empty_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        // Nothing was stored.
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_annotation_dedupes_tags() {
        let (ctx, _dir) = setup().await;
        let repo = ctx.annotations();

        let ann = create_annotation(&repo, draft("poor", &["grammar_error", "grammar_error"]))
            .await
            .unwrap();
        assert_eq!(ann.issue_tags, vec![IssueTag::GrammarError]);
    }

    #[tokio::test]
    async fn test_create_annotation_allows_unknown_sample() {
        // Advisory integrity: the sample does not have to exist.
        let (ctx, _dir) = setup().await;
        let repo = ctx.annotations();

        assert!(create_annotation(&repo, draft("average", &[])).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_comparison_validations() {
        let (ctx, _dir) = setup().await;
        let repo = ctx.comparisons();

        let base = ComparisonDraft {
            text_a_id: "a".to_string(),
            text_b_id: "b".to_string(),
            better_text_id: "a".to_string(),
            notes: None,
            annotator_id: None,
        };

        assert!(create_comparison(&repo, base.clone()).await.is_ok());

        let mut same = base.clone();
        same.text_b_id = "a".to_string();
        assert!(matches!(
            create_comparison(&repo, same).await.unwrap_err(),
            ServiceError::Validation(_)
        ));

        let mut outsider = base.clone();
        outsider.better_text_id = "c".to_string();
        assert!(matches!(
            create_comparison(&repo, outsider).await.unwrap_err(),
            ServiceError::Validation(_)
        ));

        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_random_pair_sizes() {
        let (ctx, _dir) = setup().await;
        let samples = ctx.samples();

        assert!(random_pair(&samples).await.unwrap().is_empty());

        samples
            .insert(&TextSample::new("one".to_string(), None, None))
            .await
            .unwrap();
        assert!(random_pair(&samples).await.unwrap().is_empty());

        samples
            .insert(&TextSample::new("two".to_string(), None, None))
            .await
            .unwrap();
        let pair = random_pair(&samples).await.unwrap();
        assert_eq!(pair.len(), 2);
        assert_ne!(pair[0].id, pair[1].id);
    }
}
