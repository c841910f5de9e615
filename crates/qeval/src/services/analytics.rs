//! Read-time aggregation over the record store.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ServiceError;
use crate::models::{IssueTag, QualityLevel};
use crate::repository::{AnnotationRepository, ComparisonRepository, TextSampleRepository};

/// Store-wide statistics, recomputed on every call.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_samples: i64,
    pub total_annotations: i64,
    pub total_comparisons: i64,
    /// Coverage as "annotated/total (pct%)", see [`format_progress`].
    pub annotation_progress: String,
    /// Annotation count per quality level; zero-filled for all levels.
    pub quality_distribution: BTreeMap<String, i64>,
    /// Annotation count per issue tag; zero-filled for all tags.
    pub issue_distribution: BTreeMap<String, i64>,
}

/// Format annotation progress as `"annotated/total (pct%)"`.
///
/// Progress counts distinct annotated samples rather than annotation
/// submissions, so repeated review of one sample does not inflate it.
/// An empty store reports `0/0 (0.0%)` rather than dividing by zero.
pub fn format_progress(annotated: i64, total: i64) -> String {
    let pct = if total > 0 {
        annotated as f64 * 100.0 / total as f64
    } else {
        0.0
    };
    format!("{}/{} ({:.1}%)", annotated, total, pct)
}

/// Compute counts and distributions across all three collections.
pub async fn summarize(
    samples: &TextSampleRepository,
    annotations: &AnnotationRepository,
    comparisons: &ComparisonRepository,
) -> Result<Summary, ServiceError> {
    let total_samples = samples.count().await?;
    let total_annotations = annotations.count().await?;
    let total_comparisons = comparisons.count().await?;
    let annotated_samples = annotations.count_distinct_samples().await?;

    let mut quality_distribution = BTreeMap::new();
    for level in QualityLevel::ALL {
        let count = annotations.count_by_quality(level).await?;
        quality_distribution.insert(level.as_str().to_string(), count);
    }

    let mut issue_distribution = BTreeMap::new();
    for tag in IssueTag::ALL {
        let count = annotations.count_with_tag(tag).await?;
        issue_distribution.insert(tag.as_str().to_string(), count);
    }

    Ok(Summary {
        total_samples,
        total_annotations,
        total_comparisons,
        annotation_progress: format_progress(annotated_samples, total_samples),
        quality_distribution,
        issue_distribution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Annotation, TextSample};
    use crate::repository::{migrations, DbContext};
    use tempfile::tempdir;

    #[test]
    fn test_format_progress() {
        assert_eq!(format_progress(0, 0), "0/0 (0.0%)");
        assert_eq!(format_progress(0, 4), "0/4 (0.0%)");
        assert_eq!(format_progress(1, 3), "1/3 (33.3%)");
        assert_eq!(format_progress(10, 10), "10/10 (100.0%)");
    }

    async fn setup() -> (DbContext, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db_url = format!("sqlite:{}", db_path.display());
        migrations::run_migrations(&db_url).await.unwrap();
        (DbContext::from_sqlite_path(&db_path), dir)
    }

    #[tokio::test]
    async fn test_summarize_empty_store() {
        let (ctx, _dir) = setup().await;
        let summary = summarize(&ctx.samples(), &ctx.annotations(), &ctx.comparisons())
            .await
            .unwrap();

        assert_eq!(summary.total_samples, 0);
        assert_eq!(summary.total_annotations, 0);
        assert_eq!(summary.total_comparisons, 0);
        assert_eq!(summary.annotation_progress, "0/0 (0.0%)");
        assert_eq!(summary.quality_distribution.len(), 3);
        assert!(summary.quality_distribution.values().all(|&c| c == 0));
        assert_eq!(summary.issue_distribution.len(), 4);
        assert!(summary.issue_distribution.values().all(|&c| c == 0));
    }

    #[tokio::test]
    async fn test_summarize_distribution_sums_to_total() {
        let (ctx, _dir) = setup().await;
        let samples = ctx.samples();
        let annotations = ctx.annotations();

        let s1 = TextSample::new("first".to_string(), None, None);
        let s2 = TextSample::new("second".to_string(), None, None);
        samples.insert(&s1).await.unwrap();
        samples.insert(&s2).await.unwrap();

        for level in [QualityLevel::Good, QualityLevel::Good, QualityLevel::Poor] {
            annotations
                .insert(&Annotation::new(s1.id.clone(), level, vec![], None, None))
                .await
                .unwrap();
        }

        let summary = summarize(&samples, &annotations, &ctx.comparisons())
            .await
            .unwrap();
        assert_eq!(summary.total_annotations, 3);
        assert_eq!(
            summary.quality_distribution.values().sum::<i64>(),
            summary.total_annotations
        );
        assert_eq!(summary.quality_distribution["good"], 2);
        assert_eq!(summary.quality_distribution["average"], 0);
        // One of two samples annotated, despite three submissions.
        assert_eq!(summary.annotation_progress, "1/2 (50.0%)");
    }
}
