//! CSV export serialization.
//!
//! Two variants: annotations alone, and annotations joined with their
//! samples. Both are assembled in memory; record counts here are
//! bounded by review throughput, not machine-generated volume.

use std::collections::HashMap;

use crate::error::ServiceError;
use crate::models::{Annotation, TextSample};
use crate::repository::{AnnotationRepository, TextSampleRepository};

/// Header row of the annotations-only export.
pub const ANNOTATIONS_HEADER: &str =
    "id,text_sample_id,quality_level,issue_tags,notes,annotator_id,created_at";

/// Header row of the joined dataset export.
pub const FULL_DATASET_HEADER: &str =
    "sample_id,text,source,topic,quality_level,issue_tags,notes,created_at";

/// Export every annotation as CSV.
pub async fn annotations_csv(annotations: &AnnotationRepository) -> Result<String, ServiceError> {
    let records = annotations.get_all().await?;
    Ok(build_annotations_csv(&records))
}

/// Export samples joined with their annotations as CSV.
pub async fn full_dataset_csv(
    samples: &TextSampleRepository,
    annotations: &AnnotationRepository,
) -> Result<String, ServiceError> {
    let samples = samples.get_all().await?;
    let annotations = annotations.get_all().await?;
    Ok(build_full_dataset_csv(&samples, &annotations))
}

/// Build the annotations-only CSV. Zero records yield a header-only file.
pub fn build_annotations_csv(annotations: &[Annotation]) -> String {
    let mut output = String::from(ANNOTATIONS_HEADER);
    output.push('\n');

    for ann in annotations {
        let tags = join_tags(ann);
        output.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            ann.id,
            ann.text_sample_id,
            ann.quality_level.as_str(),
            escape_csv(&tags),
            escape_csv(ann.notes.as_deref().unwrap_or("")),
            escape_csv(&ann.annotator_id),
            ann.created_at.to_rfc3339(),
        ));
    }

    output
}

/// Build the joined dataset CSV.
///
/// Inner join: one row per annotation whose `text_sample_id` resolves
/// to a known sample, grouped under the samples in creation order.
/// Samples without annotations produce no row, and orphaned
/// annotations are left out.
pub fn build_full_dataset_csv(samples: &[TextSample], annotations: &[Annotation]) -> String {
    let mut by_sample: HashMap<&str, Vec<&Annotation>> = HashMap::new();
    for ann in annotations {
        by_sample
            .entry(ann.text_sample_id.as_str())
            .or_default()
            .push(ann);
    }

    let mut output = String::from(FULL_DATASET_HEADER);
    output.push('\n');

    for sample in samples {
        let Some(sample_annotations) = by_sample.get(sample.id.as_str()) else {
            continue;
        };
        for ann in sample_annotations {
            let tags = join_tags(ann);
            output.push_str(&format!(
                "{},{},{},{},{},{},{},{}\n",
                sample.id,
                escape_csv(&sample.text),
                escape_csv(sample.source.as_deref().unwrap_or("")),
                escape_csv(sample.topic.as_deref().unwrap_or("")),
                ann.quality_level.as_str(),
                escape_csv(&tags),
                escape_csv(ann.notes.as_deref().unwrap_or("")),
                sample.created_at.to_rfc3339(),
            ));
        }
    }

    output
}

fn join_tags(ann: &Annotation) -> String {
    ann.issue_tags
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IssueTag, QualityLevel};

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_csv(""), "");
    }

    fn annotation(sample_id: &str, notes: Option<&str>, tags: Vec<IssueTag>) -> Annotation {
        Annotation::new(
            sample_id.to_string(),
            QualityLevel::Average,
            tags,
            notes.map(str::to_string),
            None,
        )
    }

    #[test]
    fn test_annotations_csv_row_count_and_quoting() {
        let annotations = vec![
            annotation("s1", Some("clean"), vec![]),
            annotation(
                "s2",
                Some("commas, everywhere"),
                vec![IssueTag::GrammarError, IssueTag::HarmfulUnsafe],
            ),
        ];

        let csv = build_annotations_csv(&annotations);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], ANNOTATIONS_HEADER);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("\"commas, everywhere\""));
        assert!(lines[2].contains("\"grammar_error,harmful_unsafe\""));
    }

    #[test]
    fn test_annotations_csv_empty_is_header_only() {
        assert_eq!(
            build_annotations_csv(&[]),
            format!("{}\n", ANNOTATIONS_HEADER)
        );
    }

    #[test]
    fn test_full_dataset_csv_is_inner_join() {
        let annotated = TextSample::new("reviewed text".to_string(), None, None);
        let bare = TextSample::new("never reviewed".to_string(), None, None);
        let samples = vec![annotated.clone(), bare];

        let annotations = vec![
            annotation(&annotated.id, None, vec![]),
            annotation(&annotated.id, None, vec![]),
            annotation("missing-sample", None, vec![]),
        ];

        let csv = build_full_dataset_csv(&samples, &annotations);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], FULL_DATASET_HEADER);
        // Two rows for the annotated sample; the bare sample and the
        // orphaned annotation contribute none.
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with(&annotated.id));
        assert!(!csv.contains("never reviewed"));
    }
}
