//! Diesel-based annotation repository.

use diesel::dsl::{count_distinct, count_star};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::models::{AnnotationRecord, NewAnnotation};
use super::parse_datetime;
use super::pool::{DieselError, SqlitePool};
use crate::models::{Annotation, IssueTag, QualityLevel};
use crate::schema::annotations;

/// Convert a database record to a domain model.
///
/// Rows with malformed `issue_tags` JSON or unknown enum values fail
/// with a deserialization error rather than being silently coerced.
impl TryFrom<AnnotationRecord> for Annotation {
    type Error = DieselError;

    fn try_from(record: AnnotationRecord) -> Result<Self, Self::Error> {
        let quality_level = QualityLevel::from_str(&record.quality_level).ok_or_else(|| {
            DieselError::DeserializationError(
                format!("unknown quality level '{}'", record.quality_level).into(),
            )
        })?;

        let raw_tags: Vec<String> = serde_json::from_str(&record.issue_tags)
            .map_err(|e| DieselError::DeserializationError(Box::new(e)))?;
        let issue_tags = raw_tags
            .iter()
            .map(|tag| {
                IssueTag::from_str(tag).ok_or_else(|| {
                    DieselError::DeserializationError(format!("unknown issue tag '{}'", tag).into())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Annotation {
            id: record.id,
            text_sample_id: record.text_sample_id,
            quality_level,
            issue_tags,
            notes: record.notes,
            annotator_id: record.annotator_id,
            created_at: parse_datetime(&record.created_at),
        })
    }
}

/// Diesel-based annotation repository.
#[derive(Clone)]
pub struct AnnotationRepository {
    pool: SqlitePool,
}

impl AnnotationRepository {
    /// Create a new annotation repository with an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a single annotation.
    pub async fn insert(&self, annotation: &Annotation) -> Result<(), DieselError> {
        let tags: Vec<&str> = annotation.issue_tags.iter().map(|t| t.as_str()).collect();
        let issue_tags = serde_json::to_string(&tags)
            .map_err(|e| DieselError::SerializationError(Box::new(e)))?;
        let created_at = annotation.created_at.to_rfc3339();
        let record = NewAnnotation {
            id: &annotation.id,
            text_sample_id: &annotation.text_sample_id,
            quality_level: annotation.quality_level.as_str(),
            issue_tags: &issue_tags,
            notes: annotation.notes.as_deref(),
            annotator_id: &annotation.annotator_id,
            created_at: &created_at,
        };

        let mut conn = self.pool.get().await?;
        diesel::insert_into(annotations::table)
            .values(&record)
            .execute(&mut conn)
            .await?;
        Ok(())
    }

    /// Get a page of annotations in creation order.
    pub async fn get_page(&self, skip: i64, limit: i64) -> Result<Vec<Annotation>, DieselError> {
        let mut conn = self.pool.get().await?;
        let records: Vec<AnnotationRecord> = annotations::table
            .order(annotations::created_at.asc())
            .offset(skip)
            .limit(limit)
            .load(&mut conn)
            .await?;
        records.into_iter().map(Annotation::try_from).collect()
    }

    /// Get all annotations in creation order.
    pub async fn get_all(&self) -> Result<Vec<Annotation>, DieselError> {
        let mut conn = self.pool.get().await?;
        let records: Vec<AnnotationRecord> = annotations::table
            .order(annotations::created_at.asc())
            .load(&mut conn)
            .await?;
        records.into_iter().map(Annotation::try_from).collect()
    }

    /// Get all annotations for one sample, in creation order.
    pub async fn get_by_sample(&self, sample_id: &str) -> Result<Vec<Annotation>, DieselError> {
        let mut conn = self.pool.get().await?;
        let records: Vec<AnnotationRecord> = annotations::table
            .filter(annotations::text_sample_id.eq(sample_id))
            .order(annotations::created_at.asc())
            .load(&mut conn)
            .await?;
        records.into_iter().map(Annotation::try_from).collect()
    }

    /// Count all annotations.
    pub async fn count(&self) -> Result<i64, DieselError> {
        let mut conn = self.pool.get().await?;
        annotations::table
            .select(count_star())
            .first(&mut conn)
            .await
    }

    /// Count distinct samples that have at least one annotation.
    pub async fn count_distinct_samples(&self) -> Result<i64, DieselError> {
        let mut conn = self.pool.get().await?;
        annotations::table
            .select(count_distinct(annotations::text_sample_id))
            .first(&mut conn)
            .await
    }

    /// Count annotations with the given quality level.
    pub async fn count_by_quality(&self, level: QualityLevel) -> Result<i64, DieselError> {
        let mut conn = self.pool.get().await?;
        annotations::table
            .filter(annotations::quality_level.eq(level.as_str()))
            .select(count_star())
            .first(&mut conn)
            .await
    }

    /// Count annotations carrying the given issue tag.
    ///
    /// Tags are stored as a JSON array; matching on the quoted tag
    /// string is exact within the closed tag vocabulary.
    pub async fn count_with_tag(&self, tag: IssueTag) -> Result<i64, DieselError> {
        let pattern = format!("%\"{}\"%", tag.as_str());
        let mut conn = self.pool.get().await?;
        annotations::table
            .filter(annotations::issue_tags.like(pattern))
            .select(count_star())
            .first(&mut conn)
            .await
    }
}
