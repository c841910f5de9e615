//! Diesel-based text sample repository.

use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::models::{NewTextSample, TextSampleRecord};
use super::parse_datetime;
use super::pool::{DieselError, SqlitePool};
use crate::models::TextSample;
use crate::schema::text_samples;

/// Convert a database record to a domain model.
impl From<TextSampleRecord> for TextSample {
    fn from(record: TextSampleRecord) -> Self {
        Self {
            id: record.id,
            text: record.text,
            source: record.source,
            topic: record.topic,
            created_at: parse_datetime(&record.created_at),
        }
    }
}

/// Diesel-based text sample repository.
#[derive(Clone)]
pub struct TextSampleRepository {
    pool: SqlitePool,
}

impl TextSampleRepository {
    /// Create a new text sample repository with an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a single sample.
    pub async fn insert(&self, sample: &TextSample) -> Result<(), DieselError> {
        let created_at = sample.created_at.to_rfc3339();
        let record = NewTextSample {
            id: &sample.id,
            text: &sample.text,
            source: sample.source.as_deref(),
            topic: sample.topic.as_deref(),
            created_at: &created_at,
        };

        let mut conn = self.pool.get().await?;
        diesel::insert_into(text_samples::table)
            .values(&record)
            .execute(&mut conn)
            .await?;
        Ok(())
    }

    /// Insert a batch of samples in one statement. Returns rows inserted.
    pub async fn insert_batch(&self, samples: &[TextSample]) -> Result<usize, DieselError> {
        if samples.is_empty() {
            return Ok(0);
        }

        let timestamps: Vec<String> = samples.iter().map(|s| s.created_at.to_rfc3339()).collect();
        let records: Vec<NewTextSample> = samples
            .iter()
            .zip(timestamps.iter())
            .map(|(sample, created_at)| NewTextSample {
                id: &sample.id,
                text: &sample.text,
                source: sample.source.as_deref(),
                topic: sample.topic.as_deref(),
                created_at,
            })
            .collect();

        let mut conn = self.pool.get().await?;
        diesel::insert_into(text_samples::table)
            .values(&records)
            .execute(&mut conn)
            .await
    }

    /// Get a sample by ID.
    pub async fn get(&self, id: &str) -> Result<Option<TextSample>, DieselError> {
        let mut conn = self.pool.get().await?;
        let record: Option<TextSampleRecord> = text_samples::table
            .find(id)
            .first(&mut conn)
            .await
            .optional()?;
        Ok(record.map(TextSample::from))
    }

    /// Get a page of samples in creation order.
    pub async fn get_page(&self, skip: i64, limit: i64) -> Result<Vec<TextSample>, DieselError> {
        let mut conn = self.pool.get().await?;
        let records: Vec<TextSampleRecord> = text_samples::table
            .order(text_samples::created_at.asc())
            .offset(skip)
            .limit(limit)
            .load(&mut conn)
            .await?;
        Ok(records.into_iter().map(TextSample::from).collect())
    }

    /// Get all samples in creation order.
    pub async fn get_all(&self) -> Result<Vec<TextSample>, DieselError> {
        let mut conn = self.pool.get().await?;
        let records: Vec<TextSampleRecord> = text_samples::table
            .order(text_samples::created_at.asc())
            .load(&mut conn)
            .await?;
        Ok(records.into_iter().map(TextSample::from).collect())
    }

    /// Count all samples.
    pub async fn count(&self) -> Result<i64, DieselError> {
        let mut conn = self.pool.get().await?;
        text_samples::table
            .select(count_star())
            .first(&mut conn)
            .await
    }

    /// Check if a sample exists.
    pub async fn exists(&self, id: &str) -> Result<bool, DieselError> {
        let mut conn = self.pool.get().await?;
        let count: i64 = text_samples::table
            .filter(text_samples::id.eq(id))
            .select(count_star())
            .first(&mut conn)
            .await?;
        Ok(count > 0)
    }

    /// Delete a sample. Returns true if a row was removed.
    ///
    /// Annotations referencing the sample are left in place; integrity
    /// is advisory and orphans are tolerated.
    pub async fn delete(&self, id: &str) -> Result<bool, DieselError> {
        let mut conn = self.pool.get().await?;
        let rows = diesel::delete(text_samples::table.find(id))
            .execute(&mut conn)
            .await?;
        Ok(rows > 0)
    }

    /// Draw up to two distinct samples uniformly at random.
    pub async fn random_pair(&self) -> Result<Vec<TextSample>, DieselError> {
        let mut conn = self.pool.get().await?;
        let records: Vec<TextSampleRecord> = diesel::sql_query(
            "SELECT id, text, source, topic, created_at FROM text_samples ORDER BY RANDOM() LIMIT 2",
        )
        .load(&mut conn)
        .await?;
        Ok(records.into_iter().map(TextSample::from).collect())
    }
}
