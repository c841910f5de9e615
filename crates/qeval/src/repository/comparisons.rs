//! Diesel-based pairwise comparison repository.

use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::models::{ComparisonRecord, NewComparison};
use super::parse_datetime;
use super::pool::{DieselError, SqlitePool};
use crate::models::PairwiseComparison;
use crate::schema::pairwise_comparisons;

/// Convert a database record to a domain model.
impl From<ComparisonRecord> for PairwiseComparison {
    fn from(record: ComparisonRecord) -> Self {
        Self {
            id: record.id,
            text_a_id: record.text_a_id,
            text_b_id: record.text_b_id,
            better_text_id: record.better_text_id,
            notes: record.notes,
            annotator_id: record.annotator_id,
            created_at: parse_datetime(&record.created_at),
        }
    }
}

/// Diesel-based pairwise comparison repository.
#[derive(Clone)]
pub struct ComparisonRepository {
    pool: SqlitePool,
}

impl ComparisonRepository {
    /// Create a new comparison repository with an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a single comparison.
    pub async fn insert(&self, comparison: &PairwiseComparison) -> Result<(), DieselError> {
        let created_at = comparison.created_at.to_rfc3339();
        let record = NewComparison {
            id: &comparison.id,
            text_a_id: &comparison.text_a_id,
            text_b_id: &comparison.text_b_id,
            better_text_id: &comparison.better_text_id,
            notes: comparison.notes.as_deref(),
            annotator_id: &comparison.annotator_id,
            created_at: &created_at,
        };

        let mut conn = self.pool.get().await?;
        diesel::insert_into(pairwise_comparisons::table)
            .values(&record)
            .execute(&mut conn)
            .await?;
        Ok(())
    }

    /// Get a page of comparisons in creation order.
    pub async fn get_page(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<PairwiseComparison>, DieselError> {
        let mut conn = self.pool.get().await?;
        let records: Vec<ComparisonRecord> = pairwise_comparisons::table
            .order(pairwise_comparisons::created_at.asc())
            .offset(skip)
            .limit(limit)
            .load(&mut conn)
            .await?;
        Ok(records.into_iter().map(PairwiseComparison::from).collect())
    }

    /// Count all comparisons.
    pub async fn count(&self) -> Result<i64, DieselError> {
        let mut conn = self.pool.get().await?;
        pairwise_comparisons::table
            .select(count_star())
            .first(&mut conn)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::pool::SqlitePool;
    use super::*;
    use diesel_async::SimpleAsyncConnection;
    use tempfile::tempdir;

    async fn setup_test_db() -> (SqlitePool, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let pool = SqlitePool::from_path(&db_path);
        let mut conn = pool.get().await.unwrap();

        conn.batch_execute(
            r#"CREATE TABLE IF NOT EXISTS pairwise_comparisons (
                id TEXT PRIMARY KEY NOT NULL,
                text_a_id TEXT NOT NULL,
                text_b_id TEXT NOT NULL,
                better_text_id TEXT NOT NULL,
                notes TEXT,
                annotator_id TEXT NOT NULL DEFAULT 'default',
                created_at TEXT NOT NULL
            )"#,
        )
        .await
        .unwrap();

        (pool, dir)
    }

    #[tokio::test]
    async fn test_comparison_round_trip() {
        let (pool, _dir) = setup_test_db().await;
        let repo = ComparisonRepository::new(pool);

        let comparison = PairwiseComparison::new(
            "a".to_string(),
            "b".to_string(),
            "a".to_string(),
            Some("a reads better".to_string()),
            None,
        );
        repo.insert(&comparison).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let page = repo.get_page(0, 10).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].better_text_id, "a");
        assert_eq!(page[0].notes.as_deref(), Some("a reads better"));
        assert_eq!(page[0].annotator_id, "default");
    }
}
