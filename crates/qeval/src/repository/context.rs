//! Database context for managing the connection pool and repository access.

use std::path::Path;

use super::annotations::AnnotationRepository;
use super::comparisons::ComparisonRepository;
use super::pool::{DieselError, SqlitePool};
use super::samples::TextSampleRepository;

/// Database context that owns the connection pool and vends repositories.
///
/// This is the primary entry point for database operations: create one
/// context per command or service, then use it to access repositories.
#[derive(Clone)]
pub struct DbContext {
    pool: SqlitePool,
}

impl DbContext {
    /// Create a new database context from a database URL.
    ///
    /// Accepts `sqlite:path/to/db.sqlite3` URLs or plain file paths.
    pub fn from_url(database_url: &str) -> Self {
        Self {
            pool: SqlitePool::new(database_url),
        }
    }

    /// Create a new database context from a SQLite file path.
    pub fn from_sqlite_path(db_path: &Path) -> Self {
        Self {
            pool: SqlitePool::from_path(db_path),
        }
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get a text sample repository.
    pub fn samples(&self) -> TextSampleRepository {
        TextSampleRepository::new(self.pool.clone())
    }

    /// Get an annotation repository.
    pub fn annotations(&self) -> AnnotationRepository {
        AnnotationRepository::new(self.pool.clone())
    }

    /// Get a pairwise comparison repository.
    pub fn comparisons(&self) -> ComparisonRepository {
        ComparisonRepository::new(self.pool.clone())
    }

    /// Test that the database connection works.
    ///
    /// For SQLite this creates the database file if it doesn't exist;
    /// call early in startup to fail fast on filesystem issues.
    pub async fn test_connection(&self) -> Result<(), DieselError> {
        self.pool.get().await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::super::migrations;
    use super::*;
    use crate::models::TextSample;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_context_with_migrated_schema() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let db_url = format!("sqlite:{}", db_path.display());
        migrations::run_migrations(&db_url).await.unwrap();

        let ctx = DbContext::from_sqlite_path(&db_path);
        ctx.test_connection().await.unwrap();

        // All three tables are present and empty.
        assert_eq!(ctx.samples().count().await.unwrap(), 0);
        assert_eq!(ctx.annotations().count().await.unwrap(), 0);
        assert_eq!(ctx.comparisons().count().await.unwrap(), 0);

        // Migrations are idempotent.
        migrations::run_migrations(&db_url).await.unwrap();

        let sample = TextSample::new("still works".to_string(), None, None);
        ctx.samples().insert(&sample).await.unwrap();
        assert_eq!(ctx.samples().count().await.unwrap(), 1);
    }
}
