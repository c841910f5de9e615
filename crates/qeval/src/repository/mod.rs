//! Repository layer for database persistence.
//!
//! All database access uses Diesel ORM through diesel-async's sync
//! connection wrapper over SQLite. Each entity kind gets its own
//! repository over the shared [`SqlitePool`].

pub mod annotations;
pub mod comparisons;
pub mod context;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod samples;

pub use annotations::AnnotationRepository;
pub use comparisons::ComparisonRepository;
pub use context::DbContext;
pub use pool::{DieselError, SqlitePool};
pub use samples::TextSampleRepository;

use chrono::{DateTime, Utc};

/// Parse a datetime string from the database, defaulting to Unix epoch on error.
pub fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}
