//! Services behind the HTTP API.
//!
//! Each module owns one operation family: bulk ingestion, review
//! (annotations, comparisons, random pairs), read-time analytics,
//! CSV export, and demo-data seeding.

pub mod analytics;
pub mod export;
pub mod ingest;
pub mod review;
pub mod seed;
