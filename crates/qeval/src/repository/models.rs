//! Diesel ORM row structs for database tables.
//!
//! These provide compile-time type checking for database operations;
//! conversion into domain models lives with each repository.

use diesel::prelude::*;

use crate::schema;

/// Text sample row from the database.
#[derive(Queryable, QueryableByName, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::text_samples)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TextSampleRecord {
    pub id: String,
    pub text: String,
    pub source: Option<String>,
    pub topic: Option<String>,
    pub created_at: String,
}

/// New text sample for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::text_samples)]
pub struct NewTextSample<'a> {
    pub id: &'a str,
    pub text: &'a str,
    pub source: Option<&'a str>,
    pub topic: Option<&'a str>,
    pub created_at: &'a str,
}

/// Annotation row from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::annotations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AnnotationRecord {
    pub id: String,
    pub text_sample_id: String,
    pub quality_level: String,
    pub issue_tags: String,
    pub notes: Option<String>,
    pub annotator_id: String,
    pub created_at: String,
}

/// New annotation for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::annotations)]
pub struct NewAnnotation<'a> {
    pub id: &'a str,
    pub text_sample_id: &'a str,
    pub quality_level: &'a str,
    pub issue_tags: &'a str,
    pub notes: Option<&'a str>,
    pub annotator_id: &'a str,
    pub created_at: &'a str,
}

/// Pairwise comparison row from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::pairwise_comparisons)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ComparisonRecord {
    pub id: String,
    pub text_a_id: String,
    pub text_b_id: String,
    pub better_text_id: String,
    pub notes: Option<String>,
    pub annotator_id: String,
    pub created_at: String,
}

/// New pairwise comparison for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::pairwise_comparisons)]
pub struct NewComparison<'a> {
    pub id: &'a str,
    pub text_a_id: &'a str,
    pub text_b_id: &'a str,
    pub better_text_id: &'a str,
    pub notes: Option<&'a str>,
    pub annotator_id: &'a str,
    pub created_at: &'a str,
}
