//! Demo-data seeding.

use crate::error::ServiceError;
use crate::models::TextSample;
use crate::repository::TextSampleRepository;

/// Source label applied to every seeded sample.
const SEED_SOURCE: &str = "Demo";

/// Fixed demo set: (text, topic). The last few carry deliberate
/// grammar, factual, and truncation problems for annotation practice.
const SEED_SAMPLES: [(&str, &str); 15] = [
    (
        "The quick brown fox jumps over the lazy dog. This sentence contains every letter of the alphabet at least once.",
        "Grammar Example",
    ),
    (
        "Artificial intelligence has revolutionized many industries, from healthcare to autonomous vehicles, enabling unprecedented levels of automation and efficiency.",
        "Technology",
    ),
    (
        "Climate change is one of the most pressing issues of our time, requiring immediate global action to reduce greenhouse gas emissions and transition to renewable energy sources.",
        "Environment",
    ),
    (
        "The recipe for chocolate cake requires flour, sugar, eggs, and cocoa powder. Mix ingredients and bake at 350 degrees for 30 minutes.",
        "Cooking",
    ),
    (
        "Shakespeare wrote many famous plays including Hamlet, Romeo and Juliet, and Macbeth during the Elizabethan era of English literature.",
        "Literature",
    ),
    (
        "The stock market experienced significant volatility last week due to concerns about inflation and interest rate changes announced by the Federal Reserve.",
        "Finance",
    ),
    (
        "Regular exercise is essential for maintaining good health. It helps strengthen muscles, improve cardiovascular function, and boost mental wellbeing.",
        "Health",
    ),
    (
        "The new smartphone features include a 48-megapixel camera, 5G connectivity, and a battery life of up to 24 hours under normal usage conditions.",
        "Technology",
    ),
    (
        "Education is the foundation of personal growth and societal development. It empowers individuals to think critically and contribute meaningfully to their communities.",
        "Education",
    ),
    (
        "The museum's new exhibition showcases ancient artifacts from Egyptian civilization, including pottery, jewelry, and hieroglyphic inscriptions dating back 3000 years.",
        "History",
    ),
    (
        "Their going to the store later today and they're planning to buy some grocerys for dinner tonight.",
        "Grammar Practice",
    ),
    (
        "The capital of France is Berlin and it's known for the Eiffel Tower and delicious pasta dishes.",
        "Geography",
    ),
    (
        "Water boils at 100 degrees Celsius at sea level atmospheric pressure which equals",
        "Science",
    ),
    (
        "To make a paper airplane, first take a rectangular piece of paper and fold it in half lengthwise.",
        "Instructions",
    ),
    (
        "The movie was absolutely terrible and boring. I hated every minute of it and would never recommend it to anyone.",
        "Movie Review",
    ),
];

/// Result of a seed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty; this many samples were inserted.
    Seeded(usize),
    /// The store already held this many samples; nothing was inserted.
    AlreadySeeded(i64),
}

/// Insert the demo samples if the store is empty.
///
/// Idempotent: any existing sample suppresses the seed, so repeated
/// calls never duplicate records.
pub async fn seed_samples(repo: &TextSampleRepository) -> Result<SeedOutcome, ServiceError> {
    let existing = repo.count().await?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadySeeded(existing));
    }

    let samples: Vec<TextSample> = SEED_SAMPLES
        .iter()
        .map(|(text, topic)| {
            TextSample::new(
                text.to_string(),
                Some(SEED_SOURCE.to_string()),
                Some(topic.to_string()),
            )
        })
        .collect();

    let inserted = repo.insert_batch(&samples).await?;
    Ok(SeedOutcome::Seeded(inserted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{migrations, DbContext};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db_url = format!("sqlite:{}", db_path.display());
        migrations::run_migrations(&db_url).await.unwrap();

        let ctx = DbContext::from_sqlite_path(&db_path);
        let repo = ctx.samples();

        let first = seed_samples(&repo).await.unwrap();
        assert_eq!(first, SeedOutcome::Seeded(SEED_SAMPLES.len()));
        assert_eq!(repo.count().await.unwrap(), SEED_SAMPLES.len() as i64);

        let second = seed_samples(&repo).await.unwrap();
        assert_eq!(second, SeedOutcome::AlreadySeeded(SEED_SAMPLES.len() as i64));
        assert_eq!(repo.count().await.unwrap(), SEED_SAMPLES.len() as i64);
    }

    #[tokio::test]
    async fn test_seed_suppressed_by_any_existing_sample() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db_url = format!("sqlite:{}", db_path.display());
        migrations::run_migrations(&db_url).await.unwrap();

        let ctx = DbContext::from_sqlite_path(&db_path);
        let repo = ctx.samples();

        repo.insert(&TextSample::new("user data".to_string(), None, None))
            .await
            .unwrap();

        assert_eq!(
            seed_samples(&repo).await.unwrap(),
            SeedOutcome::AlreadySeeded(1)
        );
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
