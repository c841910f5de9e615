//! Application settings.

use std::fs;
use std::path::PathBuf;

use crate::repository::DbContext;

/// Default database filename inside the data directory.
pub const DEFAULT_DATABASE_FILENAME: &str = "qeval.sqlite3";

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base data directory.
    pub data_dir: PathBuf,
    /// Database filename.
    pub database_filename: String,
    /// Database URL (overrides data_dir/database_filename if set).
    /// Set via the DATABASE_URL env var or the --database-url flag.
    pub database_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        // Default to the platform data directory, falling back to the
        // home directory and finally the current directory.
        let data_dir = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("qeval");

        Self {
            data_dir,
            database_filename: DEFAULT_DATABASE_FILENAME.to_string(),
            database_url: None,
        }
    }
}

impl Settings {
    /// Create settings with a custom data directory.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Default::default()
        }
    }

    /// Get the database URL, constructing from path if not explicitly set.
    pub fn database_url(&self) -> String {
        if let Some(ref url) = self.database_url {
            url.clone()
        } else {
            let path = self.data_dir.join(&self.database_filename);
            format!("sqlite:{}", path.display())
        }
    }

    /// Get the full path to the SQLite database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_filename)
    }

    /// Ensure the data directory exists.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.data_dir).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to create data directory '{}': {}",
                    self.data_dir.display(),
                    e
                ),
            )
        })
    }

    /// Create a database context using the configured database URL or path.
    pub fn create_db_context(&self) -> DbContext {
        DbContext::from_url(&self.database_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_from_path() {
        let settings = Settings::with_data_dir(PathBuf::from("/tmp/qeval-test"));
        assert_eq!(
            settings.database_url(),
            format!("sqlite:/tmp/qeval-test/{}", DEFAULT_DATABASE_FILENAME)
        );
    }

    #[test]
    fn test_explicit_database_url_wins() {
        let mut settings = Settings::with_data_dir(PathBuf::from("/tmp/qeval-test"));
        settings.database_url = Some("sqlite:/elsewhere/db.sqlite3".to_string());
        assert_eq!(settings.database_url(), "sqlite:/elsewhere/db.sqlite3");
    }
}
