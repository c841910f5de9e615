//! Command-line interface for qeval.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use qeval::config::Settings;
use qeval::repository::migrations;
use qeval::services::seed::{self, SeedOutcome};

#[derive(Parser)]
#[command(
    name = "qeval",
    version,
    about = "Text-sample annotation and quality evaluation backend"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base data directory (holds the SQLite database)
    #[arg(long, env = "QEVAL_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Database URL (overrides the data directory path)
    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and run database migrations
    Init,
    /// Insert the fixed demo samples (no-op if samples exist)
    Seed,
    /// Run the web server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to listen on
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

/// Peek at argv for the verbose flag before clap runs, so logging can
/// be initialized first.
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

fn build_settings(cli: &Cli) -> Settings {
    let mut settings = match &cli.data_dir {
        Some(dir) => Settings::with_data_dir(dir.clone()),
        None => Settings::default(),
    };
    settings.database_url = cli.database_url.clone();
    settings
}

/// Ensure the data directory exists and the schema is current.
async fn prepare(settings: &Settings) -> anyhow::Result<()> {
    settings.ensure_directories()?;
    migrations::run_migrations(&settings.database_url()).await?;
    Ok(())
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = build_settings(&cli);

    match cli.command {
        Commands::Init => {
            prepare(&settings).await?;
            println!("Database ready at {}", settings.database_url());
        }
        Commands::Seed => {
            prepare(&settings).await?;
            let ctx = settings.create_db_context();
            match seed::seed_samples(&ctx.samples()).await? {
                SeedOutcome::Seeded(count) => {
                    println!("Created {} sample text entries", count);
                }
                SeedOutcome::AlreadySeeded(count) => {
                    println!("Sample data already exists ({} samples)", count);
                }
            }
        }
        Commands::Serve { host, port } => {
            prepare(&settings).await?;
            qeval_server::serve(&settings, &host, port).await?;
        }
    }

    Ok(())
}
