//! Web server for the qeval annotation API.
//!
//! Thin axum handlers over the core services: sample CRUD and random
//! pairs, bulk CSV/JSON ingestion, annotation and comparison review,
//! summary analytics, and CSV export.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use qeval::config::Settings;
use qeval::repository::{AnnotationRepository, ComparisonRepository, TextSampleRepository};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub samples: Arc<TextSampleRepository>,
    pub annotations: Arc<AnnotationRepository>,
    pub comparisons: Arc<ComparisonRepository>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let ctx = settings.create_db_context();
        Self {
            samples: Arc::new(ctx.samples()),
            annotations: Arc::new(ctx.annotations()),
            comparisons: Arc::new(ctx.comparisons()),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
