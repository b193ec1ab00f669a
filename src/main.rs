//! Equity Score API server

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use equity_score::config::Config;
use equity_score::constants::{APP_NAME, APP_VERSION, DEFAULT_LOG_FILTER};
use equity_score::{create_router, AppState, PredictionService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    if config.json_logs() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("{} v{} starting ({})", APP_NAME, APP_VERSION, config.environment);
    tracing::info!("Artifacts: {}", config.artifact_dir.display());

    // Artifacts are loaded once; a failed load keeps the service up but unready
    let service = PredictionService::load(&config.artifact_paths());
    if service.is_ready() {
        tracing::info!("Model components loaded successfully");
    } else {
        tracing::warn!("Serving without a model; /predict will return 503");
    }

    let app = create_router(AppState::new(service));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
