//! Equity Score - student exam score prediction with equity insights
//!
//! Serves a pre-trained linear model over HTTP. Each request is validated,
//! turned into a scaled feature vector, scored, clamped to `[0, 100]`, and
//! interpreted into a performance level, equity risk factors,
//! recommendations and mission insights.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      EQUITY SCORE API                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │  handlers (axum) ──▶ PredictionService (readiness gate)      │
//! │                         │                                    │
//! │        ┌────────────────┼──────────────────┐                 │
//! │        ▼                ▼                  ▼                 │
//! │   Vectorizer        Predictor        Insight engine          │
//! │ (layout, encode,  (linear model,    (bands, risk rules,      │
//! │    scale)           clamp)           recommendations)        │
//! │        ▲                ▲                                    │
//! │        └──── artifacts/*.json (loaded once) ─┘               │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};
pub use logic::PredictionService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
}

impl AppState {
    pub fn new(service: PredictionService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::info::root))
        .route("/health", get(handlers::health::check))
        .route("/model-info", get(handlers::info::model_info))
        .route("/predict", post(handlers::predict::predict))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
