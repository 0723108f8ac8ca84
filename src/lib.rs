//! Crypto Predictor - indicator-driven BUY/SELL signals for crypto trading pairs

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

use axum::Router;
use config::Config;
use services::Predictor;
use sources::{BinanceClient, CandleSource};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
}

impl AppState {
    /// Build state around an arbitrary candle source.
    pub fn new(config: Config, source: Arc<dyn CandleSource>) -> Self {
        let predictor = Predictor::new(
            source,
            config.candle_limit,
            Duration::from_secs(config.fetch_timeout_secs),
        );
        Self { predictor }
    }

    /// Build state backed by the Binance REST API.
    pub fn with_binance(config: Config) -> Self {
        let source = Arc::new(BinanceClient::new(
            config.binance_base_url.clone(),
            Duration::from_secs(config.fetch_timeout_secs),
        ));
        Self::new(config, source)
    }
}

/// Build the full HTTP application.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use error::{AppError, Result};
pub use types::*;
