use crate::error::{AppError, Result};
use crate::services::signal_engine;
use crate::sources::CandleSource;
use crate::types::{Prediction, Timeframe};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Fetches candles for a request and runs them through the signal engine.
#[derive(Clone)]
pub struct Predictor {
    source: Arc<dyn CandleSource>,
    candle_limit: u32,
    fetch_timeout: Duration,
}

impl Predictor {
    pub fn new(source: Arc<dyn CandleSource>, candle_limit: u32, fetch_timeout: Duration) -> Self {
        Self {
            source,
            candle_limit,
            fetch_timeout,
        }
    }

    /// Produce a prediction for `symbol` on `timeframe`.
    ///
    /// The symbol is upper-cased before use. A failed or timed-out fetch
    /// aborts the request before any indicator is computed.
    pub async fn predict(&self, symbol: &str, timeframe: Timeframe) -> Result<Prediction> {
        let symbol = normalize_symbol(symbol)?;

        let fetch = self
            .source
            .fetch_candles(&symbol, timeframe, self.candle_limit);
        let candles = match tokio::time::timeout(self.fetch_timeout, fetch).await {
            Ok(result) => result?,
            Err(_) => {
                warn!("Candle fetch for {} timed out after {:?}", symbol, self.fetch_timeout);
                return Err(AppError::DataSource {
                    status: None,
                    message: format!("request timed out after {:?}", self.fetch_timeout),
                });
            }
        };

        let analysis = signal_engine::analyze(&candles)?;
        let prediction = Prediction::new(symbol, timeframe, Utc::now(), &analysis);

        info!(
            "{} {} -> {} @ {} (confidence {})",
            prediction.symbol, timeframe, prediction.signal, prediction.entry, prediction.confidence
        );

        Ok(prediction)
    }
}

/// Trim and upper-case a user supplied symbol.
pub fn normalize_symbol(symbol: &str) -> Result<String> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(AppError::InvalidParameter("symbol must not be empty".to_string()));
    }
    Ok(symbol.to_uppercase())
}
