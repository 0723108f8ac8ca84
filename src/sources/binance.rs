use crate::error::{AppError, Result};
use crate::sources::CandleSource;
use crate::types::{Candle, Timeframe};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Maximum number of upstream body characters carried into an error.
const MAX_ERROR_BODY: usize = 200;

/// Binance public klines client.
#[derive(Clone)]
pub struct BinanceClient {
    client: Client,
    base_url: String,
}

impl BinanceClient {
    /// Create a new Binance client.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent("CryptoPredictor/1.0")
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn klines_url(&self) -> String {
        format!("{}/api/v3/klines", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CandleSource for BinanceClient {
    async fn fetch_candles(&self, symbol: &str, timeframe: Timeframe, limit: u32) -> Result<Vec<Candle>> {
        let url = self.klines_url();
        debug!("Fetching {} {} klines for {}", limit, timeframe, symbol);

        let limit = limit.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", timeframe.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let message: String = text.chars().take(MAX_ERROR_BODY).collect();
            warn!("Binance API returned {}: {}", status, message);
            return Err(AppError::DataSource {
                status: Some(status.as_u16()),
                message,
            });
        }

        let records: Vec<Value> = response
            .json()
            .await
            .map_err(|e| AppError::MalformedData(format!("klines body is not a JSON array: {}", e)))?;

        let candles = Candle::from_records(&records)?;
        debug!("Binance returned {} candles for {}", candles.len(), symbol);
        Ok(candles)
    }
}
