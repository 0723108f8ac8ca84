pub mod binance;

pub use binance::BinanceClient;

use crate::error::Result;
use crate::types::{Candle, Timeframe};
use async_trait::async_trait;

/// Market-data provider returning historical candles.
#[async_trait]
pub trait CandleSource: Send + Sync {
    /// Fetch up to `limit` most recent candles for `symbol`, oldest first.
    async fn fetch_candles(&self, symbol: &str, timeframe: Timeframe, limit: u32) -> Result<Vec<Candle>>;
}
