//! Average True Range (ATR) indicator.

use crate::error::{AppError, Result};
use crate::types::Candle;

/// ATR (Average True Range) indicator.
///
/// Measures market volatility as the plain mean of the last `period` true ranges:
/// TR = max(High-Low, |High-PrevClose|, |Low-PrevClose|)
#[derive(Debug, Clone, Copy)]
pub struct Atr {
    period: usize,
}

impl Default for Atr {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Atr {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Calculate True Range.
    pub fn true_range(current: &Candle, previous: &Candle) -> f64 {
        let hl = current.high - current.low;
        let hc = (current.high - previous.close).abs();
        let lc = (current.low - previous.close).abs();
        hl.max(hc).max(lc)
    }

    /// Minimum number of candles required for calculation.
    pub fn min_periods(&self) -> usize {
        self.period + 1
    }

    pub fn calculate(&self, candles: &[Candle]) -> Result<f64> {
        if self.period == 0 || candles.len() < self.min_periods() {
            return Err(AppError::InsufficientData {
                required: self.min_periods(),
            });
        }

        let window = &candles[candles.len() - self.min_periods()..];
        let total: f64 = window
            .windows(2)
            .map(|pair| Self::true_range(&pair[1], &pair[0]))
            .sum();

        Ok(total / self.period as f64)
    }
}
