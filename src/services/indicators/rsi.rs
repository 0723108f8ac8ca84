//! Relative Strength Index (RSI) indicator.

use crate::error::{AppError, Result};

/// RSI (Relative Strength Index) indicator.
///
/// Compares the magnitude of recent gains to recent losses over the last
/// `period` close-to-close changes. Values range from 0-100.
///
/// Gains and losses are plain averages over the window (cold start), not
/// Wilder-smoothed running averages, so the value depends only on the last
/// `period + 1` closes.
#[derive(Debug, Clone, Copy)]
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Minimum number of closes required for calculation.
    pub fn min_periods(&self) -> usize {
        self.period + 1
    }

    /// Calculate RSI from close prices.
    pub fn calculate(&self, closes: &[f64]) -> Result<f64> {
        if self.period == 0 || closes.len() < self.min_periods() {
            return Err(AppError::InsufficientData {
                required: self.min_periods(),
            });
        }

        let window = &closes[closes.len() - self.min_periods()..];
        let (gains, losses) = window
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .fold((0.0, 0.0), |(gains, losses), change| {
                if change >= 0.0 {
                    (gains + change, losses)
                } else {
                    (gains, losses - change)
                }
            });

        let avg_gain = gains / self.period as f64;
        let avg_loss = losses / self.period as f64;

        if avg_loss == 0.0 {
            return Ok(100.0);
        }

        let rs = avg_gain / avg_loss;
        Ok(100.0 - (100.0 / (1.0 + rs)))
    }
}
