//! Simple Moving Average (SMA) indicator.

use crate::error::{AppError, Result};

/// SMA (Simple Moving Average) indicator.
///
/// Unweighted mean of the last `period` values.
#[derive(Debug, Clone, Copy)]
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Minimum number of values required for calculation.
    pub fn min_periods(&self) -> usize {
        self.period
    }

    /// Mean of the trailing `period` values. Earlier values are ignored.
    pub fn calculate(&self, values: &[f64]) -> Result<f64> {
        if self.period == 0 || values.len() < self.min_periods() {
            return Err(AppError::InsufficientData {
                required: self.min_periods(),
            });
        }

        let window = &values[values.len() - self.period..];
        Ok(window.iter().sum::<f64>() / self.period as f64)
    }
}
