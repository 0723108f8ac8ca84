//! Trend/momentum signal engine.
//!
//! Combines a short/long SMA crossover with an RSI midline check into a
//! binary BUY/SELL decision, then places ATR-scaled price targets around
//! the latest close.

use crate::error::{AppError, Result};
use crate::services::indicators::{Atr, Rsi, Sma};
use crate::types::{closes, Candle, IndicatorValues, Signal, SignalAnalysis};
use tracing::debug;

pub const SHORT_SMA_PERIOD: usize = 20;
pub const LONG_SMA_PERIOD: usize = 50;
pub const RSI_PERIOD: usize = 14;
pub const ATR_PERIOD: usize = 14;

/// RSI must be strictly above this for a BUY.
pub const RSI_MIDLINE: f64 = 50.0;
/// Take-profit distance in ATRs. Stop-loss distance is always one ATR.
pub const ATR_MULTIPLIER: f64 = 1.8;
pub const CONFIDENCE_FLOOR: f64 = 0.1;
pub const CONFIDENCE_CEILING: f64 = 0.9;

/// Fewest candles for which `analyze` can succeed.
pub const MIN_CANDLES: usize = LONG_SMA_PERIOD;

/// Compute indicators over `candles` and derive the signal and targets.
///
/// Indicators are evaluated in order (short SMA, long SMA, RSI, ATR) and the
/// first failure is returned as-is.
pub fn analyze(candles: &[Candle]) -> Result<SignalAnalysis> {
    let closes = closes(candles);

    let short_sma = Sma::new(SHORT_SMA_PERIOD).calculate(&closes)?;
    let long_sma = Sma::new(LONG_SMA_PERIOD).calculate(&closes)?;
    let rsi = Rsi::new(RSI_PERIOD).calculate(&closes)?;
    let atr = Atr::new(ATR_PERIOD).calculate(candles)?;

    let price = *closes.last().ok_or(AppError::InsufficientData {
        required: MIN_CANDLES,
    })?;

    let signal = decide(short_sma, long_sma, rsi);
    let (take_profit, stop_loss) = targets(signal, price, atr);
    let confidence = confidence(short_sma, long_sma, price);

    debug!(
        "signal={} price={} short_sma={:.4} long_sma={:.4} rsi={:.2} atr={:.4}",
        signal, price, short_sma, long_sma, rsi, atr
    );

    Ok(SignalAnalysis {
        signal,
        entry: price,
        take_profit,
        stop_loss,
        confidence,
        indicators: IndicatorValues {
            short_sma,
            long_sma,
            rsi,
            atr,
        },
    })
}

/// BUY only when the short SMA is strictly above the long SMA and RSI is
/// strictly above the midline. Ties fall to SELL.
pub fn decide(short_sma: f64, long_sma: f64, rsi: f64) -> Signal {
    if short_sma > long_sma && rsi > RSI_MIDLINE {
        Signal::Buy
    } else {
        Signal::Sell
    }
}

/// Returns `(take_profit, stop_loss)` for an entry at `price`.
pub fn targets(signal: Signal, price: f64, atr: f64) -> (f64, f64) {
    match signal {
        Signal::Buy => (price + ATR_MULTIPLIER * atr, price - atr),
        Signal::Sell => (price - ATR_MULTIPLIER * atr, price + atr),
    }
}

/// SMA divergence relative to price, clamped to the confidence bounds.
pub fn confidence(short_sma: f64, long_sma: f64, price: f64) -> f64 {
    let raw = (short_sma - long_sma).abs() / price;
    // NaN (zero price with equal SMAs) falls back to the floor.
    if raw.is_nan() {
        return CONFIDENCE_FLOOR;
    }
    raw.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}
