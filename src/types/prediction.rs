use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Candle interval accepted by the predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[default]
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    OneDay,
}

impl Timeframe {
    /// All supported timeframes.
    pub const ALL: [Timeframe; 6] = [
        Timeframe::OneMinute,
        Timeframe::FiveMinutes,
        Timeframe::FifteenMinutes,
        Timeframe::OneHour,
        Timeframe::FourHours,
        Timeframe::OneDay,
    ];

    /// Get the timeframe from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "1m" => Some(Timeframe::OneMinute),
            "5m" => Some(Timeframe::FiveMinutes),
            "15m" => Some(Timeframe::FifteenMinutes),
            "1h" => Some(Timeframe::OneHour),
            "4h" => Some(Timeframe::FourHours),
            "1d" => Some(Timeframe::OneDay),
            _ => None,
        }
    }

    /// Kline interval string, identical to the Binance interval name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::OneMinute => "1m",
            Timeframe::FiveMinutes => "5m",
            Timeframe::FifteenMinutes => "15m",
            Timeframe::OneHour => "1h",
            Timeframe::FourHours => "4h",
            Timeframe::OneDay => "1d",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trade direction. There is deliberately no neutral state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Buy => write!(f, "BUY"),
            Signal::Sell => write!(f, "SELL"),
        }
    }
}

/// Indicator snapshot taken from the tail of a candle series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValues {
    pub short_sma: f64,
    pub long_sma: f64,
    pub rsi: f64,
    pub atr: f64,
}

/// Full-precision output of the signal engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalAnalysis {
    pub signal: Signal,
    pub entry: f64,
    pub take_profit: f64,
    pub stop_loss: f64,
    pub confidence: f64,
    pub indicators: IndicatorValues,
}

/// Prediction returned to clients. Prices are rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub symbol: String,
    pub timeframe: Timeframe,
    /// Capture time of the prediction, not of the last candle.
    pub timestamp: DateTime<Utc>,
    pub signal: Signal,
    pub entry: f64,
    pub take_profit: f64,
    pub stop_loss: f64,
    pub confidence: f64,
    pub short_sma: f64,
    pub long_sma: f64,
    pub rsi: f64,
    pub atr: f64,
}

impl Prediction {
    /// Build the rounded output record from a full-precision analysis.
    pub fn new(
        symbol: impl Into<String>,
        timeframe: Timeframe,
        timestamp: DateTime<Utc>,
        analysis: &SignalAnalysis,
    ) -> Self {
        let indicators = &analysis.indicators;
        Self {
            symbol: symbol.into(),
            timeframe,
            timestamp,
            signal: analysis.signal,
            entry: round2(analysis.entry),
            take_profit: round2(analysis.take_profit),
            stop_loss: round2(analysis.stop_loss),
            confidence: round2(analysis.confidence),
            short_sma: round2(indicators.short_sma),
            long_sma: round2(indicators.long_sma),
            rsi: round2(indicators.rsi),
            atr: round2(indicators.atr),
        }
    }
}

/// Round to two decimal places.
///
/// Goes through the exact decimal expansion of `value`, so ties are decided
/// on the stored binary value (2.675 is really 2.67499..) and exact ties
/// round half to even.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
