use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One OHLCV period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Period open time, milliseconds since epoch.
    pub open_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Build a candle from a positional provider record:
    /// `[open_time, open, high, low, close, volume, ...]`.
    ///
    /// Prices may arrive as JSON numbers or numeric strings. Trailing
    /// positions beyond the volume are ignored.
    pub fn from_record(record: &Value) -> Result<Self> {
        let fields = record
            .as_array()
            .ok_or_else(|| AppError::MalformedData(format!("expected array record, got {}", record)))?;

        if fields.len() < 6 {
            return Err(AppError::MalformedData(format!(
                "record has {} fields, expected at least 6",
                fields.len()
            )));
        }

        Ok(Self {
            open_time: coerce_i64(&fields[0], "open_time")?,
            open: coerce_f64(&fields[1], "open")?,
            high: coerce_f64(&fields[2], "high")?,
            low: coerce_f64(&fields[3], "low")?,
            close: coerce_f64(&fields[4], "close")?,
            volume: coerce_f64(&fields[5], "volume")?,
        })
    }

    /// Convert a whole provider response, preserving order.
    pub fn from_records(records: &[Value]) -> Result<Vec<Self>> {
        records.iter().map(Self::from_record).collect()
    }
}

/// Extract the close prices of a series, in order.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

fn coerce_f64(value: &Value, field: &str) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::MalformedData(format!("{} is not a finite number: {}", field, value)))
}

fn coerce_i64(value: &Value, field: &str) -> Result<i64> {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|v| v.is_finite()).map(|v| v.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| AppError::MalformedData(format!("{} is not an integer: {}", field, value)))
}
