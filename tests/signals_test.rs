//! Indicator and signal-engine properties over synthetic series.

use crypto_predictor::services::indicators::{Atr, Rsi, Sma};
use crypto_predictor::services::signal_engine::{
    self, analyze, CONFIDENCE_CEILING, CONFIDENCE_FLOOR, MIN_CANDLES,
};
use crypto_predictor::{closes, AppError, Candle, Prediction, Signal, Timeframe};

fn candle(i: usize, close: f64, spread: f64) -> Candle {
    Candle {
        open_time: i as i64 * 60_000,
        open: close,
        high: close + spread,
        low: close - spread,
        close,
        volume: 100.0,
    }
}

/// Deterministic zig-zag series with drift, for range checks.
fn wave(count: usize, drift: f64) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 1000.0 + drift * i as f64 + ((i * 37) % 17) as f64 - 8.0;
            candle(i, close, 2.0 + (i % 5) as f64)
        })
        .collect()
}

#[test]
fn test_sma_ignores_values_before_window() {
    let base: Vec<f64> = (0..40).map(|i| i as f64 * 0.5).collect();
    let mut altered = base.clone();
    for v in altered.iter_mut().take(20) {
        *v = -9999.0;
    }

    let sma = Sma::new(20);
    assert_eq!(sma.calculate(&base).unwrap(), sma.calculate(&altered).unwrap());
}

#[test]
fn test_boundaries() {
    let series = wave(15, 1.0);
    let values = closes(&series);

    assert!(Rsi::default().calculate(&values).is_ok());
    assert!(Atr::default().calculate(&series).is_ok());
    assert!(matches!(
        Rsi::default().calculate(&values[1..]),
        Err(AppError::InsufficientData { required: 15 })
    ));
    assert!(matches!(
        Atr::default().calculate(&series[1..]),
        Err(AppError::InsufficientData { required: 15 })
    ));

    assert!(Sma::new(15).calculate(&values).is_ok());
    assert!(matches!(
        Sma::new(16).calculate(&values),
        Err(AppError::InsufficientData { required: 16 })
    ));
}

#[test]
fn test_rsi_and_atr_ranges() {
    for drift in [-3.0, -0.5, 0.0, 0.5, 3.0] {
        let series = wave(80, drift);
        let rsi = Rsi::default().calculate(&closes(&series)).unwrap();
        let atr = Atr::default().calculate(&series).unwrap();
        assert!((0.0..=100.0).contains(&rsi), "rsi {} out of range", rsi);
        assert!(atr >= 0.0);
    }
}

#[test]
fn test_confidence_always_bounded() {
    for (short, long, price) in [
        (100.0, 100.0, 100.0),
        (1.0, 1_000_000.0, 0.01),
        (105.0, 100.0, 100.0),
        (0.0, 0.0, 1e-9),
    ] {
        let c = signal_engine::confidence(short, long, price);
        assert!((CONFIDENCE_FLOOR..=CONFIDENCE_CEILING).contains(&c));
    }
}

#[test]
fn test_targets_bracket_entry() {
    for drift in [-4.0, 4.0] {
        let analysis = analyze(&wave(120, drift)).unwrap();
        assert!(analysis.indicators.atr > 0.0);
        match analysis.signal {
            Signal::Buy => {
                assert!(analysis.take_profit > analysis.entry);
                assert!(analysis.entry > analysis.stop_loss);
            }
            Signal::Sell => {
                assert!(analysis.stop_loss > analysis.entry);
                assert!(analysis.entry > analysis.take_profit);
            }
        }
    }
}

#[test]
fn test_downtrend_is_sell() {
    let series: Vec<Candle> = (0..60).map(|i| candle(i, 500.0 - i as f64, 1.0)).collect();
    let analysis = analyze(&series).unwrap();
    assert_eq!(analysis.signal, Signal::Sell);
    assert_eq!(analysis.indicators.rsi, 0.0);
    assert!(analysis.stop_loss > analysis.entry);
}

#[test]
fn test_ascending_is_buy() {
    let series: Vec<Candle> = (0..60).map(|i| candle(i, 100.0 + i as f64, 0.5)).collect();
    let analysis = analyze(&series).unwrap();
    assert!(analysis.indicators.short_sma > analysis.indicators.long_sma);
    assert_eq!(analysis.indicators.rsi, 100.0);
    assert_eq!(analysis.signal, Signal::Buy);
    assert!(analysis.take_profit > analysis.entry);
    assert!(analysis.stop_loss < analysis.entry);
}

#[test]
fn test_uptrend_with_weak_momentum_is_sell() {
    // Short SMA above long SMA, but the last 14 changes lose more than they gain.
    let mut closes: Vec<f64> = (0..45).map(|i| 100.0 + i as f64 * 2.0).collect();
    let top = *closes.last().unwrap();
    closes.extend((1..=15).map(|i| top - i as f64));
    let series: Vec<Candle> = closes.iter().enumerate().map(|(i, &c)| candle(i, c, 1.0)).collect();

    let analysis = analyze(&series).unwrap();
    assert!(analysis.indicators.short_sma > analysis.indicators.long_sma);
    assert!(analysis.indicators.rsi < 50.0);
    assert_eq!(analysis.signal, Signal::Sell);
}

#[test]
fn test_min_candles_boundary() {
    assert!(analyze(&wave(MIN_CANDLES, 1.0)).is_ok());
    assert!(matches!(
        analyze(&wave(MIN_CANDLES - 1, 1.0)),
        Err(AppError::InsufficientData { required: 50 })
    ));
}

#[test]
fn test_analysis_is_deterministic() {
    let series = wave(200, 0.7);
    assert_eq!(analyze(&series).unwrap(), analyze(&series).unwrap());
}

#[test]
fn test_prediction_round_trip() {
    let analysis = analyze(&wave(200, 1.3)).unwrap();
    let prediction = Prediction::new("BTCUSDT", Timeframe::FifteenMinutes, chrono::Utc::now(), &analysis);

    let json = serde_json::to_string(&prediction).unwrap();
    let parsed: Prediction = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, prediction);

    let rebuilt = Prediction::new(
        parsed.symbol.clone(),
        parsed.timeframe,
        parsed.timestamp,
        &crypto_predictor::SignalAnalysis {
            signal: parsed.signal,
            entry: parsed.entry,
            take_profit: parsed.take_profit,
            stop_loss: parsed.stop_loss,
            confidence: parsed.confidence,
            indicators: crypto_predictor::IndicatorValues {
                short_sma: parsed.short_sma,
                long_sma: parsed.long_sma,
                rsi: parsed.rsi,
                atr: parsed.atr,
            },
        },
    );
    assert_eq!(rebuilt, prediction);
}

#[test]
fn test_prediction_rounds_half_cent_tie_to_even() {
    let series: Vec<Candle> = (0..50).map(|i| candle(i, 100.125, 0.0)).collect();
    let analysis = analyze(&series).unwrap();
    let prediction = Prediction::new("BTCUSDT", Timeframe::OneHour, chrono::Utc::now(), &analysis);

    assert_eq!(prediction.entry, 100.12);
    assert_eq!(prediction.take_profit, 100.12);
    assert_eq!(prediction.stop_loss, 100.12);
    assert_eq!(prediction.short_sma, 100.12);
    assert_eq!(prediction.long_sma, 100.12);
}
