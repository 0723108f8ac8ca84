//! Indicator computation, signal decision and request orchestration.

pub mod indicators;
pub mod predictor;
pub mod signal_engine;

pub use predictor::Predictor;
pub use signal_engine::analyze;
