//! Technical indicator implementations.
//!
//! Every indicator recomputes from the trailing window of its input on each
//! call. Nothing is carried between calls.

pub mod atr;
pub mod rsi;
pub mod sma;

pub use atr::Atr;
pub use rsi::Rsi;
pub use sma::Sma;
