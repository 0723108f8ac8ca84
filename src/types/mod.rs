pub mod candle;
pub mod prediction;

pub use candle::*;
pub use prediction::*;
