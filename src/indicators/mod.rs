//! Indicator transforms: pure functions from a price series to overlay series
//!
//! Every transform follows the same policy: a series shorter than the
//! lookback (or a zero period) yields an empty output, never an error. Output
//! points are always aligned to input timestamps.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;

pub use bollinger::{Bollinger, BollingerBands};
pub use ema::Ema;
pub use macd::{Macd, MacdSeries};
pub use rsi::Rsi;
