//! Error types for chart-ta

use crate::types::Timestamp;
use thiserror::Error;

/// Main error type for chart-ta
///
/// Insufficient data is not an error anywhere in this crate: a series
/// shorter than an indicator's lookback produces an empty output sequence.
/// Errors are reserved for caller misuse (malformed input, bad config).
#[derive(Error, Debug)]
pub enum ChartTaError {
    #[error("Malformed bar at index {index}: {reason}")]
    MalformedBar { index: usize, reason: String },

    #[error("Bar at index {index} out of order: {time} does not advance past {prev}")]
    OutOfOrder {
        index: usize,
        time: Timestamp,
        prev: Timestamp,
    },

    #[error("Overlay config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for chart-ta operations
pub type Result<T> = std::result::Result<T, ChartTaError>;
