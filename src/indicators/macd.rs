//! Moving Average Convergence Divergence (MACD)

use crate::indicators::ema::{ema_points, Ema};
use crate::series::PriceSeries;
use crate::types::{HistogramPoint, IndicatorPoint};
use serde::Serialize;

/// The MACD output: line, signal line, and signed histogram
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MacdSeries {
    pub macd_line: Vec<IndicatorPoint>,
    pub signal_line: Vec<IndicatorPoint>,
    pub histogram: Vec<HistogramPoint>,
}

/// MACD: difference of a fast and slow EMA, with an EMA signal line over
/// that difference
///
/// The fast and slow EMA sequences are paired by array position, truncated
/// to the shorter. Each EMA starts at its own period's bar, so the pairing
/// offsets the slow values by `slow - fast` bars relative to the timestamps
/// carried on the line (which come from the fast EMA). Chart parity with
/// this layout is pinned by tests; re-keying by timestamp would be a visible
/// behavior change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal: usize,
}

impl Macd {
    /// Create MACD with standard parameters (12, 26, 9)
    pub fn new() -> Self {
        Self::with_periods(12, 26, 9)
    }

    /// Create MACD with custom periods
    pub fn with_periods(fast: usize, slow: usize, signal: usize) -> Self {
        Self { fast, slow, signal }
    }

    pub fn periods(&self) -> (usize, usize, usize) {
        (self.fast, self.slow, self.signal)
    }

    /// Compute the MACD series for a price series
    ///
    /// Degenerate periods or insufficient data cascade to empty sequences.
    pub fn compute(&self, series: &PriceSeries) -> MacdSeries {
        let fast_ema = Ema::new(self.fast).compute(series);
        let slow_ema = Ema::new(self.slow).compute(series);

        let macd_line: Vec<IndicatorPoint> = fast_ema
            .iter()
            .zip(&slow_ema)
            .map(|(f, s)| IndicatorPoint::new(f.time, f.value - s.value))
            .collect();

        // The signal line treats each macd point's value as a close
        let signal_line = ema_points(&macd_line, self.signal);

        let histogram: Vec<HistogramPoint> = macd_line
            .iter()
            .zip(&signal_line)
            .map(|(m, s)| HistogramPoint::signed(m.time, m.value - s.value))
            .collect();

        MacdSeries {
            macd_line,
            signal_line,
            histogram,
        }
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}
