//! Crosshair/cursor OHLCV readout

use crate::series::PriceSeries;
use crate::types::{Price, Quantity};
use serde::Serialize;

/// The values shown in the chart header for a hovered bar
///
/// `change` and `change_percent` compare against the previous bar's close;
/// both are absent for the first bar. A zero prior close leaves `change`
/// intact but reports `change_percent` as absent rather than dividing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CursorReadout {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<f64>,
}

impl CursorReadout {
    /// Readout for the bar at `index`, or `None` when out of range
    pub fn at(series: &PriceSeries, index: usize) -> Option<Self> {
        let bar = series.get(index)?;
        let mut readout = Self {
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            change: None,
            change_percent: None,
        };

        if index > 0 {
            let prev_close = series.bars()[index - 1].close;
            let change = bar.close - prev_close;
            readout.change = Some(change);
            if prev_close != 0.0 {
                readout.change_percent = Some(change / prev_close * 100.0);
            }
        }

        Some(readout)
    }

    /// Fallback when no bar is hovered: the latest bar vs. its predecessor
    pub fn latest(series: &PriceSeries) -> Option<Self> {
        if series.is_empty() {
            return None;
        }
        Self::at(series, series.len() - 1)
    }
}
