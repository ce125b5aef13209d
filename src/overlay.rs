//! Overlay configuration and the recompute-everything entry point
//!
//! The dashboard's indicator menu ships configs as JSON; this module owns the
//! typed form and the fan-out that recomputes every requested overlay from
//! scratch whenever the series or a parameter changes.

use crate::error::Result;
use crate::indicators::{Bollinger, BollingerBands, Ema, Macd, MacdSeries, Rsi};
use crate::series::PriceSeries;
use crate::types::IndicatorPoint;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One requested overlay with its parameters
///
/// JSON form is tagged by `kind`, e.g. `{"kind": "ema", "period": 21}` or
/// `{"kind": "macd"}` with the standard periods filled in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OverlaySpec {
    Ema {
        period: usize,
    },
    Bollinger {
        #[serde(default = "default_bollinger_period")]
        period: usize,
        #[serde(default = "default_bollinger_std_dev")]
        std_dev: f64,
    },
    Macd {
        #[serde(default = "default_macd_fast")]
        fast: usize,
        #[serde(default = "default_macd_slow")]
        slow: usize,
        #[serde(default = "default_macd_signal")]
        signal: usize,
    },
    Rsi {
        #[serde(default = "default_rsi_period")]
        period: usize,
    },
}

fn default_bollinger_period() -> usize {
    20
}

fn default_bollinger_std_dev() -> f64 {
    2.0
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

fn default_macd_signal() -> usize {
    9
}

fn default_rsi_period() -> usize {
    14
}

impl OverlaySpec {
    /// Parse a single overlay config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Menu label for the overlay, e.g. "EMA (21)" or "MACD (12, 26, 9)"
    pub fn label(&self) -> String {
        match self {
            Self::Ema { period } => format!("EMA ({period})"),
            Self::Bollinger { period, std_dev } => {
                format!("Bollinger Bands ({period}, {std_dev})")
            }
            Self::Macd { fast, slow, signal } => format!("MACD ({fast}, {slow}, {signal})"),
            Self::Rsi { period } => format!("RSI ({period})"),
        }
    }
}

/// Computed overlay series, shaped for a display surface
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OverlayOutput {
    Line { points: Vec<IndicatorPoint> },
    Bands(BollingerBands),
    Macd(MacdSeries),
}

/// Compute one overlay
pub fn compute_overlay(series: &PriceSeries, spec: &OverlaySpec) -> OverlayOutput {
    match *spec {
        OverlaySpec::Ema { period } => OverlayOutput::Line {
            points: Ema::new(period).compute(series),
        },
        OverlaySpec::Bollinger { period, std_dev } => {
            OverlayOutput::Bands(Bollinger::new(period, std_dev).compute(series))
        }
        OverlaySpec::Macd { fast, slow, signal } => {
            OverlayOutput::Macd(Macd::with_periods(fast, slow, signal).compute(series))
        }
        OverlaySpec::Rsi { period } => OverlayOutput::Line {
            points: Rsi::new(period).compute(series),
        },
    }
}

/// Compute all requested overlays, in request order
///
/// The transforms only read the series, so they run in parallel; the indexed
/// collect keeps the output order stable regardless of scheduling.
pub fn compute_overlays(series: &PriceSeries, specs: &[OverlaySpec]) -> Vec<OverlayOutput> {
    log::debug!(
        "Computing {} overlays over {} bars",
        specs.len(),
        series.len()
    );
    specs
        .par_iter()
        .map(|spec| compute_overlay(series, spec))
        .collect()
}
