//! # chart-ta
//!
//! Technical-indicator overlay computation for OHLCV charting surfaces.
//!
//! The crate turns a validated price series into the overlay series a chart
//! renders: EMA lines, Bollinger Bands, MACD with signal line and histogram,
//! RSI, plus the crosshair OHLCV readout. Every transform is a pure function
//! of the series and its parameters; short series yield empty output rather
//! than errors, so callers can recompute freely on every data change.
//!
//! ## Example
//!
//! ```rust
//! use chart_ta::prelude::*;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let bars: Vec<Bar> = (0..30i64)
//!     .map(|i| {
//!         let close = 100.0 + i as f64;
//!         Bar::new(start + Duration::days(i), close, close + 1.0, close - 1.0, close)
//!     })
//!     .collect();
//! let series = PriceSeries::new(bars).unwrap();
//!
//! let ema = Ema::new(9).compute(&series);
//! assert_eq!(ema.len(), series.len() - 9 + 1);
//!
//! let overlays = compute_overlays(
//!     &series,
//!     &[OverlaySpec::Ema { period: 9 }, OverlaySpec::Bollinger { period: 20, std_dev: 2.0 }],
//! );
//! assert_eq!(overlays.len(), 2);
//! ```

pub mod error;
pub mod indicators;
pub mod overlay;
pub mod readout;
pub mod series;
pub mod types;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::error::{ChartTaError, Result};
    pub use crate::indicators::{Bollinger, BollingerBands, Ema, Macd, MacdSeries, Rsi};
    pub use crate::overlay::{compute_overlay, compute_overlays, OverlayOutput, OverlaySpec};
    pub use crate::readout::CursorReadout;
    pub use crate::series::PriceSeries;
    pub use crate::types::*;
}
