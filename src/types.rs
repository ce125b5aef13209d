//! Core types shared by the indicator transforms

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp type used throughout the library
pub type Timestamp = DateTime<Utc>;

/// Price type (using f64 for precision)
pub type Price = f64;

/// Quantity/volume type
pub type Quantity = f64;

/// OHLCV bar data
///
/// Immutable once produced; transforms only ever read bars. Volume is
/// optional because some upstream feeds omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub time: Timestamp,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<Quantity>,
}

impl Bar {
    /// Create a new bar without volume
    pub fn new(time: Timestamp, open: Price, high: Price, low: Price, close: Price) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    /// Attach a volume to the bar
    pub fn with_volume(mut self, volume: Quantity) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Check bar validity: finite prices, `low <= open,close <= high`,
    /// volume (when present) finite and non-negative.
    ///
    /// Returns the first violated constraint as a static description.
    pub fn check(&self) -> Result<(), &'static str> {
        let prices = [self.open, self.high, self.low, self.close];
        if prices.iter().any(|p| !p.is_finite()) {
            return Err("non-finite price field");
        }
        if self.low > self.high {
            return Err("low exceeds high");
        }
        if self.open < self.low || self.open > self.high {
            return Err("open outside [low, high]");
        }
        if self.close < self.low || self.close > self.high {
            return Err("close outside [low, high]");
        }
        if let Some(v) = self.volume {
            if !v.is_finite() || v < 0.0 {
                return Err("volume negative or non-finite");
            }
        }
        Ok(())
    }

    /// Check if bar closed at or above its open (the "up" color class)
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// One output point of a line-style indicator
///
/// `time` is always one of the input series' timestamps; transforms never
/// invent timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub time: Timestamp,
    pub value: f64,
}

impl IndicatorPoint {
    pub fn new(time: Timestamp, value: f64) -> Self {
        Self { time, value }
    }
}

/// Color class for histogram-style output points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// One output point of a histogram-style indicator
///
/// The trend is derived at construction, never stored independently of the
/// value or bar it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramPoint {
    pub time: Timestamp,
    pub value: f64,
    pub trend: Trend,
}

impl HistogramPoint {
    /// Build a point whose trend follows the sign of `value` (`>= 0` is up)
    pub fn signed(time: Timestamp, value: f64) -> Self {
        let trend = if value >= 0.0 { Trend::Up } else { Trend::Down };
        Self { time, value, trend }
    }

    /// Build a volume point for a bar, colored by bar direction
    ///
    /// Missing volume is reported as `0.0` rather than dropping the bar.
    pub fn for_bar(bar: &Bar) -> Self {
        let trend = if bar.is_up() { Trend::Up } else { Trend::Down };
        Self {
            time: bar.time,
            value: bar.volume.unwrap_or(0.0),
            trend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_bar_check() {
        let good = Bar::new(Utc::now(), 100.0, 105.0, 99.0, 103.0).with_volume(1000.0);
        assert!(good.check().is_ok());
        assert!(good.is_up());

        let inverted = Bar::new(Utc::now(), 100.0, 99.0, 105.0, 103.0);
        assert_eq!(inverted.check(), Err("low exceeds high"));

        let stray_close = Bar::new(Utc::now(), 100.0, 105.0, 99.0, 110.0);
        assert_eq!(stray_close.check(), Err("close outside [low, high]"));

        let nan_open = Bar::new(Utc::now(), f64::NAN, 105.0, 99.0, 103.0);
        assert_eq!(nan_open.check(), Err("non-finite price field"));

        let bad_volume = Bar::new(Utc::now(), 100.0, 105.0, 99.0, 103.0).with_volume(-1.0);
        assert_eq!(bad_volume.check(), Err("volume negative or non-finite"));
    }

    #[test]
    fn test_histogram_point_sign() {
        let now = Utc::now();
        assert_eq!(HistogramPoint::signed(now, 1.5).trend, Trend::Up);
        assert_eq!(HistogramPoint::signed(now, 0.0).trend, Trend::Up);
        assert_eq!(HistogramPoint::signed(now, -0.1).trend, Trend::Down);
    }

    #[test]
    fn test_histogram_point_for_bar() {
        // Doji (close == open) colors up, missing volume reads as zero
        let doji = Bar::new(Utc::now(), 100.0, 101.0, 99.0, 100.0);
        let point = HistogramPoint::for_bar(&doji);
        assert_eq!(point.trend, Trend::Up);
        assert_eq!(point.value, 0.0);

        let down = Bar::new(Utc::now(), 100.0, 101.0, 98.0, 99.0).with_volume(500.0);
        let point = HistogramPoint::for_bar(&down);
        assert_eq!(point.trend, Trend::Down);
        assert_eq!(point.value, 500.0);
    }

    #[test]
    fn test_trend_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Trend::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::to_string(&Trend::Down).unwrap(), "\"down\"");
    }
}
