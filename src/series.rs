//! Validated OHLCV price series and its display feeds

use crate::error::{ChartTaError, Result};
use crate::types::{Bar, HistogramPoint, IndicatorPoint};
use serde::{Deserialize, Serialize};

/// Ordered sequence of OHLCV bars with strictly ascending, unique timestamps
///
/// Constructed fresh per chart render and replaced wholesale on refresh.
/// Upstream data access guarantees the ordering; [`PriceSeries::new`] still
/// checks it and fails fast with the offending index, since silent
/// misbehavior downstream would be worse than a loud error here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Bar>", into = "Vec<Bar>")]
pub struct PriceSeries {
    bars: Vec<Bar>,
}

impl PriceSeries {
    /// Create a validated series, rejecting malformed or out-of-order bars
    pub fn new(bars: Vec<Bar>) -> Result<Self> {
        for (index, bar) in bars.iter().enumerate() {
            if let Err(reason) = bar.check() {
                return Err(ChartTaError::MalformedBar {
                    index,
                    reason: reason.to_string(),
                });
            }
            if index > 0 {
                let prev = bars[index - 1].time;
                if bar.time <= prev {
                    return Err(ChartTaError::OutOfOrder {
                        index,
                        time: bar.time,
                        prev,
                    });
                }
            }
        }
        Ok(Self { bars })
    }

    /// Create a series from bars already known to be valid and sorted
    pub fn from_sorted_unchecked(bars: Vec<Bar>) -> Self {
        Self { bars }
    }

    /// Create a series by skipping malformed or non-advancing bars
    ///
    /// Each dropped bar is logged; the survivors keep their relative order.
    pub fn from_bars_lossy(bars: Vec<Bar>) -> Self {
        let mut kept: Vec<Bar> = Vec::with_capacity(bars.len());
        for (index, bar) in bars.into_iter().enumerate() {
            if let Err(reason) = bar.check() {
                log::warn!("Invalid bar at index {} ({}), skipping", index, reason);
                continue;
            }
            if let Some(last) = kept.last() {
                if bar.time <= last.time {
                    log::warn!(
                        "Bar at index {} does not advance past {:?}, skipping",
                        index,
                        last.time
                    );
                    continue;
                }
            }
            kept.push(bar);
        }
        Self { bars: kept }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Closing prices in series order
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Feed for line/area chart modes: one `(time, close)` point per bar
    pub fn close_line(&self) -> Vec<IndicatorPoint> {
        self.bars
            .iter()
            .map(|b| IndicatorPoint::new(b.time, b.close))
            .collect()
    }

    /// Feed for the volume pane: bars colored by direction, missing volume
    /// reported as zero
    pub fn volume_histogram(&self) -> Vec<HistogramPoint> {
        self.bars.iter().map(HistogramPoint::for_bar).collect()
    }
}

impl TryFrom<Vec<Bar>> for PriceSeries {
    type Error = ChartTaError;

    fn try_from(bars: Vec<Bar>) -> Result<Self> {
        Self::new(bars)
    }
}

impl From<PriceSeries> for Vec<Bar> {
    fn from(series: PriceSeries) -> Self {
        series.bars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Trend;
    use chrono::{Duration, TimeZone, Utc};

    fn bar(day: i64, close: f64) -> Bar {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let low = close.min(100.0) - 1.0;
        let high = close.max(100.0) + 1.0;
        Bar::new(start + Duration::days(day), 100.0, high, low, close)
    }

    #[test]
    fn test_new_accepts_ordered_bars() {
        let series = PriceSeries::new(vec![bar(0, 100.0), bar(1, 101.0), bar(2, 99.0)]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.closes(), vec![100.0, 101.0, 99.0]);
    }

    #[test]
    fn test_new_rejects_out_of_order() {
        let err = PriceSeries::new(vec![bar(0, 100.0), bar(2, 101.0), bar(1, 99.0)]).unwrap_err();
        match err {
            ChartTaError::OutOfOrder { index, .. } => assert_eq!(index, 2),
            other => panic!("expected OutOfOrder, got {other}"),
        }
    }

    #[test]
    fn test_new_rejects_duplicate_timestamp() {
        let err = PriceSeries::new(vec![bar(0, 100.0), bar(0, 101.0)]).unwrap_err();
        assert!(matches!(err, ChartTaError::OutOfOrder { index: 1, .. }));
    }

    #[test]
    fn test_new_rejects_malformed_bar() {
        let mut bad = bar(1, 100.0);
        bad.low = bad.high + 1.0;
        let err = PriceSeries::new(vec![bar(0, 100.0), bad]).unwrap_err();
        match err {
            ChartTaError::MalformedBar { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("low exceeds high"));
            }
            other => panic!("expected MalformedBar, got {other}"),
        }
    }

    #[test]
    fn test_from_bars_lossy_drops_bad_bars() {
        let mut malformed = bar(1, 100.0);
        malformed.close = f64::NAN;
        let stale = bar(2, 101.0); // will be re-dated to collide with bar 0
        let mut duplicate = stale.clone();
        duplicate.time = bar(0, 100.0).time;

        let series =
            PriceSeries::from_bars_lossy(vec![bar(0, 100.0), malformed, duplicate, bar(3, 102.0)]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![100.0, 102.0]);
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let series = PriceSeries::new(vec![bar(0, 100.0), bar(1, 101.0)]).unwrap();
        let json = serde_json::to_string(&series).unwrap();
        let back: PriceSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(back, series);

        // Deserialization goes through the validating constructor
        let shuffled = serde_json::to_string(&vec![bar(1, 101.0), bar(0, 100.0)]).unwrap();
        assert!(serde_json::from_str::<PriceSeries>(&shuffled).is_err());
    }

    #[test]
    fn test_close_line_and_volume_histogram() {
        let up = bar(0, 101.0).with_volume(1000.0);
        let down = Bar::new(bar(1, 99.0).time, 100.0, 101.0, 98.0, 99.0);
        let series = PriceSeries::new(vec![up, down]).unwrap();

        let line = series.close_line();
        assert_eq!(line.len(), 2);
        assert_eq!(line[0].value, 101.0);
        assert_eq!(line[1].time, series.bars()[1].time);

        let volume = series.volume_histogram();
        assert_eq!(volume[0].trend, Trend::Up);
        assert_eq!(volume[0].value, 1000.0);
        assert_eq!(volume[1].trend, Trend::Down);
        assert_eq!(volume[1].value, 0.0);
    }
}
