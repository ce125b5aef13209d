//! Exponential Moving Average (EMA)

use crate::series::PriceSeries;
use crate::types::IndicatorPoint;

/// Exponential Moving Average over closing prices
///
/// The first emitted value is the arithmetic mean of the first `period`
/// closes, placed at the `period`-th bar; each later bar applies
/// `ema = (close - prev) * k + prev` with `k = 2 / (period + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Compute the EMA line for a price series
    ///
    /// Emits `len - period + 1` points aligned to bars `period-1..`; empty
    /// when the series is shorter than the period or the period is zero.
    pub fn compute(&self, series: &PriceSeries) -> Vec<IndicatorPoint> {
        let closes: Vec<IndicatorPoint> = series
            .bars()
            .iter()
            .map(|b| IndicatorPoint::new(b.time, b.close))
            .collect();
        ema_points(&closes, self.period)
    }
}

/// EMA core over arbitrary `(time, value)` points
///
/// The MACD signal line reuses this with the MACD line as its input.
pub(crate) fn ema_points(points: &[IndicatorPoint], period: usize) -> Vec<IndicatorPoint> {
    if period == 0 || points.len() < period {
        return Vec::new();
    }

    let k = 2.0 / (period as f64 + 1.0);
    let seed = points[..period].iter().map(|p| p.value).sum::<f64>() / period as f64;

    let mut result = Vec::with_capacity(points.len() - period + 1);
    result.push(IndicatorPoint::new(points[period - 1].time, seed));

    let mut ema = seed;
    for point in &points[period..] {
        ema = (point.value - ema) * k + ema;
        result.push(IndicatorPoint::new(point.time, ema));
    }

    result
}
