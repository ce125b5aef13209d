//! Relative Strength Index (RSI), Wilder's smoothing

use crate::series::PriceSeries;
use crate::types::IndicatorPoint;

/// RSI over closing prices
///
/// Seeds average gain/loss with the simple mean of the first `period`
/// deltas, then applies Wilder's smoothing
/// `avg = (avg * (period - 1) + x) / period`. The lookback is `period`
/// deltas, so the first point lands on bar `period`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Compute the RSI line for a price series
    ///
    /// Emits `len - period` points; empty when the series has fewer than
    /// `period + 1` bars or the period is zero. Values are in `[0, 100]`:
    /// no down moves pins 100, no up moves pins 0, a flat window reads 50.
    pub fn compute(&self, series: &PriceSeries) -> Vec<IndicatorPoint> {
        let bars = series.bars();
        if self.period == 0 || bars.len() < self.period + 1 {
            return Vec::new();
        }

        let deltas: Vec<f64> = bars.windows(2).map(|w| w[1].close - w[0].close).collect();
        let period_f = self.period as f64;

        let (sum_gain, sum_loss) = deltas[..self.period]
            .iter()
            .fold((0.0_f64, 0.0_f64), |(g, l), &d| {
                if d > 0.0 {
                    (g + d, l)
                } else {
                    (g, l - d)
                }
            });
        let mut avg_gain = sum_gain / period_f;
        let mut avg_loss = sum_loss / period_f;

        let mut result = Vec::with_capacity(deltas.len() - self.period + 1);
        result.push(IndicatorPoint::new(
            bars[self.period].time,
            rsi_value(avg_gain, avg_loss),
        ));

        for (delta, bar) in deltas[self.period..].iter().zip(&bars[self.period + 1..]) {
            let gain = delta.max(0.0);
            let loss = (-delta).max(0.0);
            avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
            avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;
            result.push(IndicatorPoint::new(bar.time, rsi_value(avg_gain, avg_loss)));
        }

        result
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::new(14)
    }
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        // A fully flat window has no strength signal either way
        if avg_gain == 0.0 {
            return 50.0;
        }
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}
