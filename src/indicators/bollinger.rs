//! Bollinger Bands

use crate::series::PriceSeries;
use crate::types::IndicatorPoint;
use serde::Serialize;
use statrs::statistics::Statistics;

/// The three band series, identically time-aligned
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BollingerBands {
    pub upper: Vec<IndicatorPoint>,
    pub middle: Vec<IndicatorPoint>,
    pub lower: Vec<IndicatorPoint>,
}

/// Bollinger Bands: rolling mean with bands at `mean ± std_dev * σ`
///
/// σ is the population standard deviation of the window (divide by `n`),
/// not the sample estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bollinger {
    period: usize,
    std_dev: f64,
}

impl Bollinger {
    pub fn new(period: usize, std_dev: f64) -> Self {
        Self { period, std_dev }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Compute the bands for a price series
    ///
    /// Each output index covers the window of `period` closes ending there;
    /// the first point lands on bar `period - 1`. A zero period or a series
    /// shorter than the period yields three empty sequences.
    pub fn compute(&self, series: &PriceSeries) -> BollingerBands {
        let closes = series.closes();
        if self.period == 0 || closes.len() < self.period {
            return BollingerBands::default();
        }

        let capacity = closes.len() - self.period + 1;
        let mut bands = BollingerBands {
            upper: Vec::with_capacity(capacity),
            middle: Vec::with_capacity(capacity),
            lower: Vec::with_capacity(capacity),
        };

        for (window, bar) in closes
            .windows(self.period)
            .zip(&series.bars()[self.period - 1..])
        {
            let mean = window.iter().mean();
            let std = window.iter().population_std_dev();

            bands.middle.push(IndicatorPoint::new(bar.time, mean));
            bands
                .upper
                .push(IndicatorPoint::new(bar.time, mean + self.std_dev * std));
            bands
                .lower
                .push(IndicatorPoint::new(bar.time, mean - self.std_dev * std));
        }

        bands
    }
}

impl Default for Bollinger {
    fn default() -> Self {
        Self::new(20, 2.0)
    }
}
