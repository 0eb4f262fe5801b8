//! Stochastic oscillator (%K / %D)

use crate::indicators::math;
use crate::models::Candle;

/// Parallel %K and %D series, indexed identically to the input candles.
#[derive(Debug, Clone)]
pub struct StochasticSeries {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
}

/// Calculate the Stochastic oscillator.
///
/// %K = (close - lowest low) / (highest high - lowest low) * 100 over the
/// rolling window; %D = SMA(`d_period`) of %K. A flat window (zero range)
/// reports the neutral 50; before the window fills, the available prefix
/// is used.
pub fn calculate_stochastic(candles: &[Candle], period: usize, d_period: usize) -> StochasticSeries {
    let n = candles.len();
    let mut k = Vec::with_capacity(n);
    for i in 0..n {
        let start = (i + 1).saturating_sub(period.max(1));
        let window = &candles[start..=i];
        let highest = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
        let lowest = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
        let range = highest - lowest;
        if range > f64::EPSILON {
            k.push((candles[i].close - lowest) / range * 100.0);
        } else {
            k.push(50.0);
        }
    }
    let d = math::sma_series(&k, d_period.max(1));
    StochasticSeries { k, d }
}

/// Calculate Stochastic with default parameters (14, 3).
pub fn calculate_stochastic_default(candles: &[Candle]) -> StochasticSeries {
    calculate_stochastic(candles, 14, 3)
}
