//! Bollinger Bands indicator

use crate::indicators::math;
use crate::models::Candle;

/// Parallel band series plus percent bandwidth.
#[derive(Debug, Clone)]
pub struct BollingerSeries {
    pub upper: Vec<f64>,
    pub basis: Vec<f64>,
    pub lower: Vec<f64>,
    pub bandwidth: Vec<f64>,
}

/// Calculate Bollinger Bands.
///
/// Basis = SMA(period); bands = basis +/- std_dev_multiplier * population
/// standard deviation over the same window; bandwidth = (upper - lower) /
/// basis * 100 (0 when the basis is 0). Before the window fills, the
/// available prefix is used, so a single flat bar reports collapsed bands.
pub fn calculate_bollinger(
    candles: &[Candle],
    period: usize,
    std_dev_multiplier: f64,
) -> BollingerSeries {
    let n = candles.len();
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let mut upper = Vec::with_capacity(n);
    let mut basis = Vec::with_capacity(n);
    let mut lower = Vec::with_capacity(n);
    let mut bandwidth = Vec::with_capacity(n);

    for i in 0..n {
        let start = (i + 1).saturating_sub(period.max(1));
        let window = &closes[start..=i];
        let mid = math::mean(window);
        let dev = math::population_std_dev(window) * std_dev_multiplier;
        let up = mid + dev;
        let low = mid - dev;
        upper.push(up);
        basis.push(mid);
        lower.push(low);
        bandwidth.push(if mid.abs() > f64::EPSILON {
            (up - low) / mid * 100.0
        } else {
            0.0
        });
    }

    BollingerSeries {
        upper,
        basis,
        lower,
        bandwidth,
    }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2 sigma).
pub fn calculate_bollinger_default(candles: &[Candle]) -> BollingerSeries {
    calculate_bollinger(candles, 20, 2.0)
}
