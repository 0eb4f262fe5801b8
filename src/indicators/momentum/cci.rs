//! CCI (Commodity Channel Index) indicator

use crate::indicators::math;
use crate::models::Candle;

/// Calculate CCI over the typical price.
///
/// CCI = (TP - SMA(TP)) / (0.015 * mean deviation)
///
/// A zero mean deviation (flat window) reports 0; before the window fills,
/// the available prefix is used.
pub fn calculate_cci(candles: &[Candle], period: usize) -> Vec<f64> {
    let n = candles.len();
    let typical: Vec<f64> = candles.iter().map(|c| c.typical_price()).collect();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let start = (i + 1).saturating_sub(period.max(1));
        let window = &typical[start..=i];
        let avg = math::mean(window);
        let mean_dev = window.iter().map(|v| (v - avg).abs()).sum::<f64>() / window.len() as f64;
        if mean_dev > f64::EPSILON {
            out.push((typical[i] - avg) / (0.015 * mean_dev));
        } else {
            out.push(0.0);
        }
    }
    out
}

/// Calculate CCI with default period (20).
pub fn calculate_cci_default(candles: &[Candle]) -> Vec<f64> {
    calculate_cci(candles, 20)
}
