//! Williams %R indicator

use crate::models::Candle;

/// Calculate Williams %R.
///
/// %R = (highest high - close) / (highest high - lowest low) * -100,
/// ranging 0 to -100. A flat window reports the midpoint -50; before the
/// window fills, the available prefix is used.
pub fn calculate_williams_r(candles: &[Candle], period: usize) -> Vec<f64> {
    let n = candles.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let start = (i + 1).saturating_sub(period.max(1));
        let window = &candles[start..=i];
        let highest = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
        let lowest = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
        let range = highest - lowest;
        if range > f64::EPSILON {
            out.push((highest - candles[i].close) / range * -100.0);
        } else {
            out.push(-50.0);
        }
    }
    out
}

/// Calculate Williams %R with default period (14).
pub fn calculate_williams_r_default(candles: &[Candle]) -> Vec<f64> {
    calculate_williams_r(candles, 14)
}
