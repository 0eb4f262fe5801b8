//! EMA (Exponential Moving Average) indicator

use crate::indicators::math;
use crate::models::Candle;

/// Calculate an EMA series over closes.
///
/// Seed at index `period - 1` is the simple average of the first `period`
/// closes; `ema = close * k + ema * (1 - k)` with `k = 2 / (period + 1)`
/// afterwards. Indexes before the seed carry the close itself, which is
/// also the documented fallback for windows shorter than the period.
pub fn calculate_ema(candles: &[Candle], period: usize) -> Vec<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::ema_series(&closes, period)
}

/// Calculate several EMA series at once, one per requested period.
pub fn calculate_emas(candles: &[Candle], periods: &[usize]) -> Vec<(usize, Vec<f64>)> {
    periods
        .iter()
        .map(|&period| (period, calculate_ema(candles, period)))
        .collect()
}
