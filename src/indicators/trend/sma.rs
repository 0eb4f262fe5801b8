//! SMA (Simple Moving Average) indicator

use crate::indicators::math;
use crate::models::Candle;

/// Calculate a rolling simple moving average over closes.
///
/// Before the window fills, the value is the mean of the available prefix.
pub fn calculate_sma(candles: &[Candle], period: usize) -> Vec<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::sma_series(&closes, period)
}
