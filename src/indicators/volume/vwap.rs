//! VWAP (Volume-Weighted Average Price) indicator

use crate::models::Candle;

/// Calculate cumulative VWAP over the supplied window.
///
/// VWAP = cumulative (typical price * volume) / cumulative volume. While
/// the cumulative volume is still zero, the bar's close is reported
/// instead of dividing by zero.
pub fn calculate_vwap(candles: &[Candle]) -> Vec<f64> {
    let mut out = Vec::with_capacity(candles.len());
    let mut cum_pv = 0.0;
    let mut cum_volume = 0.0;
    for candle in candles {
        cum_pv += candle.typical_price() * candle.volume;
        cum_volume += candle.volume;
        if cum_volume > f64::EPSILON {
            out.push(cum_pv / cum_volume);
        } else {
            out.push(candle.close);
        }
    }
    out
}
