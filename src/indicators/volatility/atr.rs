//! ATR (Average True Range) indicator

use crate::indicators::math;
use crate::models::Candle;

/// Calculate ATR with Wilder smoothing.
///
/// The first bar's true range is its high-low span; the smoothed value is
/// seeded as a prefix mean until `period` true ranges exist, then follows
/// `atr = (atr * (period - 1) + tr) / period`.
pub fn calculate_atr(candles: &[Candle], period: usize) -> Vec<f64> {
    let n = candles.len();
    if n == 0 || period == 0 {
        return vec![0.0; n];
    }

    let mut out = Vec::with_capacity(n);
    let mut atr = candles[0].range();
    let mut seen = 1usize;
    out.push(atr);

    for i in 1..n {
        let tr = math::true_range(candles[i].high, candles[i].low, candles[i - 1].close);
        if seen < period {
            atr = (atr * seen as f64 + tr) / (seen + 1) as f64;
            seen += 1;
        } else {
            atr = (atr * (period as f64 - 1.0) + tr) / period as f64;
        }
        out.push(atr);
    }

    out
}

/// Calculate ATR with default period (14).
pub fn calculate_atr_default(candles: &[Candle]) -> Vec<f64> {
    calculate_atr(candles, 14)
}
