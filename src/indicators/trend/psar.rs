//! Parabolic SAR indicator

use crate::models::Candle;

/// Calculate Parabolic SAR.
///
/// Standard acceleration schedule: `step` added on every new extreme,
/// capped at `max_step`. The run starts long with SAR at the first bar's
/// low; a single bar reports that low.
pub fn calculate_psar(candles: &[Candle], step: f64, max_step: f64) -> Vec<f64> {
    let n = candles.len();
    if n == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(n);
    let mut uptrend = true;
    let mut af = step;
    let mut extreme = candles[0].high;
    let mut sar = candles[0].low;
    out.push(sar);

    for i in 1..n {
        sar += af * (extreme - sar);
        if uptrend {
            // SAR may never rise above the prior two lows
            sar = sar.min(candles[i - 1].low);
            if i >= 2 {
                sar = sar.min(candles[i - 2].low);
            }
            if candles[i].low < sar {
                uptrend = false;
                sar = extreme;
                extreme = candles[i].low;
                af = step;
            } else if candles[i].high > extreme {
                extreme = candles[i].high;
                af = (af + step).min(max_step);
            }
        } else {
            sar = sar.max(candles[i - 1].high);
            if i >= 2 {
                sar = sar.max(candles[i - 2].high);
            }
            if candles[i].high > sar {
                uptrend = true;
                sar = extreme;
                extreme = candles[i].high;
                af = step;
            } else if candles[i].low < extreme {
                extreme = candles[i].low;
                af = (af + step).min(max_step);
            }
        }
        out.push(sar);
    }

    out
}

/// Calculate Parabolic SAR with default parameters (0.02, 0.2).
pub fn calculate_psar_default(candles: &[Candle]) -> Vec<f64> {
    calculate_psar(candles, 0.02, 0.2)
}
