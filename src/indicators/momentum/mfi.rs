//! MFI (Money Flow Index) indicator

use crate::models::Candle;

/// Calculate MFI from volume-weighted typical-price flows.
///
/// Raw money flow = typical price * volume, classed positive when the
/// typical price rose against the previous bar. MFI = 100 - 100 / (1 + R)
/// where R is the window's positive/negative flow ratio. Indexes before
/// the window fills report the neutral 50; a window with no negative flow
/// reports 100 (50 when there was no flow at all).
pub fn calculate_mfi(candles: &[Candle], period: usize) -> Vec<f64> {
    let n = candles.len();
    let mut out = vec![50.0; n];
    if period == 0 || n < period + 1 {
        return out;
    }

    let typical: Vec<f64> = candles.iter().map(|c| c.typical_price()).collect();
    // flows[i] is signed raw money flow for the move into bar i+1
    let mut flows = Vec::with_capacity(n - 1);
    for i in 1..n {
        let raw = typical[i] * candles[i].volume;
        if typical[i] > typical[i - 1] {
            flows.push(raw);
        } else if typical[i] < typical[i - 1] {
            flows.push(-raw);
        } else {
            flows.push(0.0);
        }
    }

    for i in period..n {
        let window = &flows[i - period..i];
        let positive: f64 = window.iter().filter(|f| **f > 0.0).sum();
        let negative: f64 = window.iter().filter(|f| **f < 0.0).map(|f| f.abs()).sum();
        out[i] = if negative == 0.0 {
            if positive == 0.0 {
                50.0
            } else {
                100.0
            }
        } else {
            100.0 - 100.0 / (1.0 + positive / negative)
        };
    }

    out
}

/// Calculate MFI with default period (14).
pub fn calculate_mfi_default(candles: &[Candle]) -> Vec<f64> {
    calculate_mfi(candles, 14)
}
