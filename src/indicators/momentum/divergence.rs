//! RSI divergence detection
//!
//! Compares the last two price pivots against RSI at the same bars over a
//! trailing window. Regular divergences hint at reversal (price extreme
//! not confirmed by momentum); hidden divergences at continuation.

use crate::models::Candle;

const DIVERGENCE_WINDOW: usize = 30;
const PIVOT_LOOKBACK: usize = 2;
const MIN_CANDLES: usize = 15;

/// Which divergences are present at the last bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DivergenceFlags {
    pub regular_bullish: bool,
    pub regular_bearish: bool,
    pub hidden_bullish: bool,
    pub hidden_bearish: bool,
}

impl DivergenceFlags {
    pub fn regular(&self) -> bool {
        self.regular_bullish || self.regular_bearish
    }

    pub fn hidden(&self) -> bool {
        self.hidden_bullish || self.hidden_bearish
    }
}

/// Detect RSI divergences from the last two price pivots of each type.
///
/// `rsi` must be the series produced for the same candles. Histories
/// shorter than 15 bars report no divergence.
pub fn detect_rsi_divergence(candles: &[Candle], rsi: &[f64]) -> DivergenceFlags {
    let n = candles.len().min(rsi.len());
    if n < MIN_CANDLES {
        return DivergenceFlags::default();
    }

    let start = n.saturating_sub(DIVERGENCE_WINDOW);
    let lows = find_pivots(candles, start, n, false);
    let highs = find_pivots(candles, start, n, true);

    let mut flags = DivergenceFlags::default();

    if lows.len() >= 2 {
        let (i1, p1) = lows[lows.len() - 2];
        let (i2, p2) = lows[lows.len() - 1];
        let (r1, r2) = (rsi[i1], rsi[i2]);
        // lower low in price, higher low in momentum
        flags.regular_bullish = p2 < p1 && r2 > r1;
        // higher low in price, lower low in momentum
        flags.hidden_bullish = p2 > p1 && r2 < r1;
    }
    if highs.len() >= 2 {
        let (i1, p1) = highs[highs.len() - 2];
        let (i2, p2) = highs[highs.len() - 1];
        let (r1, r2) = (rsi[i1], rsi[i2]);
        flags.regular_bearish = p2 > p1 && r2 < r1;
        flags.hidden_bearish = p2 < p1 && r2 > r1;
    }

    flags
}

/// Pivot extremes inside `[start, end)`: a bar whose low (high) is the
/// strict minimum (maximum) of its `PIVOT_LOOKBACK`-bar neighborhood.
fn find_pivots(candles: &[Candle], start: usize, end: usize, highs: bool) -> Vec<(usize, f64)> {
    let mut pivots = Vec::new();
    for i in start..end {
        let lo = i.saturating_sub(PIVOT_LOOKBACK);
        let hi = (i + PIVOT_LOOKBACK + 1).min(end);
        if hi - lo < PIVOT_LOOKBACK + 1 {
            continue;
        }
        let value = if highs { candles[i].high } else { candles[i].low };
        let is_pivot = (lo..hi).all(|j| {
            if j == i {
                return true;
            }
            let other = if highs { candles[j].high } else { candles[j].low };
            if highs {
                value > other
            } else {
                value < other
            }
        });
        if is_pivot {
            pivots.push((i, value));
        }
    }
    pivots
}
