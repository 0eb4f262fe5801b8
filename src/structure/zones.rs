//! Zone-based detectors: order blocks, fair value gaps, breaker blocks and
//! the premium/discount split.

use crate::models::Candle;

/// How far back an order-block candle may sit.
const ORDER_BLOCK_WINDOW: usize = 10;
/// How far back gap and breaker scans reach.
const ZONE_WINDOW: usize = 20;
/// Bars used for the premium/discount range.
const RANGE_WINDOW: usize = 50;

const MIN_ORDER_BLOCK_CANDLES: usize = 10;
const MIN_FVG_CANDLES: usize = 10;
const MIN_BREAKER_CANDLES: usize = 15;
const MIN_RANGE_CANDLES: usize = 10;

/// Bullish order block: a bearish candle immediately preceding a strong
/// move that closes above its high, with current price retraced into that
/// candle's body range.
pub fn detect_order_block_bullish(candles: &[Candle]) -> bool {
    let n = candles.len();
    if n < MIN_ORDER_BLOCK_CANDLES {
        return false;
    }
    let price = candles[n - 1].close;
    let start = (n - 1).saturating_sub(ORDER_BLOCK_WINDOW);
    for i in (start..n - 1).rev() {
        let block = &candles[i];
        let next = &candles[i + 1];
        if block.is_bearish() && next.is_bullish() && next.close > block.high {
            let body_low = block.open.min(block.close);
            let body_high = block.open.max(block.close);
            if price >= body_low && price <= body_high {
                return true;
            }
        }
    }
    false
}

/// Bearish order block: the mirror case, a bullish candle before a strong down
/// move, with current price back inside its body.
pub fn detect_order_block_bearish(candles: &[Candle]) -> bool {
    let n = candles.len();
    if n < MIN_ORDER_BLOCK_CANDLES {
        return false;
    }
    let price = candles[n - 1].close;
    let start = (n - 1).saturating_sub(ORDER_BLOCK_WINDOW);
    for i in (start..n - 1).rev() {
        let block = &candles[i];
        let next = &candles[i + 1];
        if block.is_bullish() && next.is_bearish() && next.close < block.low {
            let body_low = block.open.min(block.close);
            let body_high = block.open.max(block.close);
            if price >= body_low && price <= body_high {
                return true;
            }
        }
    }
    false
}

/// Bullish fair value gap: a 3-candle imbalance `low[i] > high[i-2]` whose
/// gap still holds the current price.
pub fn detect_fvg_bullish(candles: &[Candle]) -> bool {
    let n = candles.len();
    if n < MIN_FVG_CANDLES {
        return false;
    }
    let price = candles[n - 1].close;
    let start = n.saturating_sub(ZONE_WINDOW).max(2);
    for i in start..n {
        let gap_low = candles[i - 2].high;
        let gap_high = candles[i].low;
        if gap_high > gap_low && price >= gap_low && price <= gap_high {
            return true;
        }
    }
    false
}

/// Bearish fair value gap: the mirror imbalance `high[i] < low[i-2]`.
pub fn detect_fvg_bearish(candles: &[Candle]) -> bool {
    let n = candles.len();
    if n < MIN_FVG_CANDLES {
        return false;
    }
    let price = candles[n - 1].close;
    let start = n.saturating_sub(ZONE_WINDOW).max(2);
    for i in start..n {
        let gap_high = candles[i - 2].low;
        let gap_low = candles[i].high;
        if gap_high > gap_low && price >= gap_low && price <= gap_high {
            return true;
        }
    }
    false
}

/// Premium zone: current close above the midpoint of the trailing
/// high-low range (up to 50 bars).
pub fn detect_premium_zone(candles: &[Candle]) -> bool {
    range_midpoint(candles).is_some_and(|(mid, close)| close > mid)
}

/// Discount zone: current close below the range midpoint.
pub fn detect_discount_zone(candles: &[Candle]) -> bool {
    range_midpoint(candles).is_some_and(|(mid, close)| close < mid)
}

fn range_midpoint(candles: &[Candle]) -> Option<(f64, f64)> {
    let n = candles.len();
    if n < MIN_RANGE_CANDLES {
        return None;
    }
    let window = &candles[n.saturating_sub(RANGE_WINDOW)..];
    let high = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let low = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    Some(((high + low) / 2.0, candles[n - 1].close))
}

/// Bullish breaker block: a bearish order-block candle that price later
/// closed above (role reversal) and has now returned into.
pub fn detect_breaker_block_bullish(candles: &[Candle]) -> bool {
    let n = candles.len();
    if n < MIN_BREAKER_CANDLES {
        return false;
    }
    let price = candles[n - 1].close;
    let start = (n - 1).saturating_sub(ZONE_WINDOW);
    for i in start..n.saturating_sub(3) {
        let block = &candles[i];
        if !block.is_bearish() {
            continue;
        }
        let broken = candles[i + 1..n - 1].iter().any(|c| c.close > block.high);
        if broken {
            let body_low = block.open.min(block.close);
            let body_high = block.open.max(block.close);
            if price >= body_low && price <= body_high {
                return true;
            }
        }
    }
    false
}

/// Bearish breaker block: the mirror case, a bullish block broken downward,
/// with price back inside it.
pub fn detect_breaker_block_bearish(candles: &[Candle]) -> bool {
    let n = candles.len();
    if n < MIN_BREAKER_CANDLES {
        return false;
    }
    let price = candles[n - 1].close;
    let start = (n - 1).saturating_sub(ZONE_WINDOW);
    for i in start..n.saturating_sub(3) {
        let block = &candles[i];
        if !block.is_bullish() {
            continue;
        }
        let broken = candles[i + 1..n - 1].iter().any(|c| c.close < block.low);
        if broken {
            let body_low = block.open.min(block.close);
            let body_high = block.open.max(block.close);
            if price >= body_low && price <= body_high {
                return true;
            }
        }
    }
    false
}
