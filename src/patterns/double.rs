//! Two-candle pattern detectors

use crate::models::Candle;

use super::{last, EQUAL_EXTREME_TOLERANCE, SIGNIFICANT_BODY_RATIO};

/// Bullish Engulfing: a bullish body swallows the prior bearish body.
pub fn detect_bullish_engulfing(candles: &[Candle]) -> bool {
    match last(candles, 2) {
        Some([prev, cur]) => {
            prev.is_bearish()
                && cur.is_bullish()
                && cur.open <= prev.close
                && cur.close >= prev.open
        }
        _ => false,
    }
}

/// Bearish Engulfing: a bearish body swallows the prior bullish body.
pub fn detect_bearish_engulfing(candles: &[Candle]) -> bool {
    match last(candles, 2) {
        Some([prev, cur]) => {
            prev.is_bullish()
                && cur.is_bearish()
                && cur.open >= prev.close
                && cur.close <= prev.open
        }
        _ => false,
    }
}

/// Bullish Harami: a small bullish body held inside the prior bearish body.
pub fn detect_bullish_harami(candles: &[Candle]) -> bool {
    match last(candles, 2) {
        Some([prev, cur]) => {
            prev.is_bearish()
                && prev.body_ratio() >= SIGNIFICANT_BODY_RATIO
                && cur.is_bullish()
                && cur.open.max(cur.close) <= prev.open
                && cur.open.min(cur.close) >= prev.close
        }
        _ => false,
    }
}

/// Bearish Harami: a small bearish body held inside the prior bullish body.
pub fn detect_bearish_harami(candles: &[Candle]) -> bool {
    match last(candles, 2) {
        Some([prev, cur]) => {
            prev.is_bullish()
                && prev.body_ratio() >= SIGNIFICANT_BODY_RATIO
                && cur.is_bearish()
                && cur.open.max(cur.close) <= prev.close
                && cur.open.min(cur.close) >= prev.open
        }
        _ => false,
    }
}

/// Inside Bar: the whole bar (wicks included) inside the prior bar's range.
pub fn detect_inside_bar(candles: &[Candle]) -> bool {
    match last(candles, 2) {
        Some([prev, cur]) => cur.high <= prev.high && cur.low >= prev.low,
        _ => false,
    }
}

/// Piercing Line: gap below a bearish bar, closing back above its body
/// midpoint without fully engulfing it.
pub fn detect_piercing_line(candles: &[Candle]) -> bool {
    match last(candles, 2) {
        Some([prev, cur]) => {
            let midpoint = (prev.open + prev.close) / 2.0;
            prev.is_bearish()
                && prev.body_ratio() >= SIGNIFICANT_BODY_RATIO
                && cur.is_bullish()
                && cur.open < prev.close
                && cur.close > midpoint
                && cur.close < prev.open
        }
        _ => false,
    }
}

/// Dark Cloud Cover: the bearish mirror of the piercing line.
pub fn detect_dark_cloud_cover(candles: &[Candle]) -> bool {
    match last(candles, 2) {
        Some([prev, cur]) => {
            let midpoint = (prev.open + prev.close) / 2.0;
            prev.is_bullish()
                && prev.body_ratio() >= SIGNIFICANT_BODY_RATIO
                && cur.is_bearish()
                && cur.open > prev.close
                && cur.close < midpoint
                && cur.close > prev.open
        }
        _ => false,
    }
}

/// Tweezer Top: matching highs, bullish bar then bearish bar.
pub fn detect_tweezer_top(candles: &[Candle]) -> bool {
    match last(candles, 2) {
        Some([prev, cur]) => {
            prev.is_bullish()
                && cur.is_bearish()
                && prev.high > f64::EPSILON
                && ((prev.high - cur.high).abs() / prev.high) <= EQUAL_EXTREME_TOLERANCE
        }
        _ => false,
    }
}

/// Tweezer Bottom: matching lows, bearish bar then bullish bar.
pub fn detect_tweezer_bottom(candles: &[Candle]) -> bool {
    match last(candles, 2) {
        Some([prev, cur]) => {
            prev.is_bearish()
                && cur.is_bullish()
                && prev.low > f64::EPSILON
                && ((prev.low - cur.low).abs() / prev.low) <= EQUAL_EXTREME_TOLERANCE
        }
        _ => false,
    }
}
