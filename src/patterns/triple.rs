//! Three-candle pattern detectors
//!
//! All detectors look at exactly the last three candles positionally.

use crate::models::Candle;

use super::{last, SIGNIFICANT_BODY_RATIO};

/// Morning Star: strong bearish bar, small-bodied star below it, strong
/// bullish bar closing above the first bar's body midpoint.
pub fn detect_morning_star(candles: &[Candle]) -> bool {
    match last(candles, 3) {
        Some([first, star, third]) => {
            let first_midpoint = (first.open + first.close) / 2.0;
            first.is_bearish()
                && first.body_ratio() >= SIGNIFICANT_BODY_RATIO
                && star.body_ratio() < SIGNIFICANT_BODY_RATIO
                && star.open.max(star.close) < first.close
                && third.is_bullish()
                && third.close > first_midpoint
        }
        _ => false,
    }
}

/// Evening Star: the bearish mirror of the morning star.
pub fn detect_evening_star(candles: &[Candle]) -> bool {
    match last(candles, 3) {
        Some([first, star, third]) => {
            let first_midpoint = (first.open + first.close) / 2.0;
            first.is_bullish()
                && first.body_ratio() >= SIGNIFICANT_BODY_RATIO
                && star.body_ratio() < SIGNIFICANT_BODY_RATIO
                && star.open.min(star.close) > first.close
                && third.is_bearish()
                && third.close < first_midpoint
        }
        _ => false,
    }
}

/// Three White Soldiers: three advancing bullish bars, each opening inside
/// the prior body and closing at a new high.
pub fn detect_three_white_soldiers(candles: &[Candle]) -> bool {
    match last(candles, 3) {
        Some([a, b, c]) => {
            soldiers_step(a, b) && soldiers_step(b, c) && a.body_ratio() >= SIGNIFICANT_BODY_RATIO
        }
        _ => false,
    }
}

/// Three Black Crows: three declining bearish bars, each opening inside
/// the prior body and closing at a new low.
pub fn detect_three_black_crows(candles: &[Candle]) -> bool {
    match last(candles, 3) {
        Some([a, b, c]) => {
            crows_step(a, b) && crows_step(b, c) && a.body_ratio() >= SIGNIFICANT_BODY_RATIO
        }
        _ => false,
    }
}

fn soldiers_step(prev: &Candle, cur: &Candle) -> bool {
    prev.is_bullish()
        && cur.is_bullish()
        && cur.body_ratio() >= SIGNIFICANT_BODY_RATIO
        && cur.close > prev.close
        && cur.open >= prev.open
        && cur.open <= prev.close
}

fn crows_step(prev: &Candle, cur: &Candle) -> bool {
    prev.is_bearish()
        && cur.is_bearish()
        && cur.body_ratio() >= SIGNIFICANT_BODY_RATIO
        && cur.close < prev.close
        && cur.open <= prev.open
        && cur.open >= prev.close
}
