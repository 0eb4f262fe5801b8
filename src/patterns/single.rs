//! Single-candle pattern detectors
//!
//! Each detector is a deterministic geometric rule over the last candle,
//! with a trend precondition from the immediately preceding candles where
//! the pattern calls for one. All detectors return `false` when fewer
//! candles are available than required.

use crate::models::Candle;

use super::{last, trend_before, Trend, DOJI_BODY_RATIO, SIGNIFICANT_BODY_RATIO};

/// Doji: the body is under 10% of the range (a zero-range bar counts).
pub fn detect_doji(candles: &[Candle]) -> bool {
    match last(candles, 1) {
        Some([c]) => c.body_ratio() < DOJI_BODY_RATIO,
        _ => false,
    }
}

/// Hammer: long lower wick, small upper wick, after a down-move.
pub fn detect_hammer(candles: &[Candle]) -> bool {
    match last(candles, 1) {
        Some([c]) => {
            hammer_geometry(c) && trend_before(candles, candles.len() - 1) == Trend::Down
        }
        _ => false,
    }
}

/// Hanging Man: hammer geometry printed after an up-move.
pub fn detect_hanging_man(candles: &[Candle]) -> bool {
    match last(candles, 1) {
        Some([c]) => hammer_geometry(c) && trend_before(candles, candles.len() - 1) == Trend::Up,
        _ => false,
    }
}

/// Inverted Hammer: long upper wick, small lower wick, after a down-move.
pub fn detect_inverted_hammer(candles: &[Candle]) -> bool {
    match last(candles, 1) {
        Some([c]) => {
            inverted_hammer_geometry(c) && trend_before(candles, candles.len() - 1) == Trend::Down
        }
        _ => false,
    }
}

/// Shooting Star: inverted-hammer geometry printed after an up-move.
pub fn detect_shooting_star(candles: &[Candle]) -> bool {
    match last(candles, 1) {
        Some([c]) => {
            inverted_hammer_geometry(c) && trend_before(candles, candles.len() - 1) == Trend::Up
        }
        _ => false,
    }
}

/// Spinning Top: small (but non-doji) body with wicks on both sides.
pub fn detect_spinning_top(candles: &[Candle]) -> bool {
    match last(candles, 1) {
        Some([c]) => {
            let ratio = c.body_ratio();
            ratio >= DOJI_BODY_RATIO
                && ratio < SIGNIFICANT_BODY_RATIO
                && c.upper_wick() > c.body()
                && c.lower_wick() > c.body()
        }
        _ => false,
    }
}

/// Bullish Marubozu: nearly all body, close above open.
pub fn detect_bullish_marubozu(candles: &[Candle]) -> bool {
    match last(candles, 1) {
        Some([c]) => c.is_bullish() && c.body_ratio() >= 0.95,
        _ => false,
    }
}

/// Bearish Marubozu: nearly all body, close below open.
pub fn detect_bearish_marubozu(candles: &[Candle]) -> bool {
    match last(candles, 1) {
        Some([c]) => c.is_bearish() && c.body_ratio() >= 0.95,
        _ => false,
    }
}

fn hammer_geometry(c: &Candle) -> bool {
    c.range() > f64::EPSILON && c.lower_wick() >= 2.0 * c.body() && c.upper_wick() <= c.body()
}

fn inverted_hammer_geometry(c: &Candle) -> bool {
    c.range() > f64::EPSILON && c.upper_wick() >= 2.0 * c.body() && c.lower_wick() <= c.body()
}
