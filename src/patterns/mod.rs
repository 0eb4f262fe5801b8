//! Candlestick pattern library.
//!
//! Boolean detectors over the last one to three candles. Shared
//! classification primitives live on [`Candle`]: body, range, wicks and
//! body ratio, with a doji threshold of 0.1 and a "significant body"
//! threshold of 0.3. Detectors never error; missing history means `false`.

pub mod double;
pub mod single;
pub mod triple;

use std::collections::BTreeMap;

use crate::models::Candle;

pub use double::{
    detect_bearish_engulfing, detect_bearish_harami, detect_bullish_engulfing,
    detect_bullish_harami, detect_dark_cloud_cover, detect_inside_bar, detect_piercing_line,
    detect_tweezer_bottom, detect_tweezer_top,
};
pub use single::{
    detect_bearish_marubozu, detect_bullish_marubozu, detect_doji, detect_hammer,
    detect_hanging_man, detect_inverted_hammer, detect_shooting_star, detect_spinning_top,
};
pub use triple::{
    detect_evening_star, detect_morning_star, detect_three_black_crows,
    detect_three_white_soldiers,
};

/// Body ratio below which a candle counts as a doji.
pub const DOJI_BODY_RATIO: f64 = 0.1;
/// Body ratio from which a candle counts as having a significant body.
pub const SIGNIFICANT_BODY_RATIO: f64 = 0.3;
/// Relative tolerance for "equal" highs/lows (tweezers): 0.1%.
pub const EQUAL_EXTREME_TOLERANCE: f64 = 0.001;

/// Pattern ids with bullish bias; consulted by the bias heuristic.
pub const BULLISH_PATTERNS: &[&str] = &[
    "hammer",
    "inverted_hammer",
    "bullish_engulfing",
    "bullish_harami",
    "bullish_marubozu",
    "piercing_line",
    "tweezer_bottom",
    "morning_star",
    "three_white_soldiers",
];

/// Pattern ids with bearish bias; consulted by the bias heuristic.
pub const BEARISH_PATTERNS: &[&str] = &[
    "hanging_man",
    "shooting_star",
    "bearish_engulfing",
    "bearish_harami",
    "bearish_marubozu",
    "dark_cloud_cover",
    "tweezer_top",
    "evening_star",
    "three_black_crows",
];

/// The last `count` candles, or `None` when the series is shorter.
pub(crate) fn last(candles: &[Candle], count: usize) -> Option<&[Candle]> {
    if candles.len() < count {
        None
    } else {
        Some(&candles[candles.len() - count..])
    }
}

/// Direction of the move leading into the candle at `idx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Trend {
    Up,
    Down,
    Flat,
}

/// Classify the preceding move by comparing closes up to three bars back;
/// a lone preceding candle is classified by its own body direction.
pub(crate) fn trend_before(candles: &[Candle], idx: usize) -> Trend {
    if idx == 0 {
        return Trend::Flat;
    }
    let start = idx.saturating_sub(4);
    let first = candles[start].close;
    let prior = &candles[idx - 1];
    if idx - start >= 2 {
        if prior.close < first {
            return Trend::Down;
        }
        if prior.close > first {
            return Trend::Up;
        }
    }
    if prior.is_bearish() {
        Trend::Down
    } else if prior.is_bullish() {
        Trend::Up
    } else {
        Trend::Flat
    }
}

/// Run the full detector battery against the most recent candles.
///
/// Keys are the pattern feature ids from the catalog; iteration order is
/// stable so reason strings come out deterministically.
pub fn detect_patterns(candles: &[Candle]) -> BTreeMap<&'static str, bool> {
    let mut out = BTreeMap::new();
    out.insert("doji", detect_doji(candles));
    out.insert("hammer", detect_hammer(candles));
    out.insert("inverted_hammer", detect_inverted_hammer(candles));
    out.insert("hanging_man", detect_hanging_man(candles));
    out.insert("shooting_star", detect_shooting_star(candles));
    out.insert("spinning_top", detect_spinning_top(candles));
    out.insert("bullish_marubozu", detect_bullish_marubozu(candles));
    out.insert("bearish_marubozu", detect_bearish_marubozu(candles));
    out.insert("bullish_engulfing", detect_bullish_engulfing(candles));
    out.insert("bearish_engulfing", detect_bearish_engulfing(candles));
    out.insert("bullish_harami", detect_bullish_harami(candles));
    out.insert("bearish_harami", detect_bearish_harami(candles));
    out.insert("inside_bar", detect_inside_bar(candles));
    out.insert("piercing_line", detect_piercing_line(candles));
    out.insert("dark_cloud_cover", detect_dark_cloud_cover(candles));
    out.insert("tweezer_top", detect_tweezer_top(candles));
    out.insert("tweezer_bottom", detect_tweezer_bottom(candles));
    out.insert("morning_star", detect_morning_star(candles));
    out.insert("evening_star", detect_evening_star(candles));
    out.insert("three_white_soldiers", detect_three_white_soldiers(candles));
    out.insert("three_black_crows", detect_three_black_crows(candles));
    out
}
