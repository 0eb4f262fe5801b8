//! Unit tests for the candlestick pattern detectors.

mod common;

use common::{candle, falling_candles, flat_candles, rising_candles};
use quantrix::patterns::{
    detect_bearish_engulfing, detect_bearish_harami, detect_bullish_engulfing,
    detect_bullish_harami, detect_bullish_marubozu, detect_dark_cloud_cover, detect_doji,
    detect_evening_star, detect_hammer, detect_hanging_man, detect_inside_bar,
    detect_morning_star, detect_patterns, detect_piercing_line, detect_shooting_star,
    detect_spinning_top, detect_three_black_crows, detect_three_white_soldiers,
    detect_tweezer_bottom, detect_tweezer_top,
};

#[test]
fn doji_on_zero_body_candle() {
    // Every flat candle is a doji: zero body over zero range.
    let candles = flat_candles(30, 100.0);
    assert!(detect_doji(&candles));
    for i in 1..=30 {
        assert!(detect_doji(&candles[..i]));
    }
}

#[test]
fn doji_rejects_significant_body() {
    let candles = vec![candle(100.0, 105.0, 95.0, 104.0)];
    assert!(!detect_doji(&candles));
}

#[test]
fn patterns_return_false_on_empty_input() {
    let candles: Vec<quantrix::models::Candle> = Vec::new();
    for (_, hit) in detect_patterns(&candles) {
        assert!(!hit);
    }
}

#[test]
fn hammer_requires_preceding_down_move() {
    let mut candles = falling_candles(10);
    // Small body at the top of a long lower shadow.
    candles.push(candle(190.0, 190.4, 186.0, 190.3));
    assert!(detect_hammer(&candles));

    let mut rising = rising_candles(10);
    rising.push(candle(110.0, 110.4, 106.0, 110.3));
    assert!(!detect_hammer(&rising));
    // The same geometry after an up-move is a hanging man instead.
    assert!(detect_hanging_man(&rising));
}

#[test]
fn shooting_star_after_up_move() {
    let mut candles = rising_candles(10);
    candles.push(candle(110.0, 114.0, 109.9, 110.2));
    assert!(detect_shooting_star(&candles));
}

#[test]
fn spinning_top_has_wicks_both_sides() {
    let candles = vec![candle(100.0, 102.0, 98.0, 100.6)];
    assert!(detect_spinning_top(&candles));
}

#[test]
fn marubozu_is_nearly_all_body() {
    let candles = vec![candle(100.0, 105.0, 100.0, 105.0)];
    assert!(detect_bullish_marubozu(&candles));
}

#[test]
fn textbook_bullish_engulfing() {
    let candles = vec![
        candle(99.0, 100.6, 98.4, 99.8),
        candle(100.0, 100.5, 94.5, 95.0),
        candle(94.0, 101.5, 93.5, 101.0),
    ];
    assert!(detect_bullish_engulfing(&candles));
    assert!(!detect_bearish_engulfing(&candles));
}

#[test]
fn bearish_engulfing_mirror() {
    let candles = vec![
        candle(100.0, 101.5, 99.5, 101.0),
        candle(101.5, 102.0, 94.0, 99.0),
    ];
    assert!(detect_bearish_engulfing(&candles));
    assert!(!detect_bullish_engulfing(&candles));
}

#[test]
fn engulfing_needs_two_candles() {
    let candles = vec![candle(94.0, 101.5, 93.5, 101.0)];
    assert!(!detect_bullish_engulfing(&candles));
}

#[test]
fn bullish_harami_inside_prior_body() {
    let candles = vec![
        candle(105.0, 105.5, 99.5, 100.0),
        candle(101.0, 103.5, 100.8, 103.0),
    ];
    assert!(detect_bullish_harami(&candles));
    assert!(!detect_bearish_harami(&candles));
}

#[test]
fn inside_bar_contained_by_prior_range() {
    let candles = vec![
        candle(100.0, 106.0, 94.0, 103.0),
        candle(101.0, 104.0, 99.0, 100.0),
    ];
    assert!(detect_inside_bar(&candles));
}

#[test]
fn piercing_line_closes_above_midpoint() {
    let candles = vec![
        candle(105.0, 105.5, 99.5, 100.0),
        candle(99.0, 104.0, 98.5, 103.0),
    ];
    assert!(detect_piercing_line(&candles));
    assert!(!detect_dark_cloud_cover(&candles));
}

#[test]
fn dark_cloud_cover_mirror() {
    let candles = vec![
        candle(100.0, 105.5, 99.5, 105.0),
        candle(106.0, 106.5, 101.0, 102.0),
    ];
    assert!(detect_dark_cloud_cover(&candles));
}

#[test]
fn tweezer_top_matches_highs() {
    let candles = vec![
        candle(100.0, 105.0, 99.5, 104.0),
        candle(104.0, 105.0, 100.5, 101.0),
    ];
    assert!(detect_tweezer_top(&candles));
    assert!(!detect_tweezer_bottom(&candles));
}

#[test]
fn tweezer_bottom_matches_lows() {
    let candles = vec![
        candle(104.0, 104.5, 99.0, 100.0),
        candle(100.0, 103.5, 99.0, 103.0),
    ];
    assert!(detect_tweezer_bottom(&candles));
}

#[test]
fn morning_star_reverses_down_move() {
    let candles = vec![
        candle(106.0, 106.5, 99.5, 100.0),
        candle(99.0, 99.6, 98.4, 99.2),
        candle(99.5, 105.0, 99.0, 104.5),
    ];
    assert!(detect_morning_star(&candles));
    assert!(!detect_evening_star(&candles));
}

#[test]
fn evening_star_reverses_up_move() {
    let candles = vec![
        candle(100.0, 106.5, 99.5, 106.0),
        candle(107.0, 107.6, 106.4, 107.2),
        candle(106.5, 107.0, 101.0, 101.5),
    ];
    assert!(detect_evening_star(&candles));
}

#[test]
fn three_white_soldiers_advance_steadily() {
    let candles = vec![
        candle(100.0, 102.6, 99.8, 102.0),
        candle(101.0, 104.6, 100.8, 104.0),
        candle(103.0, 106.6, 102.8, 106.0),
    ];
    assert!(detect_three_white_soldiers(&candles));
    assert!(!detect_three_black_crows(&candles));
}

#[test]
fn three_black_crows_decline_steadily() {
    let candles = vec![
        candle(106.0, 106.2, 103.4, 104.0),
        candle(105.0, 105.2, 101.4, 102.0),
        candle(103.0, 103.2, 99.4, 100.0),
    ];
    assert!(detect_three_black_crows(&candles));
}

#[test]
fn detect_patterns_covers_full_battery() {
    let candles = flat_candles(5, 100.0);
    let hits = detect_patterns(&candles);
    assert_eq!(hits.len(), 21);
    assert_eq!(hits.get("doji"), Some(&true));
    assert_eq!(hits.get("bullish_engulfing"), Some(&false));
}
