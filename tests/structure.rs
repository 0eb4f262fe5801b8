//! Unit tests for the smart-money structure detectors.

mod common;

use common::{candle, flat_candles, rising_candles};
use quantrix::models::Candle;
use quantrix::structure::{
    detect_bos_bearish, detect_bos_bullish, detect_choch_bullish, detect_equal_highs,
    detect_fvg_bullish, detect_liquidity_sweep_bearish, detect_liquidity_sweep_bullish,
    detect_order_block_bullish, detect_premium_zone, detect_structure, detect_trend_down,
    detect_trend_up, detect_volume_spike, find_swing_points, SwingKind, SwingPoint,
};

/// Flat bars at 100 with a single protruding high at `index`.
fn series_with_peak(count: usize, index: usize, peak: f64) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            if i == index {
                Candle::new(100.0, peak, 99.5, 100.0, 1_000.0, i as i64)
            } else {
                Candle::new(100.0, 100.5, 99.5, 100.0, 1_000.0, i as i64)
            }
        })
        .collect()
}

#[test]
fn swing_high_requires_strict_symmetric_dominance() {
    let candles = series_with_peak(15, 7, 103.0);
    let swings = find_swing_points(&candles, 3);
    let highs: Vec<&SwingPoint> = swings.iter().filter(|p| p.kind == SwingKind::High).collect();
    assert_eq!(highs.len(), 1);
    assert_eq!(highs[0].index, 7);
    assert_eq!(highs[0].price, 103.0);
}

#[test]
fn swing_detection_needs_full_window() {
    let candles = series_with_peak(6, 3, 103.0);
    assert!(find_swing_points(&candles, 3).is_empty());
}

#[test]
fn edge_candles_cannot_be_swings() {
    // The peak sits inside the trailing lookback margin.
    let candles = series_with_peak(15, 13, 103.0);
    let swings = find_swing_points(&candles, 3);
    assert!(swings.iter().all(|p| p.kind != SwingKind::High));
}

#[test]
fn bos_bullish_on_close_beyond_swing_high() {
    let mut candles = series_with_peak(14, 7, 103.0);
    candles.push(candle(100.0, 104.0, 99.8, 103.8));
    let swings = find_swing_points(&candles, 3);
    assert!(detect_bos_bullish(&candles, &swings));
    assert!(!detect_bos_bearish(&candles, &swings));
}

#[test]
fn bos_needs_minimum_history() {
    let mut candles = series_with_peak(8, 4, 103.0);
    candles.push(candle(100.0, 104.0, 99.8, 103.8));
    let swings = find_swing_points(&candles, 3);
    assert!(!detect_bos_bullish(&candles, &swings));
}

#[test]
fn choch_bullish_after_lower_highs_break() {
    // Two swing highs, the second lower, then a close back above it.
    let mut candles = Vec::new();
    for i in 0..20 {
        let high = match i {
            5 => 106.0,
            12 => 104.0,
            _ => 100.5,
        };
        candles.push(Candle::new(100.0, high, 99.5, 100.0, 1_000.0, i as i64));
    }
    candles.push(candle(100.0, 105.2, 99.9, 105.0));
    let swings = find_swing_points(&candles, 3);
    assert!(detect_choch_bullish(&candles, &swings));
}

#[test]
fn choch_not_flagged_when_highs_were_rising() {
    let mut candles = Vec::new();
    for i in 0..20 {
        let high = match i {
            5 => 104.0,
            12 => 106.0,
            _ => 100.5,
        };
        candles.push(Candle::new(100.0, high, 99.5, 100.0, 1_000.0, i as i64));
    }
    candles.push(candle(100.0, 107.2, 99.9, 107.0));
    let swings = find_swing_points(&candles, 3);
    assert!(!detect_choch_bullish(&candles, &swings));
    // Plain BOS still fires on the same break.
    assert!(detect_bos_bullish(&candles, &swings));
}

#[test]
fn order_block_active_on_retrace_into_body() {
    let mut candles = flat_candles(8, 100.0);
    // Bearish block candle, then a strong move through its high.
    candles.push(candle(101.0, 101.5, 99.5, 100.0));
    candles.push(candle(100.0, 103.5, 99.9, 103.0));
    candles.push(candle(103.0, 103.6, 100.2, 100.5));
    assert!(detect_order_block_bullish(&candles));
}

#[test]
fn order_block_inactive_when_price_stays_away() {
    let mut candles = flat_candles(8, 100.0);
    candles.push(candle(101.0, 101.5, 99.5, 100.0));
    candles.push(candle(100.0, 103.5, 99.9, 103.0));
    candles.push(candle(103.0, 104.0, 102.8, 103.5));
    assert!(!detect_order_block_bullish(&candles));
}

#[test]
fn fair_value_gap_holds_price() {
    let mut candles = flat_candles(10, 100.0);
    // Impulse leg leaves a gap between the flat bars' highs (100.0) and
    // the second impulse bar's low (103.0).
    candles.push(candle(100.0, 104.0, 99.9, 103.8));
    candles.push(candle(103.8, 105.5, 103.0, 105.0));
    candles.push(candle(105.0, 105.2, 101.8, 102.0));
    assert!(detect_fvg_bullish(&candles));
}

#[test]
fn liquidity_sweep_bullish_wick_below_then_close_above() {
    let mut candles = flat_candles(14, 100.0);
    candles.push(candle(100.0, 100.6, 99.0, 100.2));
    assert!(detect_liquidity_sweep_bullish(&candles));
    assert!(!detect_liquidity_sweep_bearish(&candles));
}

#[test]
fn liquidity_sweep_bearish_wick_above_then_close_below() {
    let mut candles = flat_candles(14, 100.0);
    candles.push(candle(100.0, 101.2, 99.6, 99.8));
    assert!(detect_liquidity_sweep_bearish(&candles));
}

#[test]
fn equal_highs_within_tolerance() {
    let mut candles = Vec::new();
    for i in 0..20 {
        let high = match i {
            5 => 105.0,
            12 => 105.04,
            _ => 100.5,
        };
        candles.push(Candle::new(100.0, high, 99.5, 100.0, 1_000.0, i as i64));
    }
    let swings = find_swing_points(&candles, 3);
    assert!(detect_equal_highs(&candles, &swings));
}

#[test]
fn premium_zone_above_range_midpoint() {
    let candles = rising_candles(40);
    assert!(detect_premium_zone(&candles));
}

#[test]
fn volume_spike_against_trailing_average() {
    let mut candles = flat_candles(24, 100.0);
    let last = candles.len() - 1;
    candles[last].volume = 2_500.0;
    assert!(detect_volume_spike(&candles, 2.0));
    candles[last].volume = 1_500.0;
    assert!(!detect_volume_spike(&candles, 2.0));
}

#[test]
fn volume_spike_needs_full_baseline() {
    let mut candles = flat_candles(15, 100.0);
    let last = candles.len() - 1;
    candles[last].volume = 10_000.0;
    assert!(!detect_volume_spike(&candles, 2.0));
}

#[test]
fn trend_classification_from_swing_sequences() {
    // Rising zigzag: swing highs and lows both ascend.
    let mut closes = Vec::new();
    for cycle in 0..5 {
        let lift = cycle as f64 * 2.0;
        for leg in [101.0, 103.0, 105.0, 103.5, 102.0] {
            closes.push(leg + lift);
        }
    }
    let candles: Vec<Candle> = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::new(close, close + 0.1, close - 0.1, close, 1_000.0, i as i64)
        })
        .collect();
    let swings = find_swing_points(&candles, 3);
    assert!(detect_trend_up(&swings));
    assert!(!detect_trend_down(&swings));
}

#[test]
fn detectors_report_false_on_short_history() {
    let candles = flat_candles(5, 100.0);
    for (id, hit) in detect_structure(&candles) {
        assert!(!hit, "{id} fired on 5 candles");
    }
}

#[test]
fn detect_structure_covers_full_battery() {
    let candles = rising_candles(60);
    let hits = detect_structure(&candles);
    assert_eq!(hits.len(), 19);
    assert!(hits.contains_key("bos_bullish"));
    assert!(hits.contains_key("volume_spike"));
}
