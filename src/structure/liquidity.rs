//! Liquidity detectors: sweeps, equal highs/lows and volume spikes.

use crate::indicators::math;
use crate::models::Candle;

use super::swing::{swings_of_kind, SwingKind, SwingPoint};

/// Bars scanned back for the swept extreme.
const SWEEP_WINDOW: usize = 20;
/// Swing points of one kind compared for equality.
const EQUAL_SWING_COUNT: usize = 5;
/// Relative tolerance for "equal" swing extremes: 0.1%.
const EQUAL_TOLERANCE: f64 = 0.001;
/// Volumes averaged for the spike baseline.
const VOLUME_WINDOW: usize = 20;

const MIN_SWEEP_CANDLES: usize = 10;
const MIN_EQUAL_CANDLES: usize = 15;
const MIN_VOLUME_CANDLES: usize = VOLUME_WINDOW + 1;

/// Bullish liquidity sweep: the current wick pierces a recent low but the
/// bar closes back above it (stop-hunt under support).
pub fn detect_liquidity_sweep_bullish(candles: &[Candle]) -> bool {
    let n = candles.len();
    if n < MIN_SWEEP_CANDLES {
        return false;
    }
    let current = &candles[n - 1];
    let window = &candles[(n - 1).saturating_sub(SWEEP_WINDOW)..n - 1];
    let recent_low = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    current.low < recent_low && current.close > recent_low
}

/// Bearish liquidity sweep: the wick pierces a recent high but closes back
/// below it.
pub fn detect_liquidity_sweep_bearish(candles: &[Candle]) -> bool {
    let n = candles.len();
    if n < MIN_SWEEP_CANDLES {
        return false;
    }
    let current = &candles[n - 1];
    let window = &candles[(n - 1).saturating_sub(SWEEP_WINDOW)..n - 1];
    let recent_high = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    current.high > recent_high && current.close < recent_high
}

/// Equal highs: two or more of the last five swing highs within 0.1% of
/// each other.
pub fn detect_equal_highs(candles: &[Candle], swings: &[SwingPoint]) -> bool {
    if candles.len() < MIN_EQUAL_CANDLES {
        return false;
    }
    has_equal_pair(&swings_of_kind(swings, SwingKind::High))
}

/// Equal lows: the mirror over swing lows.
pub fn detect_equal_lows(candles: &[Candle], swings: &[SwingPoint]) -> bool {
    if candles.len() < MIN_EQUAL_CANDLES {
        return false;
    }
    has_equal_pair(&swings_of_kind(swings, SwingKind::Low))
}

fn has_equal_pair(swings: &[SwingPoint]) -> bool {
    let recent = &swings[swings.len().saturating_sub(EQUAL_SWING_COUNT)..];
    for (i, a) in recent.iter().enumerate() {
        for b in &recent[i + 1..] {
            if a.price > f64::EPSILON && ((a.price - b.price).abs() / a.price) <= EQUAL_TOLERANCE {
                return true;
            }
        }
    }
    false
}

/// Volume spike: current volume at least `multiplier` times the mean of
/// the previous twenty volumes.
pub fn detect_volume_spike(candles: &[Candle], multiplier: f64) -> bool {
    let n = candles.len();
    if n < MIN_VOLUME_CANDLES {
        return false;
    }
    let baseline: Vec<f64> = candles[n - 1 - VOLUME_WINDOW..n - 1]
        .iter()
        .map(|c| c.volume)
        .collect();
    let avg = math::mean(&baseline);
    avg > f64::EPSILON && candles[n - 1].volume >= multiplier * avg
}
