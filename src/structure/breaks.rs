//! Break of Structure and Change of Character detectors

use crate::models::Candle;

use super::swing::{swings_of_kind, SwingKind, SwingPoint};
use super::MIN_STRUCTURE_CANDLES;

/// Bullish BOS: the current close breaks above the most recent swing high.
pub fn detect_bos_bullish(candles: &[Candle], swings: &[SwingPoint]) -> bool {
    if candles.len() < MIN_STRUCTURE_CANDLES {
        return false;
    }
    let highs = swings_of_kind(swings, SwingKind::High);
    match (candles.last(), highs.last()) {
        (Some(current), Some(swing)) => current.close > swing.price,
        _ => false,
    }
}

/// Bearish BOS: the current close breaks below the most recent swing low.
pub fn detect_bos_bearish(candles: &[Candle], swings: &[SwingPoint]) -> bool {
    if candles.len() < MIN_STRUCTURE_CANDLES {
        return false;
    }
    let lows = swings_of_kind(swings, SwingKind::Low);
    match (candles.last(), lows.last()) {
        (Some(current), Some(swing)) => current.close < swing.price,
        _ => false,
    }
}

/// Bullish ChoCH: the swing highs were printing lower highs (downtrend
/// signature) and the current close breaks back above the most recent one.
///
/// Only the last two swing highs are inspected; choppy windows may
/// misclassify and that approximation is intentional, pinned behavior.
pub fn detect_choch_bullish(candles: &[Candle], swings: &[SwingPoint]) -> bool {
    if candles.len() < MIN_STRUCTURE_CANDLES {
        return false;
    }
    let highs = swings_of_kind(swings, SwingKind::High);
    if highs.len() < 2 {
        return false;
    }
    let prior = highs[highs.len() - 2];
    let recent = highs[highs.len() - 1];
    let lower_highs = recent.price < prior.price;
    match candles.last() {
        Some(current) => lower_highs && current.close > recent.price,
        None => false,
    }
}

/// Bearish ChoCH: higher lows, then the current close breaks back below
/// the most recent swing low.
pub fn detect_choch_bearish(candles: &[Candle], swings: &[SwingPoint]) -> bool {
    if candles.len() < MIN_STRUCTURE_CANDLES {
        return false;
    }
    let lows = swings_of_kind(swings, SwingKind::Low);
    if lows.len() < 2 {
        return false;
    }
    let prior = lows[lows.len() - 2];
    let recent = lows[lows.len() - 1];
    let higher_lows = recent.price > prior.price;
    match candles.last() {
        Some(current) => higher_lows && current.close < recent.price,
        None => false,
    }
}
