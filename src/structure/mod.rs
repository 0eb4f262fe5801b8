//! Smart-money-concepts structure library.
//!
//! Everything derives from the swing-point primitive in [`swing`]: breaks
//! of structure, character changes, zone detectors and liquidity
//! signatures. All detectors are boolean and report `false` under
//! insufficient history; swing detection is recomputed per call, never
//! cached.

pub mod breaks;
pub mod liquidity;
pub mod swing;
pub mod zones;

use std::collections::BTreeMap;

use crate::models::Candle;

pub use breaks::{
    detect_bos_bearish, detect_bos_bullish, detect_choch_bearish, detect_choch_bullish,
};
pub use liquidity::{
    detect_equal_highs, detect_equal_lows, detect_liquidity_sweep_bearish,
    detect_liquidity_sweep_bullish, detect_volume_spike,
};
pub use swing::{
    detect_trend_down, detect_trend_up, find_swing_points, swings_of_kind, SwingKind, SwingPoint,
};
pub use zones::{
    detect_breaker_block_bearish, detect_breaker_block_bullish, detect_discount_zone,
    detect_fvg_bearish, detect_fvg_bullish, detect_order_block_bearish,
    detect_order_block_bullish, detect_premium_zone,
};

/// Default symmetric swing lookback.
pub const SWING_LOOKBACK: usize = 3;
/// Default volume-spike multiplier.
pub const VOLUME_SPIKE_MULTIPLIER: f64 = 2.0;
/// Floor below which swing-derived detectors report false.
pub(crate) const MIN_STRUCTURE_CANDLES: usize = 10;

/// Structure ids with bullish bias; consulted by the bias heuristic.
pub const BULLISH_STRUCTURE: &[&str] = &["bos_bullish", "choch_bullish", "order_block_bullish"];

/// Structure ids with bearish bias; consulted by the bias heuristic.
pub const BEARISH_STRUCTURE: &[&str] = &["bos_bearish", "choch_bearish", "order_block_bearish"];

/// Run the full structure battery against the series.
///
/// Swing points are computed once here and shared by every detector that
/// needs them. Keys are the catalog's SMC feature ids.
pub fn detect_structure(candles: &[Candle]) -> BTreeMap<&'static str, bool> {
    let swings = find_swing_points(candles, SWING_LOOKBACK);
    let trend_gate = candles.len() >= MIN_STRUCTURE_CANDLES;

    let mut out = BTreeMap::new();
    out.insert("bos_bullish", detect_bos_bullish(candles, &swings));
    out.insert("bos_bearish", detect_bos_bearish(candles, &swings));
    out.insert("choch_bullish", detect_choch_bullish(candles, &swings));
    out.insert("choch_bearish", detect_choch_bearish(candles, &swings));
    out.insert("order_block_bullish", detect_order_block_bullish(candles));
    out.insert("order_block_bearish", detect_order_block_bearish(candles));
    out.insert("fvg_bullish", detect_fvg_bullish(candles));
    out.insert("fvg_bearish", detect_fvg_bearish(candles));
    out.insert(
        "liquidity_sweep_bullish",
        detect_liquidity_sweep_bullish(candles),
    );
    out.insert(
        "liquidity_sweep_bearish",
        detect_liquidity_sweep_bearish(candles),
    );
    out.insert("equal_highs", detect_equal_highs(candles, &swings));
    out.insert("equal_lows", detect_equal_lows(candles, &swings));
    out.insert("premium_zone", detect_premium_zone(candles));
    out.insert("discount_zone", detect_discount_zone(candles));
    out.insert(
        "breaker_block_bullish",
        detect_breaker_block_bullish(candles),
    );
    out.insert(
        "breaker_block_bearish",
        detect_breaker_block_bearish(candles),
    );
    out.insert(
        "volume_spike",
        detect_volume_spike(candles, VOLUME_SPIKE_MULTIPLIER),
    );
    out.insert("trend_up", trend_gate && detect_trend_up(&swings));
    out.insert("trend_down", trend_gate && detect_trend_down(&swings));
    out
}
