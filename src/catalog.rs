//! Static feature catalog.
//!
//! One entry per scannable feature, kept in lock-step with the detectors:
//! adding a detector means adding its entry here, or conditions against it
//! silently fall into the permissive default-shape behavior. [`validate`]
//! cross-checks the table against a computed value bag so drift fails
//! fast in development instead of at scan time.

use crate::error::EngineError;
use crate::evaluator::{compute_value_bag, ValueBag};
use crate::models::{Candle, ConditionMode, FeatureCategory};

/// Which condition fields are meaningful for a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsShape {
    Rsi,
    Ema,
    Macd,
    Bollinger,
    Stochastic,
    Oscillator,
    PriceCross,
    Pattern,
    Smc,
}

/// Static catalog entry describing one scannable feature.
#[derive(Debug, Clone, Copy)]
pub struct FeatureDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: FeatureCategory,
    pub shape: SettingsShape,
    pub default_mode: ConditionMode,
    /// Allowed period bounds, where a period applies.
    pub period_bounds: Option<(u32, u32)>,
    /// Natural numeric range of the feature's value, where bounded.
    pub value_range: Option<(f64, f64)>,
    /// Representative value-bag key proving the detector is wired up.
    pub bag_key: &'static str,
}

const fn indicator(
    id: &'static str,
    name: &'static str,
    shape: SettingsShape,
    default_mode: ConditionMode,
    period_bounds: Option<(u32, u32)>,
    value_range: Option<(f64, f64)>,
    bag_key: &'static str,
) -> FeatureDefinition {
    FeatureDefinition {
        id,
        name,
        category: FeatureCategory::Indicator,
        shape,
        default_mode,
        period_bounds,
        value_range,
        bag_key,
    }
}

const fn pattern(id: &'static str, name: &'static str) -> FeatureDefinition {
    FeatureDefinition {
        id,
        name,
        category: FeatureCategory::Pattern,
        shape: SettingsShape::Pattern,
        default_mode: ConditionMode::Value,
        period_bounds: None,
        value_range: None,
        bag_key: id,
    }
}

const fn smc(id: &'static str, name: &'static str) -> FeatureDefinition {
    FeatureDefinition {
        id,
        name,
        category: FeatureCategory::Smc,
        shape: SettingsShape::Smc,
        default_mode: ConditionMode::Value,
        period_bounds: None,
        value_range: None,
        bag_key: id,
    }
}

/// The full feature catalog. Read-only reference data.
pub const FEATURES: &[FeatureDefinition] = &[
    indicator(
        "rsi",
        "RSI",
        SettingsShape::Rsi,
        ConditionMode::Range,
        Some((2, 50)),
        Some((0.0, 100.0)),
        "rsi",
    ),
    indicator(
        "ema",
        "EMA",
        SettingsShape::Ema,
        ConditionMode::Cross,
        Some((2, 500)),
        None,
        "ema_20",
    ),
    indicator(
        "sma",
        "SMA",
        SettingsShape::PriceCross,
        ConditionMode::Cross,
        Some((2, 500)),
        None,
        "sma_20",
    ),
    indicator(
        "macd",
        "MACD",
        SettingsShape::Macd,
        ConditionMode::Cross,
        None,
        None,
        "macd_histogram",
    ),
    indicator(
        "bollinger",
        "Bollinger Bands",
        SettingsShape::Bollinger,
        ConditionMode::Cross,
        Some((2, 100)),
        None,
        "bb_upper",
    ),
    indicator(
        "stochastic",
        "Stochastic",
        SettingsShape::Stochastic,
        ConditionMode::Range,
        Some((2, 50)),
        Some((0.0, 100.0)),
        "stoch_k",
    ),
    indicator(
        "adx",
        "ADX",
        SettingsShape::Oscillator,
        ConditionMode::Comparison,
        Some((2, 50)),
        Some((0.0, 100.0)),
        "adx",
    ),
    indicator(
        "cci",
        "CCI",
        SettingsShape::Oscillator,
        ConditionMode::Range,
        Some((2, 100)),
        None,
        "cci",
    ),
    indicator(
        "atr",
        "ATR",
        SettingsShape::Oscillator,
        ConditionMode::Comparison,
        Some((2, 50)),
        None,
        "atr",
    ),
    indicator(
        "vwap",
        "VWAP",
        SettingsShape::PriceCross,
        ConditionMode::Cross,
        None,
        None,
        "vwap",
    ),
    indicator(
        "mfi",
        "MFI",
        SettingsShape::Oscillator,
        ConditionMode::Range,
        Some((2, 50)),
        Some((0.0, 100.0)),
        "mfi",
    ),
    indicator(
        "williams_r",
        "Williams %R",
        SettingsShape::Oscillator,
        ConditionMode::Range,
        Some((2, 50)),
        Some((-100.0, 0.0)),
        "williams_r",
    ),
    indicator(
        "roc",
        "ROC",
        SettingsShape::Oscillator,
        ConditionMode::Comparison,
        Some((2, 50)),
        None,
        "roc",
    ),
    indicator(
        "psar",
        "Parabolic SAR",
        SettingsShape::PriceCross,
        ConditionMode::Cross,
        None,
        None,
        "psar",
    ),
    // Patterns
    pattern("doji", "Doji"),
    pattern("hammer", "Hammer"),
    pattern("inverted_hammer", "Inverted Hammer"),
    pattern("hanging_man", "Hanging Man"),
    pattern("shooting_star", "Shooting Star"),
    pattern("spinning_top", "Spinning Top"),
    pattern("bullish_marubozu", "Bullish Marubozu"),
    pattern("bearish_marubozu", "Bearish Marubozu"),
    pattern("bullish_engulfing", "Bullish Engulfing"),
    pattern("bearish_engulfing", "Bearish Engulfing"),
    pattern("bullish_harami", "Bullish Harami"),
    pattern("bearish_harami", "Bearish Harami"),
    pattern("inside_bar", "Inside Bar"),
    pattern("piercing_line", "Piercing Line"),
    pattern("dark_cloud_cover", "Dark Cloud Cover"),
    pattern("tweezer_top", "Tweezer Top"),
    pattern("tweezer_bottom", "Tweezer Bottom"),
    pattern("morning_star", "Morning Star"),
    pattern("evening_star", "Evening Star"),
    pattern("three_white_soldiers", "Three White Soldiers"),
    pattern("three_black_crows", "Three Black Crows"),
    // Smart money concepts
    smc("bos_bullish", "Break of Structure (Bullish)"),
    smc("bos_bearish", "Break of Structure (Bearish)"),
    smc("choch_bullish", "Change of Character (Bullish)"),
    smc("choch_bearish", "Change of Character (Bearish)"),
    smc("order_block_bullish", "Bullish Order Block"),
    smc("order_block_bearish", "Bearish Order Block"),
    smc("fvg_bullish", "Bullish Fair Value Gap"),
    smc("fvg_bearish", "Bearish Fair Value Gap"),
    smc("liquidity_sweep_bullish", "Bullish Liquidity Sweep"),
    smc("liquidity_sweep_bearish", "Bearish Liquidity Sweep"),
    smc("equal_highs", "Equal Highs"),
    smc("equal_lows", "Equal Lows"),
    smc("premium_zone", "Premium Zone"),
    smc("discount_zone", "Discount Zone"),
    smc("breaker_block_bullish", "Bullish Breaker Block"),
    smc("breaker_block_bearish", "Bearish Breaker Block"),
    smc("volume_spike", "Volume Spike"),
    smc("trend_up", "Uptrend"),
    smc("trend_down", "Downtrend"),
];

/// Look up a feature definition by id.
pub fn find(id: &str) -> Option<&'static FeatureDefinition> {
    FEATURES.iter().find(|f| f.id == id)
}

/// Display name for a feature id; unknown ids fall back to the id itself.
pub fn display_name(id: &str) -> &str {
    find(id).map(|f| f.name).unwrap_or(id)
}

/// Check that every catalog entry has a computed value in `bag`.
pub fn validate(bag: &ValueBag) -> Result<(), EngineError> {
    for feature in FEATURES {
        if !bag.contains(feature.bag_key) {
            return Err(EngineError::MissingDetector {
                id: feature.id.to_string(),
                key: feature.bag_key.to_string(),
            });
        }
    }
    Ok(())
}

/// Validate the catalog against a bag computed from a deterministic
/// synthetic series. Called when a scanner is constructed and from tests.
pub fn validate_default() -> Result<(), EngineError> {
    let candles = synthetic_series(60);
    let bag = compute_value_bag(&candles, &[]);
    validate(&bag)
}

/// A deterministic wavy series long enough to fill every default window.
fn synthetic_series(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let base = 100.0 + (i as f64 * 0.7).sin() * 4.0 + i as f64 * 0.05;
            Candle::new(
                base,
                base + 0.6,
                base - 0.6,
                base + 0.2,
                1_000.0 + (i as f64 * 1.3).cos().abs() * 250.0,
                i as i64 * 60_000,
            )
        })
        .collect()
}
