//! Condition evaluation engine.
//!
//! [`compute_value_bag`] turns a candle window into the flat value bag the
//! evaluator reads: numbers, boolean flags, enum states and full series
//! (kept so crossover detection can compare the current bar against the
//! previous one). The bag is rebuilt fresh on every call and never mutated
//! in place.

pub mod bias;
pub mod conditions;

use std::collections::HashMap;

use serde::Serialize;

use crate::config::Defaults;
use crate::indicators::momentum::{
    calculate_cci, calculate_mfi, calculate_roc, calculate_rsi, calculate_stochastic,
    calculate_williams_r, detect_rsi_divergence,
};
use crate::indicators::trend::{calculate_adx, calculate_ema, calculate_macd, calculate_psar, calculate_sma};
use crate::indicators::volatility::{calculate_atr, calculate_bollinger};
use crate::indicators::volume::calculate_vwap;
use crate::models::{Candle, ScanCondition};
use crate::{patterns, structure};

pub use bias::determine_bullishness;
pub use conditions::{evaluate_condition, evaluate_conditions};

/// Enum-string states carried by the bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketState {
    Above,
    Below,
    Bullish,
    Bearish,
    None,
}

/// A full indicator series plus its latest value, so consumers never fall
/// back to stringly-typed `_array` key lookups.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesValue {
    pub latest: f64,
    pub series: Vec<f64>,
}

impl SeriesValue {
    fn from_series(series: Vec<f64>) -> Self {
        let latest = series.last().copied().unwrap_or(f64::NAN);
        Self { latest, series }
    }
}

/// One value in the bag: number, flag, enum state or series.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BagValue {
    Number(f64),
    Flag(bool),
    State(MarketState),
    Series(SeriesValue),
}

/// The computed feature values for one candle window.
///
/// Keys are the fixed vocabulary defined by the feature catalog. Array
/// entries always have the same length as the input candle sequence.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValueBag {
    values: HashMap<String, BagValue>,
}

impl ValueBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_number(&mut self, key: &str, value: f64) {
        if value.is_finite() {
            self.values.insert(key.to_string(), BagValue::Number(value));
        }
    }

    pub fn insert_flag(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), BagValue::Flag(value));
    }

    pub fn insert_state(&mut self, key: &str, value: MarketState) {
        self.values.insert(key.to_string(), BagValue::State(value));
    }

    pub fn insert_series(&mut self, key: &str, series: Vec<f64>) {
        self.values
            .insert(key.to_string(), BagValue::Series(SeriesValue::from_series(series)));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&BagValue> {
        self.values.get(key)
    }

    /// Latest numeric value for a key; non-finite values report `None` so
    /// a feature that cannot evaluate never matches a condition.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.values.get(key)? {
            BagValue::Number(v) if v.is_finite() => Some(*v),
            BagValue::Series(s) if s.latest.is_finite() => Some(s.latest),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.values.get(key)? {
            BagValue::Flag(v) => Some(*v),
            _ => None,
        }
    }

    pub fn state(&self, key: &str) -> Option<MarketState> {
        match self.values.get(key)? {
            BagValue::State(v) => Some(*v),
            _ => None,
        }
    }

    pub fn series(&self, key: &str) -> Option<&[f64]> {
        match self.values.get(key)? {
            BagValue::Series(s) => Some(&s.series),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }
}

/// EMA periods needed for a condition set: the defaults plus every period
/// referenced by an EMA condition.
fn ema_periods(conditions: &[ScanCondition]) -> Vec<usize> {
    let mut periods: Vec<usize> = Defaults::EMA_PERIODS.to_vec();
    for condition in conditions.iter().filter(|c| c.feature == "ema") {
        for config in &condition.ema_configs {
            periods.push(config.period as usize);
        }
        if let Some(period) = condition.period {
            periods.push(period as usize);
        }
        if let Some(fast) = condition.ema_crossover_fast {
            periods.push(fast as usize);
        }
        if let Some(slow) = condition.ema_crossover_slow {
            periods.push(slow as usize);
        }
    }
    periods.sort_unstable();
    periods.dedup();
    periods
}

fn condition_param<T, F>(conditions: &[ScanCondition], feature: &str, pick: F) -> Option<T>
where
    F: Fn(&ScanCondition) -> Option<T>,
{
    conditions
        .iter()
        .filter(|c| c.feature == feature)
        .find_map(pick)
}

/// Compute the full value bag for one candle window.
///
/// `conditions` only influences parameters (periods, multipliers); the
/// set of keys produced is the catalog's fixed vocabulary, so evaluating
/// any cataloged feature against the result is always possible.
pub fn compute_value_bag(candles: &[Candle], conditions: &[ScanCondition]) -> ValueBag {
    let mut bag = ValueBag::new();
    if candles.is_empty() {
        return bag;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let last = &candles[candles.len() - 1];
    bag.insert_series("price", closes);
    bag.insert_number("volume", last.volume);

    let rsi_period = condition_param(conditions, "rsi", |c| c.period)
        .map(|p| p as usize)
        .unwrap_or(Defaults::RSI_PERIOD);
    let rsi = calculate_rsi(candles, rsi_period);
    let divergence = detect_rsi_divergence(candles, &rsi);
    bag.insert_series("rsi", rsi);
    bag.insert_flag("rsi_regular_bullish_divergence", divergence.regular_bullish);
    bag.insert_flag("rsi_regular_bearish_divergence", divergence.regular_bearish);
    bag.insert_flag("rsi_hidden_bullish_divergence", divergence.hidden_bullish);
    bag.insert_flag("rsi_hidden_bearish_divergence", divergence.hidden_bearish);

    for period in ema_periods(conditions) {
        bag.insert_series(&format!("ema_{period}"), calculate_ema(candles, period));
    }
    bag.insert_series("sma_20", calculate_sma(candles, Defaults::SMA_PERIOD));

    let macd_fast = condition_param(conditions, "macd", |c| c.macd_fast)
        .map(|p| p as usize)
        .unwrap_or(Defaults::MACD_FAST);
    let macd_slow = condition_param(conditions, "macd", |c| c.macd_slow)
        .map(|p| p as usize)
        .unwrap_or(Defaults::MACD_SLOW);
    let macd_signal = condition_param(conditions, "macd", |c| c.macd_signal)
        .map(|p| p as usize)
        .unwrap_or(Defaults::MACD_SIGNAL);
    let macd = calculate_macd(candles, macd_fast, macd_slow, macd_signal);
    bag.insert_series("macd_line", macd.macd_line);
    bag.insert_series("macd_signal", macd.signal_line);
    bag.insert_series("macd_histogram", macd.histogram);

    let bb_period = condition_param(conditions, "bollinger", |c| c.bb_period)
        .map(|p| p as usize)
        .unwrap_or(Defaults::BB_PERIOD);
    let bb_std_dev = condition_param(conditions, "bollinger", |c| c.bb_std_dev)
        .unwrap_or(Defaults::BB_STD_DEV);
    let bollinger = calculate_bollinger(candles, bb_period, bb_std_dev);
    bag.insert_series("bb_upper", bollinger.upper);
    bag.insert_series("bb_basis", bollinger.basis);
    bag.insert_series("bb_lower", bollinger.lower);
    bag.insert_series("bb_bandwidth", bollinger.bandwidth);

    let stoch_period = condition_param(conditions, "stochastic", |c| c.period)
        .map(|p| p as usize)
        .unwrap_or(Defaults::STOCH_PERIOD);
    let stochastic = calculate_stochastic(candles, stoch_period, Defaults::STOCH_D_PERIOD);
    bag.insert_series("stoch_k", stochastic.k);
    bag.insert_series("stoch_d", stochastic.d);

    let adx = calculate_adx(candles, Defaults::ADX_PERIOD);
    bag.insert_series("adx", adx.adx);
    bag.insert_series("plus_di", adx.plus_di);
    bag.insert_series("minus_di", adx.minus_di);

    bag.insert_series("cci", calculate_cci(candles, Defaults::CCI_PERIOD));
    bag.insert_series("atr", calculate_atr(candles, Defaults::ATR_PERIOD));
    bag.insert_series("vwap", calculate_vwap(candles));
    bag.insert_series("mfi", calculate_mfi(candles, Defaults::MFI_PERIOD));
    bag.insert_series(
        "williams_r",
        calculate_williams_r(candles, Defaults::WILLIAMS_R_PERIOD),
    );
    bag.insert_series("roc", calculate_roc(candles, Defaults::ROC_PERIOD));
    bag.insert_series(
        "psar",
        calculate_psar(candles, Defaults::PSAR_STEP, Defaults::PSAR_MAX_STEP),
    );

    for (id, hit) in patterns::detect_patterns(candles) {
        bag.insert_flag(id, hit);
    }
    let structure_hits = structure::detect_structure(candles);
    let trend_state = match (
        structure_hits.get("trend_up").copied().unwrap_or(false),
        structure_hits.get("trend_down").copied().unwrap_or(false),
    ) {
        (true, _) => MarketState::Bullish,
        (_, true) => MarketState::Bearish,
        _ => MarketState::None,
    };
    for (id, hit) in structure_hits {
        bag.insert_flag(id, hit);
    }
    bag.insert_state("market_trend", trend_state);

    bag
}
