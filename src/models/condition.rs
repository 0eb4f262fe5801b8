//! Scan condition data models
//!
//! A [`ScanCondition`] is one user-authored rule against the computed value
//! bag. Conditions are independent; a rule-set is an ordered list combined
//! with AND semantics by the evaluator.

use serde::{Deserialize, Serialize};

/// Which optional fields of a condition are semantically active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionMode {
    /// Match iff `min_value <= value <= max_value`.
    Range,
    /// Apply `operator` against `compare_value`.
    Comparison,
    /// Require a crossover matching `cross_type`.
    Cross,
    /// Boolean feature must be exactly true.
    Value,
}

/// Feature category, mirrored from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    Indicator,
    Pattern,
    Smc,
}

/// Comparison operators for `ConditionMode::Comparison`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,
}

impl CompareOp {
    /// Equality uses an epsilon of 0.01.
    pub fn apply(self, value: f64, target: f64) -> bool {
        match self {
            CompareOp::Gt => value > target,
            CompareOp::Lt => value < target,
            CompareOp::Eq => (value - target).abs() < 0.01,
            CompareOp::Ge => value >= target,
            CompareOp::Le => value <= target,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Eq => "=",
            CompareOp::Ge => ">=",
            CompareOp::Le => "<=",
        }
    }
}

/// Declared crossover direction for `ConditionMode::Cross`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossType {
    /// Fast crosses from at-or-below to above slow.
    Crossover,
    /// Fast crosses from at-or-above to below slow.
    Crossunder,
}

/// Price position requirement for EMA checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricePosition {
    #[default]
    Any,
    Above,
    Below,
}

/// One independent EMA/price-position check; a condition may carry up to
/// four and all of them must pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmaConfig {
    pub period: u32,
    #[serde(default)]
    pub price_position: PricePosition,
}

/// A user-authored scan rule.
///
/// `mode` decides which optional fields are read; everything else is
/// ignored. Unknown feature ids fall back to the permissive default shape
/// at evaluation time rather than failing the rule-set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanCondition {
    pub id: String,
    /// Catalog feature id, e.g. `rsi`, `bullish_engulfing`, `bos_bullish`.
    pub feature: String,
    pub category: FeatureCategory,
    pub mode: ConditionMode,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<CompareOp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_type: Option<CrossType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_position: Option<PricePosition>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub ema_configs: Vec<EmaConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_crossover: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_crossover_fast: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_crossover_slow: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stoch_overbought: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stoch_oversold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_fast: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_slow: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_signal: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bb_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bb_std_dev: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi_regular_divergence: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi_hidden_divergence: Option<bool>,
}

impl ScanCondition {
    /// A minimal enabled condition; tests and the demo binary fill in the
    /// mode-specific fields with the builder methods below.
    pub fn new(id: &str, feature: &str, category: FeatureCategory, mode: ConditionMode) -> Self {
        Self {
            id: id.to_string(),
            feature: feature.to_string(),
            category,
            mode,
            enabled: true,
            min_value: None,
            max_value: None,
            operator: None,
            compare_value: None,
            cross_type: None,
            period: None,
            price_position: None,
            ema_configs: Vec::new(),
            ema_crossover: None,
            ema_crossover_fast: None,
            ema_crossover_slow: None,
            stoch_overbought: None,
            stoch_oversold: None,
            macd_fast: None,
            macd_slow: None,
            macd_signal: None,
            bb_period: None,
            bb_std_dev: None,
            rsi_regular_divergence: None,
            rsi_hidden_divergence: None,
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    pub fn with_comparison(mut self, operator: CompareOp, value: f64) -> Self {
        self.operator = Some(operator);
        self.compare_value = Some(value);
        self
    }

    pub fn with_cross(mut self, cross_type: CrossType) -> Self {
        self.cross_type = Some(cross_type);
        self
    }

    pub fn with_period(mut self, period: u32) -> Self {
        self.period = Some(period);
        self
    }

    pub fn with_ema_config(mut self, period: u32, price_position: PricePosition) -> Self {
        self.ema_configs.push(EmaConfig {
            period,
            price_position,
        });
        self
    }

    pub fn with_ema_crossover(mut self, fast: u32, slow: u32) -> Self {
        self.ema_crossover = Some(true);
        self.ema_crossover_fast = Some(fast);
        self.ema_crossover_slow = Some(slow);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
