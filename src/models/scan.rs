//! Scan request and result models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::condition::ScanCondition;

/// Outcome of evaluating a rule-set against one value bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub matched: bool,
    pub reasons: Vec<String>,
}

impl EvaluationResult {
    pub fn no_match() -> Self {
        Self {
            matched: false,
            reasons: Vec::new(),
        }
    }
}

/// Outcome of one condition: empty reason when unmatched.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionOutcome {
    pub matched: bool,
    pub reason: String,
}

impl ConditionOutcome {
    pub fn matched(reason: String) -> Self {
        Self {
            matched: true,
            reason,
        }
    }

    pub fn unmatched() -> Self {
        Self {
            matched: false,
            reason: String::new(),
        }
    }
}

/// What to scan: a symbol universe, one or more timeframes (more than one
/// means AND-confluence across all of them), and the rule-set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub symbols: Vec<String>,
    pub timeframes: Vec<String>,
    pub conditions: Vec<ScanCondition>,
    /// Candles fetched per symbol per timeframe.
    #[serde(default = "default_candle_limit")]
    pub candle_limit: usize,
}

fn default_candle_limit() -> usize {
    200
}

/// A ranked preview entry shown alongside a matched symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewValue {
    pub key: String,
    pub value: f64,
}

/// One matched symbol snapshot. Immutable once produced; persistence is
/// the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub symbol: String,
    pub price: f64,
    /// Percent change over the scanned window.
    pub change_pct: f64,
    pub quote_volume: f64,
    pub preview: Vec<PreviewValue>,
    pub reasons: Vec<String>,
    pub is_bullish: bool,
    /// Primary (first) timeframe of the request.
    pub timeframe: String,
    pub timestamp: DateTime<Utc>,
}
