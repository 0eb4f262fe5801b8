//! Scan orchestrator.
//!
//! Drives the evaluator over a universe of symbols and timeframes. The
//! engine itself is synchronous and single-threaded; concurrency, rate
//! limiting and retries around candle fetching belong to the caller.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::catalog;
use crate::error::EngineError;
use crate::evaluator::{compute_value_bag, determine_bullishness, evaluate_conditions, ValueBag};
use crate::models::{Candle, PreviewValue, ScanRequest, ScanResult};

/// Bag keys surfaced as the ranked indicator preview, in display order.
const PREVIEW_KEYS: &[&str] = &["rsi", "macd_histogram", "adx", "stoch_k", "cci"];
const PREVIEW_LIMIT: usize = 5;

/// External candle supplier. Implementations are expected to return
/// contiguous bars, oldest first, possibly fewer than requested.
pub trait CandleSource {
    fn fetch_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, EngineError>;
}

/// Outcome of one symbol on one timeframe.
struct PassOutcome {
    matched: bool,
    reasons: Vec<String>,
    price: f64,
    change_pct: f64,
    quote_volume: f64,
    preview: Vec<PreviewValue>,
    is_bullish: bool,
}

/// Multi-timeframe market scanner.
pub struct Scanner<S: CandleSource> {
    source: S,
}

impl<S: CandleSource> Scanner<S> {
    /// Build a scanner, validating the feature catalog against the
    /// implemented detector set first so drift fails fast.
    pub fn new(source: S) -> Result<Self, EngineError> {
        catalog::validate_default()?;
        Ok(Self { source })
    }

    /// Run a scan without progress reporting.
    pub fn scan(&self, request: &ScanRequest) -> Vec<ScanResult> {
        self.scan_with_progress(request, |_, _, _| {})
    }

    /// Run a scan, invoking `progress(timeframe, completed, total)` as
    /// symbols complete within each timeframe pass. A symbol is an overall
    /// match only if it matched on every requested timeframe.
    pub fn scan_with_progress(
        &self,
        request: &ScanRequest,
        mut progress: impl FnMut(&str, usize, usize),
    ) -> Vec<ScanResult> {
        if request.timeframes.is_empty() || request.symbols.is_empty() {
            warn!("scan request without symbols or timeframes");
            return Vec::new();
        }

        info!(
            symbols = request.symbols.len(),
            timeframes = request.timeframes.len(),
            conditions = request.conditions.len(),
            "starting scan"
        );

        // outcomes[symbol] collects one entry per timeframe pass, primary
        // timeframe first.
        let mut outcomes: HashMap<&str, Vec<PassOutcome>> = HashMap::new();
        for timeframe in &request.timeframes {
            let total = request.symbols.len();
            for (done, symbol) in request.symbols.iter().enumerate() {
                let candles =
                    match self
                        .source
                        .fetch_candles(symbol, timeframe, request.candle_limit)
                    {
                        Ok(candles) => candles,
                        Err(error) => {
                            warn!(%symbol, %timeframe, %error, "candle fetch failed, skipping");
                            progress(timeframe, done + 1, total);
                            continue;
                        }
                    };
                let outcome = evaluate_symbol(&candles, request);
                debug!(%symbol, %timeframe, matched = outcome.matched, "symbol evaluated");
                outcomes.entry(symbol.as_str()).or_default().push(outcome);
                progress(timeframe, done + 1, total);
            }
        }

        let timeframe_count = request.timeframes.len();
        let primary_timeframe = &request.timeframes[0];
        let mut results = Vec::new();
        for symbol in &request.symbols {
            let Some(passes) = outcomes.get(symbol.as_str()) else {
                continue;
            };
            // A fetch failure on any pass disqualifies the symbol.
            if passes.len() != timeframe_count || !passes.iter().all(|p| p.matched) {
                continue;
            }
            let primary = &passes[0];
            let mut reasons = primary.reasons.clone();
            if timeframe_count > 1 {
                reasons.push(format!(
                    "Confluence {timeframe_count}/{timeframe_count} timeframes"
                ));
            }
            results.push(ScanResult {
                symbol: symbol.clone(),
                price: primary.price,
                change_pct: primary.change_pct,
                quote_volume: primary.quote_volume,
                preview: primary.preview.clone(),
                reasons,
                is_bullish: primary.is_bullish,
                timeframe: primary_timeframe.clone(),
                timestamp: Utc::now(),
            });
        }

        results.sort_by(|a, b| {
            b.change_pct
                .abs()
                .partial_cmp(&a.change_pct.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });

        info!(matches = results.len(), "scan complete");
        results
    }
}

fn evaluate_symbol(candles: &[Candle], request: &ScanRequest) -> PassOutcome {
    let bag = compute_value_bag(candles, &request.conditions);
    let evaluation = evaluate_conditions(&request.conditions, &bag, candles);
    let price = candles.last().map(|c| c.close).unwrap_or(0.0);
    let change_pct = match (candles.first(), candles.last()) {
        (Some(first), Some(last)) if first.close.abs() > f64::EPSILON => {
            (last.close - first.close) / first.close * 100.0
        }
        _ => 0.0,
    };
    let quote_volume = candles
        .iter()
        .map(|c| {
            if c.quote_volume > 0.0 {
                c.quote_volume
            } else {
                c.volume * c.close
            }
        })
        .sum();

    PassOutcome {
        matched: evaluation.matched,
        reasons: evaluation.reasons,
        price,
        change_pct,
        quote_volume,
        preview: build_preview(&bag),
        is_bullish: determine_bullishness(&bag),
    }
}

/// Ranked, truncated preview of the bag's oscillator-style numerics.
fn build_preview(bag: &ValueBag) -> Vec<PreviewValue> {
    PREVIEW_KEYS
        .iter()
        .filter_map(|key| {
            bag.number(key).map(|value| PreviewValue {
                key: key.to_string(),
                value,
            })
        })
        .take(PREVIEW_LIMIT)
        .collect()
}
