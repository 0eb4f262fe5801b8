//! Tests for the scan orchestrator.

mod common;

use std::cell::RefCell;
use std::collections::HashMap;

use common::{falling_candles, flat_candles, rising_candles};
use quantrix::error::EngineError;
use quantrix::models::{Candle, ConditionMode, FeatureCategory, ScanCondition, ScanRequest};
use quantrix::scanner::{CandleSource, Scanner};

/// Fixed per-symbol series; unknown symbols error like a failed fetch.
struct FixtureSource {
    series: HashMap<String, Vec<Candle>>,
}

impl FixtureSource {
    fn new(entries: Vec<(&str, Vec<Candle>)>) -> Self {
        Self {
            series: entries
                .into_iter()
                .map(|(symbol, candles)| (symbol.to_string(), candles))
                .collect(),
        }
    }
}

impl CandleSource for FixtureSource {
    fn fetch_candles(
        &self,
        symbol: &str,
        interval: &str,
        _limit: usize,
    ) -> Result<Vec<Candle>, EngineError> {
        self.series
            .get(symbol)
            .cloned()
            .ok_or_else(|| EngineError::DataSource {
                symbol: symbol.to_string(),
                interval: interval.to_string(),
                message: "unknown symbol".to_string(),
            })
    }
}

fn rsi_anywhere() -> ScanCondition {
    ScanCondition::new(
        "rsi",
        "rsi",
        FeatureCategory::Indicator,
        ConditionMode::Range,
    )
    .with_range(0.0, 100.0)
}

fn request(symbols: &[&str], timeframes: &[&str]) -> ScanRequest {
    ScanRequest {
        symbols: symbols.iter().map(|s| s.to_string()).collect(),
        timeframes: timeframes.iter().map(|s| s.to_string()).collect(),
        conditions: vec![rsi_anywhere()],
        candle_limit: 100,
    }
}

#[test]
fn scan_collects_matches_with_snapshot_fields() {
    let source = FixtureSource::new(vec![("UPUSDT", rising_candles(60))]);
    let scanner = Scanner::new(source).unwrap();
    let results = scanner.scan(&request(&["UPUSDT"], &["1h"]));

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.symbol, "UPUSDT");
    assert_eq!(result.timeframe, "1h");
    assert_eq!(result.price, 159.0);
    assert!(result.change_pct > 0.0);
    assert!(result.is_bullish);
    assert!(!result.reasons.is_empty());
    assert!(!result.preview.is_empty());
    assert!(result.preview.iter().any(|p| p.key == "rsi"));
}

#[test]
fn results_sorted_by_absolute_change() {
    // The faller moves -14.5% over its window, the flat symbol 0%.
    let source = FixtureSource::new(vec![
        ("FLAT", flat_candles(60, 100.0)),
        ("DOWN", falling_candles(60)),
        ("UP", rising_candles(60)),
    ]);
    let scanner = Scanner::new(source).unwrap();
    let results = scanner.scan(&request(&["FLAT", "DOWN", "UP"], &["1h"]));

    assert_eq!(results.len(), 3);
    let order: Vec<&str> = results.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(order[0], "UP");
    assert_eq!(order[2], "FLAT");
}

#[test]
fn no_match_when_condition_fails() {
    let mut req = request(&["FLAT"], &["1h"]);
    req.conditions = vec![ScanCondition::new(
        "rsi",
        "rsi",
        FeatureCategory::Indicator,
        ConditionMode::Range,
    )
    .with_range(90.0, 100.0)];
    let source = FixtureSource::new(vec![("FLAT", flat_candles(60, 100.0))]);
    let scanner = Scanner::new(source).unwrap();
    assert!(scanner.scan(&req).is_empty());
}

#[test]
fn empty_condition_set_matches_nothing() {
    let mut req = request(&["UP"], &["1h"]);
    req.conditions.clear();
    let source = FixtureSource::new(vec![("UP", rising_candles(60))]);
    let scanner = Scanner::new(source).unwrap();
    assert!(scanner.scan(&req).is_empty());
}

#[test]
fn multi_timeframe_confluence_appends_marker() {
    let source = FixtureSource::new(vec![("UP", rising_candles(60))]);
    let scanner = Scanner::new(source).unwrap();
    let results = scanner.scan(&request(&["UP"], &["1h", "4h"]));

    assert_eq!(results.len(), 1);
    let reasons = &results[0].reasons;
    assert_eq!(
        reasons.last().map(String::as_str),
        Some("Confluence 2/2 timeframes")
    );
    assert_eq!(results[0].timeframe, "1h");
}

#[test]
fn fetch_failure_skips_symbol_not_scan() {
    let source = FixtureSource::new(vec![("UP", rising_candles(60))]);
    let scanner = Scanner::new(source).unwrap();
    let results = scanner.scan(&request(&["GHOST", "UP"], &["1h"]));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].symbol, "UP");
}

#[test]
fn progress_reported_per_symbol_per_pass() {
    let source = FixtureSource::new(vec![
        ("A", rising_candles(60)),
        ("B", flat_candles(60, 100.0)),
    ]);
    let scanner = Scanner::new(source).unwrap();
    let calls: RefCell<Vec<(String, usize, usize)>> = RefCell::new(Vec::new());
    scanner.scan_with_progress(&request(&["A", "B"], &["1h", "4h"]), |tf, done, total| {
        calls.borrow_mut().push((tf.to_string(), done, total));
    });

    let calls = calls.into_inner();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0], ("1h".to_string(), 1, 2));
    assert_eq!(calls[3], ("4h".to_string(), 2, 2));
}

#[test]
fn empty_universe_returns_no_results() {
    let scanner = Scanner::new(FixtureSource::new(vec![])).unwrap();
    assert!(scanner.scan(&request(&[], &["1h"])).is_empty());
}
