//! quantrix: market-scanning evaluation engine.
//!
//! Pure, synchronous computation over OHLCV candle series: a technical
//! indicator battery, candlestick pattern detectors, smart-money structure
//! signals, a composable condition evaluator, a multi-timeframe scan
//! orchestrator and a bar-by-bar backtester. No I/O lives here; candle
//! fetching, persistence and presentation are the caller's concern.

pub mod backtest;
pub mod catalog;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod patterns;
pub mod scanner;
pub mod structure;

pub use backtest::run_backtest;
pub use catalog::{FeatureDefinition, SettingsShape, FEATURES};
pub use error::EngineError;
pub use evaluator::{
    compute_value_bag, determine_bullishness, evaluate_condition, evaluate_conditions, BagValue,
    MarketState, SeriesValue, ValueBag,
};
pub use patterns::detect_patterns;
pub use scanner::{CandleSource, Scanner};
pub use structure::detect_structure;
