//! Shared data models spanning the engine layers.

pub mod backtest;
pub mod candle;
pub mod condition;
pub mod scan;

pub use backtest::{
    BacktestConfig, BacktestResult, BacktestTrade, EquityPoint, ExitReason, TradeMode, TradeSide,
};
pub use candle::Candle;
pub use condition::{
    CompareOp, ConditionMode, CrossType, EmaConfig, FeatureCategory, PricePosition, ScanCondition,
};
pub use scan::{ConditionOutcome, EvaluationResult, PreviewValue, ScanRequest, ScanResult};
