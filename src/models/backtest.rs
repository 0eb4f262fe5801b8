//! Backtest configuration and result models

use serde::{Deserialize, Serialize};

use super::condition::ScanCondition;

/// Trade direction selection for the backtester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeMode {
    Long,
    Short,
    /// Decide per entry from the value bag's bullish/bearish bias.
    #[default]
    Auto,
}

/// Side of an open position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Long,
    Short,
}

/// Why a simulated position closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitReason {
    /// Take-profit threshold reached.
    Tp,
    /// Stop-loss threshold reached.
    Sl,
    /// Position still open at the last bar.
    End,
}

/// Configuration for one backtest run over a single symbol's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestConfig {
    pub conditions: Vec<ScanCondition>,
    pub initial_capital: f64,
    /// Percent of current capital committed per trade.
    pub position_size_percent: f64,
    pub take_profit_percent: f64,
    pub stop_loss_percent: f64,
    #[serde(default)]
    pub mode: TradeMode,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
            initial_capital: 10_000.0,
            position_size_percent: 10.0,
            take_profit_percent: 3.0,
            stop_loss_percent: 2.0,
            mode: TradeMode::Auto,
        }
    }
}

/// One simulated open-to-close position record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestTrade {
    pub entry_index: usize,
    pub exit_index: usize,
    pub entry_price: f64,
    pub exit_price: f64,
    pub side: TradeSide,
    pub quantity: f64,
    pub pnl: f64,
    pub pnl_percent: f64,
    pub exit_reason: ExitReason,
}

/// One point of the per-bar equity curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityPoint {
    pub index: usize,
    /// Realized capital plus unrealized PnL of any open position.
    pub equity: f64,
    /// Percent below the running equity peak.
    pub drawdown_pct: f64,
}

/// Aggregate statistics for a full backtest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestResult {
    pub trades: Vec<BacktestTrade>,
    pub equity_curve: Vec<EquityPoint>,
    pub initial_capital: f64,
    pub final_equity: f64,
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub gross_profit: f64,
    pub gross_loss: f64,
    /// `f64::INFINITY` when there are no losses and positive profit;
    /// 0.0 when there are no trades.
    pub profit_factor: f64,
    pub sharpe_ratio: f64,
    pub max_drawdown_pct: f64,
    pub avg_win_percent: f64,
    pub avg_loss_percent: f64,
    pub best_trade_percent: f64,
    pub worst_trade_percent: f64,
    pub avg_holding_bars: f64,
}

impl BacktestResult {
    /// The explicit empty result returned when no conditions are enabled
    /// or the series is too short to trade.
    pub fn empty(initial_capital: f64) -> Self {
        Self {
            trades: Vec::new(),
            equity_curve: Vec::new(),
            initial_capital,
            final_equity: initial_capital,
            total_trades: 0,
            wins: 0,
            losses: 0,
            win_rate: 0.0,
            gross_profit: 0.0,
            gross_loss: 0.0,
            profit_factor: 0.0,
            sharpe_ratio: 0.0,
            max_drawdown_pct: 0.0,
            avg_win_percent: 0.0,
            avg_loss_percent: 0.0,
            best_trade_percent: 0.0,
            worst_trade_percent: 0.0,
            avg_holding_bars: 0.0,
        }
    }
}
