//! Aggregate backtest statistics.

use crate::indicators::math;
use crate::models::{BacktestResult, BacktestTrade, EquityPoint};

/// Annualization factor for the Sharpe-like ratio (daily bars).
const ANNUALIZATION: f64 = 252.0;

/// Fold a trade list and equity curve into the final result block.
///
/// `final_capital` must already include every realized PnL, so
/// `final_equity == initial_capital + sum(trade.pnl)` holds exactly.
pub fn compile(
    trades: Vec<BacktestTrade>,
    equity_curve: Vec<EquityPoint>,
    initial_capital: f64,
    final_capital: f64,
) -> BacktestResult {
    let total_trades = trades.len();
    let wins = trades.iter().filter(|t| t.pnl > 0.0).count();
    let losses = trades.iter().filter(|t| t.pnl < 0.0).count();
    let win_rate = if total_trades > 0 {
        wins as f64 / total_trades as f64 * 100.0
    } else {
        0.0
    };

    let gross_profit: f64 = trades.iter().filter(|t| t.pnl > 0.0).map(|t| t.pnl).sum();
    let gross_loss: f64 = trades
        .iter()
        .filter(|t| t.pnl < 0.0)
        .map(|t| t.pnl.abs())
        .sum();
    let profit_factor = if total_trades == 0 {
        0.0
    } else if gross_loss == 0.0 {
        if gross_profit > 0.0 {
            f64::INFINITY
        } else {
            0.0
        }
    } else {
        gross_profit / gross_loss
    };

    let returns: Vec<f64> = trades.iter().map(|t| t.pnl_percent).collect();
    let sharpe_ratio = if returns.len() >= 2 {
        let std_dev = math::population_std_dev(&returns);
        if std_dev > f64::EPSILON {
            math::mean(&returns) / std_dev * ANNUALIZATION.sqrt()
        } else {
            0.0
        }
    } else {
        0.0
    };

    let max_drawdown_pct = equity_curve
        .iter()
        .map(|p| p.drawdown_pct)
        .fold(0.0, f64::max);

    let win_percents: Vec<f64> = trades
        .iter()
        .filter(|t| t.pnl > 0.0)
        .map(|t| t.pnl_percent)
        .collect();
    let loss_percents: Vec<f64> = trades
        .iter()
        .filter(|t| t.pnl < 0.0)
        .map(|t| t.pnl_percent)
        .collect();
    let avg_win_percent = math::mean(&win_percents);
    let avg_loss_percent = math::mean(&loss_percents);

    let best_trade_percent = returns.iter().copied().reduce(f64::max).unwrap_or(0.0);
    let worst_trade_percent = returns.iter().copied().reduce(f64::min).unwrap_or(0.0);

    let holding_bars: Vec<f64> = trades
        .iter()
        .map(|t| (t.exit_index - t.entry_index) as f64)
        .collect();
    let avg_holding_bars = math::mean(&holding_bars);

    BacktestResult {
        trades,
        equity_curve,
        initial_capital,
        final_equity: final_capital,
        total_trades,
        wins,
        losses,
        win_rate,
        gross_profit,
        gross_loss,
        profit_factor,
        sharpe_ratio,
        max_drawdown_pct,
        avg_win_percent,
        avg_loss_percent,
        best_trade_percent,
        worst_trade_percent,
        avg_holding_bars,
    }
}
