//! Tests for the backtest engine.

mod common;

use common::{candles_from_closes, flat_candles, wavy_candles};
use quantrix::models::{
    BacktestConfig, CompareOp, ConditionMode, ExitReason, FeatureCategory, ScanCondition,
    TradeMode, TradeSide,
};
use quantrix::run_backtest;

/// A condition that matches on every bar once indicators exist.
fn always_on() -> ScanCondition {
    ScanCondition::new(
        "always",
        "roc",
        FeatureCategory::Indicator,
        ConditionMode::Comparison,
    )
    .with_comparison(CompareOp::Gt, -1_000.0)
}

fn config(conditions: Vec<ScanCondition>, mode: TradeMode) -> BacktestConfig {
    BacktestConfig {
        conditions,
        initial_capital: 10_000.0,
        position_size_percent: 10.0,
        take_profit_percent: 3.0,
        stop_loss_percent: 2.0,
        mode,
    }
}

#[test]
fn empty_condition_set_returns_empty_result() {
    let candles = wavy_candles(100);
    let result = run_backtest(&candles, &config(vec![], TradeMode::Long));
    assert_eq!(result.total_trades, 0);
    assert_eq!(result.final_equity, 10_000.0);
    assert!(result.trades.is_empty());
    assert!(result.equity_curve.is_empty());

    let disabled = vec![always_on().disabled()];
    let result = run_backtest(&candles, &config(disabled, TradeMode::Long));
    assert_eq!(result.total_trades, 0);
}

#[test]
fn take_profit_closes_at_threshold() {
    // 60 bars: warm-up is min(50, 18) = 18, entry prints at bar 18 on a
    // flat 100, then the next close jumps exactly +3%.
    let mut closes = vec![100.0; 19];
    closes.push(103.0);
    closes.extend(vec![103.0; 40]);
    let candles = candles_from_closes(&closes);

    let result = run_backtest(&candles, &config(vec![always_on()], TradeMode::Long));
    assert!(!result.trades.is_empty());
    let trade = &result.trades[0];
    assert_eq!(trade.entry_index, 18);
    assert_eq!(trade.exit_index, 19);
    assert_eq!(trade.side, TradeSide::Long);
    assert_eq!(trade.exit_reason, ExitReason::Tp);
    assert!((trade.pnl_percent - 3.0).abs() < 1e-9);
}

#[test]
fn stop_loss_closes_at_threshold() {
    let mut closes = vec![100.0; 19];
    closes.push(98.0);
    closes.extend(vec![98.0; 40]);
    let candles = candles_from_closes(&closes);

    let result = run_backtest(&candles, &config(vec![always_on()], TradeMode::Long));
    let trade = &result.trades[0];
    assert_eq!(trade.exit_reason, ExitReason::Sl);
    assert!((trade.pnl_percent + 2.0).abs() < 1e-9);
    assert!(trade.pnl < 0.0);
}

#[test]
fn open_position_closes_at_end_of_series() {
    // Price never moves enough to hit either threshold.
    let candles = flat_candles(60, 100.0);
    let result = run_backtest(&candles, &config(vec![always_on()], TradeMode::Long));
    assert_eq!(result.total_trades, 1);
    let trade = &result.trades[0];
    assert_eq!(trade.exit_reason, ExitReason::End);
    assert_eq!(trade.exit_index, 59);
    assert_eq!(trade.pnl, 0.0);
}

#[test]
fn warm_up_skips_early_bars() {
    let candles = wavy_candles(200);
    let result = run_backtest(&candles, &config(vec![always_on()], TradeMode::Long));
    // min(50, 30% of 200) = 50
    assert!(result.trades.iter().all(|t| t.entry_index >= 50));
    assert_eq!(result.equity_curve.first().map(|p| p.index), Some(50));
    assert_eq!(result.equity_curve.len(), 150);
}

#[test]
fn capital_conservation_holds_exactly() {
    let candles = wavy_candles(300);
    let result = run_backtest(&candles, &config(vec![always_on()], TradeMode::Auto));
    assert!(result.total_trades > 0);
    let pnl_sum: f64 = result.trades.iter().map(|t| t.pnl).sum();
    assert_eq!(result.final_equity, result.initial_capital + pnl_sum);
    // The curve ends on realized capital once the last position closes.
    assert_eq!(
        result.equity_curve.last().map(|p| p.equity),
        Some(result.final_equity)
    );
}

#[test]
fn capital_changes_only_at_trade_close() {
    let mut closes = vec![100.0; 19];
    closes.push(103.0);
    closes.extend(vec![103.0; 20]);
    let candles = candles_from_closes(&closes);
    let result = run_backtest(&candles, &config(vec![always_on()], TradeMode::Long));

    // While the first position is open (bar 18), equity still reads the
    // initial capital because unrealized PnL is zero on the entry bar.
    let entry_point = result
        .equity_curve
        .iter()
        .find(|p| p.index == 18)
        .expect("entry bar in curve");
    assert_eq!(entry_point.equity, 10_000.0);
}

#[test]
fn short_side_profits_from_decline() {
    let mut closes = vec![100.0; 19];
    closes.push(96.5);
    closes.extend(vec![96.5; 20]);
    let candles = candles_from_closes(&closes);
    let result = run_backtest(&candles, &config(vec![always_on()], TradeMode::Short));
    let trade = &result.trades[0];
    assert_eq!(trade.side, TradeSide::Short);
    assert_eq!(trade.exit_reason, ExitReason::Tp);
    assert!((trade.pnl_percent - 3.5).abs() < 1e-9);
    assert!(trade.pnl > 0.0);
}

#[test]
fn position_sizing_commits_fixed_percent() {
    let mut closes = vec![100.0; 19];
    closes.push(103.0);
    closes.extend(vec![103.0; 20]);
    let candles = candles_from_closes(&closes);
    let result = run_backtest(&candles, &config(vec![always_on()], TradeMode::Long));
    let trade = &result.trades[0];
    // 10% of 10,000 at an entry of 100.
    assert!((trade.quantity - 10.0).abs() < 1e-9);
    assert!((trade.pnl - 30.0).abs() < 1e-9);
}

#[test]
fn statistics_block_is_consistent() {
    let candles = wavy_candles(300);
    let result = run_backtest(&candles, &config(vec![always_on()], TradeMode::Auto));

    assert_eq!(result.wins + result.losses, result
        .trades
        .iter()
        .filter(|t| t.pnl != 0.0)
        .count());
    assert!(result.win_rate >= 0.0 && result.win_rate <= 100.0);
    assert!(result.max_drawdown_pct >= 0.0);
    assert!(result.gross_profit >= 0.0);
    assert!(result.gross_loss >= 0.0);
    if result.losses == 0 && result.gross_profit > 0.0 {
        assert!(result.profit_factor.is_infinite());
    } else if result.total_trades > 0 && result.gross_loss > 0.0 {
        assert!((result.profit_factor - result.gross_profit / result.gross_loss).abs() < 1e-9);
    }
    assert!(result
        .trades
        .iter()
        .all(|t| t.exit_index >= t.entry_index));
}

#[test]
fn degenerate_two_bar_series_still_wellformed() {
    let candles = flat_candles(2, 100.0);
    let result = run_backtest(&candles, &config(vec![always_on()], TradeMode::Long));
    // Warm-up is 0; entry on bar 0 is allowed, close at the final bar.
    assert!(result.final_equity.is_finite());
    assert_eq!(
        result.final_equity,
        result.initial_capital + result.trades.iter().map(|t| t.pnl).sum::<f64>()
    );
}
