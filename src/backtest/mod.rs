//! Backtest engine.
//!
//! Single-threaded bar-by-bar replay over one symbol's history. At every
//! bar the full value bag is recomputed over the prefix `candles[0..=i]`,
//! so the simulation can never see the future; fills settle on closes.

pub mod stats;

use tracing::{debug, info};

use crate::config::Defaults;
use crate::evaluator::{compute_value_bag, determine_bullishness, evaluate_conditions};
use crate::models::{
    BacktestConfig, BacktestResult, BacktestTrade, Candle, EquityPoint, ExitReason, TradeMode,
    TradeSide,
};

struct OpenPosition {
    entry_index: usize,
    entry_price: f64,
    side: TradeSide,
    quantity: f64,
}

impl OpenPosition {
    fn pnl_percent(&self, price: f64) -> f64 {
        match self.side {
            TradeSide::Long => (price - self.entry_price) / self.entry_price * 100.0,
            TradeSide::Short => (self.entry_price - price) / self.entry_price * 100.0,
        }
    }

    fn unrealized(&self, price: f64) -> f64 {
        match self.side {
            TradeSide::Long => self.quantity * (price - self.entry_price),
            TradeSide::Short => self.quantity * (self.entry_price - price),
        }
    }

    fn close(&self, index: usize, price: f64, exit_reason: ExitReason) -> BacktestTrade {
        BacktestTrade {
            entry_index: self.entry_index,
            exit_index: index,
            entry_price: self.entry_price,
            exit_price: price,
            side: self.side,
            quantity: self.quantity,
            pnl: self.unrealized(price),
            pnl_percent: self.pnl_percent(price),
            exit_reason,
        }
    }
}

/// Replay the rule-set over the candle history with position simulation.
///
/// The first `min(50, 30%)` bars are skipped so indicators stabilize.
/// Position sizing commits a fixed percent of current capital; capital
/// changes only when a trade closes. An empty enabled-condition set
/// returns the explicit empty result rather than running the loop.
pub fn run_backtest(candles: &[Candle], config: &BacktestConfig) -> BacktestResult {
    let has_enabled = config.conditions.iter().any(|c| c.enabled);
    if !has_enabled || candles.len() < 2 {
        debug!(
            candles = candles.len(),
            has_enabled, "degenerate backtest input, returning empty result"
        );
        return BacktestResult::empty(config.initial_capital);
    }

    let n = candles.len();
    let warm_up = Defaults::WARMUP_CAP.min(n * 3 / 10);
    info!(bars = n, warm_up, "starting backtest");

    let mut capital = config.initial_capital;
    let mut trades: Vec<BacktestTrade> = Vec::new();
    let mut equity_curve: Vec<EquityPoint> = Vec::new();
    let mut peak = capital;
    let mut position: Option<OpenPosition> = None;

    for i in warm_up..n {
        let close = candles[i].close;

        if let Some(open) = &position {
            let pnl_percent = open.pnl_percent(close);
            let exit_reason = if pnl_percent >= config.take_profit_percent {
                Some(ExitReason::Tp)
            } else if pnl_percent <= -config.stop_loss_percent {
                Some(ExitReason::Sl)
            } else if i == n - 1 {
                Some(ExitReason::End)
            } else {
                None
            };
            if let Some(reason) = exit_reason {
                let trade = open.close(i, close, reason);
                capital += trade.pnl;
                debug!(
                    entry = trade.entry_index,
                    exit = trade.exit_index,
                    pnl_percent = trade.pnl_percent,
                    reason = ?trade.exit_reason,
                    "position closed"
                );
                trades.push(trade);
                position = None;
            }
        } else if i < n - 1 && close > f64::EPSILON {
            let window = &candles[..=i];
            let bag = compute_value_bag(window, &config.conditions);
            let evaluation = evaluate_conditions(&config.conditions, &bag, window);
            if evaluation.matched {
                let side = match config.mode {
                    TradeMode::Long => TradeSide::Long,
                    TradeMode::Short => TradeSide::Short,
                    TradeMode::Auto => {
                        if determine_bullishness(&bag) {
                            TradeSide::Long
                        } else {
                            TradeSide::Short
                        }
                    }
                };
                let quantity = capital * config.position_size_percent / 100.0 / close;
                debug!(index = i, price = close, side = ?side, "position opened");
                position = Some(OpenPosition {
                    entry_index: i,
                    entry_price: close,
                    side,
                    quantity,
                });
            }
        }

        let unrealized = position.as_ref().map_or(0.0, |p| p.unrealized(close));
        let equity = capital + unrealized;
        peak = peak.max(equity);
        let drawdown_pct = if peak > f64::EPSILON {
            (peak - equity) / peak * 100.0
        } else {
            0.0
        };
        equity_curve.push(EquityPoint {
            index: i,
            equity,
            drawdown_pct,
        });
    }

    let result = stats::compile(trades, equity_curve, config.initial_capital, capital);
    info!(
        trades = result.total_trades,
        final_equity = result.final_equity,
        "backtest complete"
    );
    result
}
