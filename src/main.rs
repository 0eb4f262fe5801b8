use quantrix::error::EngineError;
use quantrix::models::{
    BacktestConfig, Candle, CompareOp, ConditionMode, FeatureCategory, PricePosition,
    ScanCondition, ScanRequest, ScanResult, TradeMode,
};
use quantrix::scanner::CandleSource;
use quantrix::{logging, run_backtest, Scanner};

/// Deterministic in-memory candle source for the demo run.
struct DemoSource;

impl CandleSource for DemoSource {
    fn fetch_candles(
        &self,
        symbol: &str,
        _interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, EngineError> {
        // Per-symbol phase offset so the universe does not move in lockstep.
        let phase = symbol.bytes().map(|b| b as f64).sum::<f64>() % 7.0;
        Ok(demo_series(limit, 100.0 + phase * 10.0, phase))
    }
}

fn demo_series(count: usize, base_price: f64, phase: f64) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let drift = t * 0.08;
            let wave = ((t + phase) * 0.35).sin() * 2.5;
            let open = base_price + drift + wave;
            let close = base_price + drift + (((t + phase) * 0.35) + 0.35).sin() * 2.5;
            let high = open.max(close) + 0.8;
            let low = open.min(close) - 0.8;
            let volume = 1_000.0 + ((t * 0.9).cos().abs() * 400.0);
            Candle::new(open, high, low, close, volume, i as i64 * 3_600_000)
        })
        .collect()
}

fn demo_conditions() -> Vec<ScanCondition> {
    vec![
        ScanCondition::new("rsi-zone", "rsi", FeatureCategory::Indicator, ConditionMode::Range)
            .with_range(0.0, 75.0),
        ScanCondition::new("above-ema", "ema", FeatureCategory::Indicator, ConditionMode::Value)
            .with_ema_config(20, PricePosition::Above),
    ]
}

fn main() -> Result<(), EngineError> {
    logging::init_logging();

    let request = ScanRequest {
        symbols: vec![
            "BTCUSDT".to_string(),
            "ETHUSDT".to_string(),
            "SOLUSDT".to_string(),
        ],
        timeframes: vec!["1h".to_string()],
        conditions: demo_conditions(),
        candle_limit: 120,
    };

    let scanner = Scanner::new(DemoSource)?;
    let results = scanner.scan(&request);
    println!("Scan matches: {}", results.len());
    for result in &results {
        print_result(result);
        println!();
    }

    let candles = demo_series(240, 100.0, 0.0);
    let config = BacktestConfig {
        conditions: vec![ScanCondition::new(
            "roc-up",
            "roc",
            FeatureCategory::Indicator,
            ConditionMode::Comparison,
        )
        .with_comparison(CompareOp::Gt, 0.0)],
        initial_capital: 10_000.0,
        position_size_percent: 10.0,
        take_profit_percent: 3.0,
        stop_loss_percent: 2.0,
        mode: TradeMode::Auto,
    };
    let report = run_backtest(&candles, &config);
    println!("Backtest over {} bars:", candles.len());
    println!("  Trades: {}", report.total_trades);
    println!("  Win rate: {:.1}%", report.win_rate);
    println!("  Profit factor: {:.2}", report.profit_factor);
    println!("  Final equity: ${:.2}", report.final_equity);
    println!("  Max drawdown: {:.2}%", report.max_drawdown_pct);

    Ok(())
}

fn print_result(result: &ScanResult) {
    println!("  Symbol: {}", result.symbol);
    println!("  Price: ${:.2}", result.price);
    println!("  Change: {:.2}%", result.change_pct);
    println!(
        "  Bias: {}",
        if result.is_bullish { "bullish" } else { "bearish" }
    );
    println!("  Reasons:");
    for (i, reason) in result.reasons.iter().enumerate() {
        println!("    {}. {}", i + 1, reason);
    }
}
