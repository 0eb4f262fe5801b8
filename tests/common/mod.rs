//! Shared synthetic candle builders for the test suites.
#![allow(dead_code)]

use quantrix::models::Candle;

/// One candle with explicit OHLC and a default volume.
pub fn candle(open: f64, high: f64, low: f64, close: f64) -> Candle {
    Candle::new(open, high, low, close, 1_000.0, 0)
}

/// Flat series: every bar opens and closes at `price` with zero range.
pub fn flat_candles(count: usize, price: f64) -> Vec<Candle> {
    (0..count)
        .map(|i| Candle::new(price, price, price, price, 1_000.0, i as i64 * 60_000))
        .collect()
}

/// Strictly rising closes 100, 101, 102, ... with bullish bodies.
pub fn rising_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 100.0 + i as f64;
            Candle::new(
                close - 0.5,
                close + 0.2,
                close - 0.7,
                close,
                1_000.0 + i as f64 * 10.0,
                i as i64 * 60_000,
            )
        })
        .collect()
}

/// Strictly falling closes with bearish bodies.
pub fn falling_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 200.0 - i as f64;
            Candle::new(
                close + 0.5,
                close + 0.7,
                close - 0.2,
                close,
                1_000.0 + i as f64 * 10.0,
                i as i64 * 60_000,
            )
        })
        .collect()
}

/// Deterministic oscillating series with enough texture to exercise every
/// indicator window.
pub fn wavy_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let base = 100.0 + (t * 0.45).sin() * 5.0 + t * 0.03;
            let open = base - (t * 0.45).cos() * 0.6;
            let close = base + (t * 0.45).cos() * 0.6;
            let high = open.max(close) + 0.8;
            let low = open.min(close) - 0.8;
            let volume = 900.0 + (t * 0.8).cos().abs() * 300.0;
            Candle::new(open, high, low, close, volume, i as i64 * 60_000)
        })
        .collect()
}

/// Turn a close series into candles with one-unit wicks; opens track the
/// previous close so bodies follow the deltas.
pub fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + 1.0;
            let low = open.min(close) - 1.0;
            Candle::new(open, high, low, close, 1_000.0, i as i64 * 60_000)
        })
        .collect()
}
