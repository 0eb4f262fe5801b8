//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::math;
use crate::models::Candle;

/// Parallel MACD line, signal line and histogram series.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd_line: Vec<f64>,
    pub signal_line: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Calculate MACD.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of MACD
/// Histogram = MACD - Signal
///
/// All three series are flat 0 before index `slow - 1` (and everywhere
/// when the input is shorter than `slow`).
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdSeries {
    let n = candles.len();
    if n < slow_period || fast_period >= slow_period {
        return MacdSeries {
            macd_line: vec![0.0; n],
            signal_line: vec![0.0; n],
            histogram: vec![0.0; n],
        };
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let fast_ema = math::ema_series(&closes, fast_period);
    let slow_ema = math::ema_series(&closes, slow_period);

    let mut macd_line = vec![0.0; n];
    for i in slow_period - 1..n {
        macd_line[i] = fast_ema[i] - slow_ema[i];
    }

    let signal_line = math::ema_series(&macd_line, signal_period);
    let histogram = macd_line
        .iter()
        .zip(signal_line.iter())
        .map(|(line, signal)| line - signal)
        .collect();

    MacdSeries {
        macd_line,
        signal_line,
        histogram,
    }
}

/// Calculate MACD with default periods (12, 26, 9).
pub fn calculate_macd_default(candles: &[Candle]) -> MacdSeries {
    calculate_macd(candles, 12, 26, 9)
}
