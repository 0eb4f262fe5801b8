//! OHLCV candle model

use serde::{Deserialize, Serialize};

/// One fixed-interval OHLCV bar.
///
/// Sequences are ordered oldest to newest with no gaps; every computation
/// in the engine takes a `&[Candle]` window as its sole input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    pub open_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub close_time: i64,
    #[serde(default)]
    pub quote_volume: f64,
    #[serde(default)]
    pub trades: u64,
}

impl Candle {
    pub fn new(open: f64, high: f64, low: f64, close: f64, volume: f64, open_time: i64) -> Self {
        Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
            close_time: open_time,
            quote_volume: 0.0,
            trades: 0,
        }
    }

    pub fn with_quote_volume(mut self, quote_volume: f64) -> Self {
        self.quote_volume = quote_volume;
        self
    }

    pub fn with_trades(mut self, trades: u64) -> Self {
        self.trades = trades;
        self
    }

    /// Absolute distance between open and close.
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Full high-low extent of the bar.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    pub fn upper_wick(&self) -> f64 {
        self.high - self.open.max(self.close)
    }

    pub fn lower_wick(&self) -> f64 {
        self.open.min(self.close) - self.low
    }

    /// Body as a fraction of range. Zero-range bars report 0.
    pub fn body_ratio(&self) -> f64 {
        let range = self.range();
        if range > f64::EPSILON {
            self.body() / range
        } else {
            0.0
        }
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// (high + low + close) / 3, the VWAP/CCI input price.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}
