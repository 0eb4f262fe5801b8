//! Indicator library.
//!
//! Every indicator is a pure function `f(candles, params) -> Vec<f64>`
//! (or a small struct of parallel series), one value per input candle,
//! indexed identically to the input. The value at index `i` depends only
//! on candles `0..=i`, and short inputs degrade to documented fallback
//! values instead of erroring; NaN never enters the value bag.

pub mod crossover;
pub mod math;

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use crossover::{detect_crossover, CrossSignal};
