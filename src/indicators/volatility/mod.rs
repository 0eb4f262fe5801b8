//! Volatility indicators.

pub mod atr;
pub mod bollinger;

pub use atr::{calculate_atr, calculate_atr_default};
pub use bollinger::{calculate_bollinger, calculate_bollinger_default, BollingerSeries};
