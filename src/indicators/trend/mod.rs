//! Trend-following indicators.

pub mod adx;
pub mod ema;
pub mod macd;
pub mod psar;
pub mod sma;

pub use adx::{calculate_adx, calculate_adx_default, AdxSeries};
pub use ema::{calculate_ema, calculate_emas};
pub use macd::{calculate_macd, calculate_macd_default, MacdSeries};
pub use psar::{calculate_psar, calculate_psar_default};
pub use sma::calculate_sma;
