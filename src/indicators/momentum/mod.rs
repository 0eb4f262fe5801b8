//! Momentum oscillators.

pub mod cci;
pub mod divergence;
pub mod mfi;
pub mod roc;
pub mod rsi;
pub mod stochastic;
pub mod williams_r;

pub use cci::{calculate_cci, calculate_cci_default};
pub use divergence::{detect_rsi_divergence, DivergenceFlags};
pub use mfi::{calculate_mfi, calculate_mfi_default};
pub use roc::{calculate_roc, calculate_roc_default};
pub use rsi::{calculate_rsi, calculate_rsi_default};
pub use stochastic::{calculate_stochastic, calculate_stochastic_default, StochasticSeries};
pub use williams_r::{calculate_williams_r, calculate_williams_r_default};
