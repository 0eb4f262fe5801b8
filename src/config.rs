//! Engine configuration: evaluation defaults and environment detection.

/// Default parameters used whenever a condition does not override them.
pub struct Defaults;

impl Defaults {
    pub const RSI_PERIOD: usize = 14;
    pub const EMA_PERIODS: [usize; 3] = [20, 50, 200];
    pub const SMA_PERIOD: usize = 20;
    pub const MACD_FAST: usize = 12;
    pub const MACD_SLOW: usize = 26;
    pub const MACD_SIGNAL: usize = 9;
    pub const BB_PERIOD: usize = 20;
    pub const BB_STD_DEV: f64 = 2.0;
    pub const STOCH_PERIOD: usize = 14;
    pub const STOCH_D_PERIOD: usize = 3;
    pub const ADX_PERIOD: usize = 14;
    pub const CCI_PERIOD: usize = 20;
    pub const ATR_PERIOD: usize = 14;
    pub const MFI_PERIOD: usize = 14;
    pub const WILLIAMS_R_PERIOD: usize = 14;
    pub const ROC_PERIOD: usize = 12;
    pub const PSAR_STEP: f64 = 0.02;
    pub const PSAR_MAX_STEP: f64 = 0.2;
    /// Backtest warm-up is `min(WARMUP_CAP, 30% of the series length)`.
    pub const WARMUP_CAP: usize = 50;
}

/// Deployment environment, read from `QUANTRIX_ENV`.
///
/// Anything other than `production`/`prod` counts as sandbox.
pub fn get_environment() -> String {
    std::env::var("QUANTRIX_ENV").unwrap_or_else(|_| "sandbox".to_string())
}
