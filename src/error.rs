//! Engine error taxonomy.
//!
//! Short candle windows are never errors; indicators and detectors fall
//! back to documented neutral values instead. Errors exist only at the
//! seams: catalog drift, data-source failures and malformed configs.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error("unknown feature id: {0}")]
    UnknownFeature(String),

    #[error("catalog entry '{id}' has no computed value (expected bag key '{key}')")]
    MissingDetector { id: String, key: String },

    #[error("data source error for {symbol} {interval}: {message}")]
    DataSource {
        symbol: String,
        interval: String,
        message: String,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
