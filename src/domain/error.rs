//! Domain error types.

use crate::domain::series::SeriesError;

/// Top-level error type for stockcast.
#[derive(Debug, thiserror::Error)]
pub enum StockcastError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("unknown symbol: {symbol}")]
    UnknownSymbol { symbol: String },

    #[error("failed to load history for {symbol}: {reason}")]
    HistoryLoad { symbol: String, reason: String },

    #[error("invalid price for {symbol}: {price} (must be positive and finite)")]
    InvalidPrice { symbol: String, price: f64 },

    #[error("invalid history for {symbol}: {source}")]
    InvalidHistory {
        symbol: String,
        source: SeriesError,
    },

    #[error("invalid horizon: {days} days (must be at least 1)")]
    InvalidHorizon { days: u32 },

    #[error("invalid confidence {value} for {days}-day horizon (must be in (0, 1])")]
    InvalidConfidence { days: u32, value: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&StockcastError> for std::process::ExitCode {
    fn from(err: &StockcastError) -> Self {
        let code: u8 = match err {
            StockcastError::Io(_) => 1,
            StockcastError::ConfigParse { .. }
            | StockcastError::ConfigMissing { .. }
            | StockcastError::ConfigInvalid { .. } => 2,
            StockcastError::UnknownSymbol { .. } | StockcastError::HistoryLoad { .. } => 3,
            StockcastError::InvalidPrice { .. }
            | StockcastError::InvalidHistory { .. }
            | StockcastError::InvalidHorizon { .. }
            | StockcastError::InvalidConfidence { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
