use thiserror::Error;

/// Validation and contract errors exposed by `stockfolio-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker must start with an ASCII letter: '{ch}'")]
    TickerInvalidStart { ch: char },
    #[error("ticker contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },

    #[error("date must be ISO-8601 (YYYY-MM-DD): '{value}'")]
    InvalidDate { value: String },
    #[error("observation dates for '{ticker}' must be strictly increasing")]
    DatesNotIncreasing { ticker: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be positive")]
    NonPositiveValue { field: &'static str },

    #[error("malformed input row {row}: {reason}")]
    DataFormat { row: usize, reason: String },
    #[error("input is missing required column '{name}'")]
    MissingColumn { name: &'static str },

    #[error("'{ticker}' has {observations} observation(s), at least {required} required")]
    InsufficientData {
        ticker: String,
        observations: usize,
        required: usize,
    },

    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("portfolio contains no stocks")]
    EmptyPortfolio,
    #[error("duplicate ticker '{ticker}' in portfolio")]
    DuplicateTicker { ticker: String },
    #[error("weight assigned to unknown ticker '{ticker}'")]
    UnknownWeightTicker { ticker: String },
    #[error("weight {value} for '{ticker}' is outside [0, 1]")]
    WeightOutOfRange { ticker: String, value: f64 },
    #[error("weights sum to {sum}, expected 1 within tolerance")]
    WeightSumMismatch { sum: f64 },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
