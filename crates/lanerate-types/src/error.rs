//! Error types for lane-rate

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Failure to parse one of the closed vocabularies (trailer type, load size)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value:?}")]
pub struct ParseKindError {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("CSV loader error: {0}")]
    CsvLoader(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid value: {0}")]
    InvalidValue(#[from] ParseKindError),

    /// Mean requested over an empty record set. Callers branch on emptiness
    /// first, so reaching this is a contract violation.
    #[error("Reference rate is undefined for an empty record set")]
    UndefinedAggregate,

    #[error("{0}")]
    Service(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
