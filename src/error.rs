/// Error types for config lookups and the command-line host
use thiserror::Error;

/// Why a row's storage config could not be found
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The row carries no storage config identifier
    #[error("row has no storage config UUID")]
    NoIdentifier,

    /// The identifier is not in the supplied config list
    #[error("storage config not found: {0}")]
    NotFound(String),
}

/// Errors surfaced by the `cellfmt` binary
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading an input file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An input file is not the expected JSON shape
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured display offset cannot be parsed
    #[error("Invalid UTC offset: {0}")]
    InvalidOffset(String),
}
