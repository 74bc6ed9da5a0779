use thiserror::Error;

/// Failures of the loader and report, the lookup core has none
#[derive(Error, Debug)]
pub enum Error {
    /// An input file could not be read
    #[error("Failed to read input data, error: {0}")]
    Io(#[from] std::io::Error),

    /// An input file is not valid JSON for the expected records
    #[error("Failed to parse input data, error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A setting is missing or invalid
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

/// Result alias defaulting to [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;
