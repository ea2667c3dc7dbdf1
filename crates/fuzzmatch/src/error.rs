//! Error types for the fuzzmatch command-line tool.

use thiserror::Error;

/// Error type for CLI operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A value that could not be parsed
    #[error("invalid value for {name}: {message}")]
    Parse { name: String, message: String },
}

impl Error {
    pub(crate) fn parse(name: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            name: name.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias using the CLI Error.
pub type Result<T> = std::result::Result<T, Error>;
