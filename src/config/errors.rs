//! Configuration errors

use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Line is not `key=value` or `key: value`
    #[error("Line {line}: expected `key=value`, found {content:?}")]
    Syntax { line: usize, content: String },

    /// Required key missing or mistyped
    #[error("Invalid database config: {0}")]
    Invalid(String),
}
