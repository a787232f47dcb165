//! Error types for sqlbuf

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sqlbuf operations
pub type SqlBufResult<T> = Result<T, SqlBufError>;

/// Errors raised while resolving table names.
///
/// Appending to a [`SqlBuf`](crate::SqlBuf) never fails; only the table-name
/// configuration layer can produce these.
#[derive(Debug, Error)]
pub enum SqlBufError {
    /// Table name is not a safe identifier
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration document could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SqlBufError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<toml::de::Error> for SqlBufError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
