//! Error types for goserde translation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Error type for translation operations
///
/// Only conditions that abort a whole file live here. Unsupported type
/// expressions, malformed tags and bad array lengths are resolved locally
/// with a placeholder or a default.
#[derive(Error, Debug)]
pub enum TranslateError {
    /// The input file could not be read
    #[error("unable to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid Go
    #[error("unable to parse {}:{line}:{column}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A type expression has no translation and strict mode is on
    #[error("unsupported type `{kind}` in field {decl}.{field}")]
    UnsupportedType {
        decl: String,
        field: String,
        kind: String,
    },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl TranslateError {
    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            TranslateError::Io { .. } => 1,
            TranslateError::Parse { .. } => 2,
            TranslateError::Config(_) => 3,
            TranslateError::UnsupportedType { .. } => 4,
            TranslateError::Serialization(_) => 5,
        }
    }
}

impl From<serde_json::Error> for TranslateError {
    fn from(err: serde_json::Error) -> Self {
        TranslateError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for TranslateError {
    fn from(err: toml::de::Error) -> Self {
        TranslateError::Config(err.to_string())
    }
}
