//! Error types for manifest tree construction.

use thiserror::Error;

/// Manifest-related errors
///
/// Every variant is terminal: a manifest that produces one of these never
/// yields a partial tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    #[error("Manifest entry {index} has no usable location")]
    MissingLocation { index: usize },

    #[error("Manifest entry {index} has no usable format")]
    MissingFormat { index: usize },

    #[error("Manifest entry {index} has an empty location")]
    EmptyLocation { index: usize },

    #[error("Manifest entry {index} has an empty path segment in {location:?}")]
    EmptySegment { index: usize, location: String },

    #[error("Invalid manifest payload: {0}")]
    InvalidPayload(String),
}

impl ManifestError {
    /// Index of the offending entry, if the error is tied to one
    pub fn entry_index(&self) -> Option<usize> {
        match self {
            ManifestError::MissingLocation { index }
            | ManifestError::MissingFormat { index }
            | ManifestError::EmptyLocation { index }
            | ManifestError::EmptySegment { index, .. } => Some(*index),
            ManifestError::InvalidPayload(_) => None,
        }
    }
}

/// Errors surfaced by the configuration, logging and CLI layers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Manifest error: {0}")]
    ManifestError(#[from] ManifestError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::SerializationError(err.to_string())
    }
}
