//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::ManifestError(inner) => match inner.entry_index() {
            Some(index) => format!("Error: {} (entry #{})", inner, index + 1),
            None => format!("Error: {}", inner),
        },
        other => format!("Error: {}", other),
    }
}
