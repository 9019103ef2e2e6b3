//! Configuration System
//!
//! Layered configuration for the tree builder and logging. Sources are merged
//! in increasing precedence: built-in defaults, the global config file, the
//! workspace config file and `OMEXTREE__`-prefixed environment variables.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::tree::classify::DEFAULT_MODEL_MARKER;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Tree builder settings
    #[serde(default)]
    pub builder: BuilderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tree builder settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Format substring that marks an entry as a model document
    #[serde(default = "default_model_marker")]
    pub model_marker: String,
}

fn default_model_marker() -> String {
    DEFAULT_MODEL_MARKER.to_string()
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            model_marker: default_model_marker(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Builder(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Builder(msg) => write!(f, "Builder: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl BuilderConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.model_marker.trim().is_empty() {
            return Err("Model marker cannot be empty".to_string());
        }
        Ok(())
    }
}

impl TreeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.builder.validate() {
            errors.push(ValidationError::Builder(e));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "Invalid log format: {}",
                self.logging.format
            )));
        }
        if let Err(e) = crate::logging::parse_output(&self.logging.output) {
            errors.push(ValidationError::Logging(e.to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, folding all problems into a single error
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self).map_err(|e| ApiError::SerializationError(e.to_string()))
    }
}
