//! Merge rules: defaults, override order, conflict handling.

use crate::tree::classify::DEFAULT_MODEL_MARKER;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Prefix for environment overrides (`OMEXTREE__BUILDER__MODEL_MARKER`)
pub const ENV_PREFIX: &str = "OMEXTREE";

/// Separator between the prefix and nested keys
pub const ENV_SEPARATOR: &str = "__";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder().set_default("builder.model_marker", DEFAULT_MODEL_MARKER)
}

/// Environment source; applied last so it overrides every file.
pub fn environment_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
}
