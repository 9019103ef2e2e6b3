//! Workspace config file source: <workspace>/omextree.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// Name of the per-workspace config file
pub const WORKSPACE_CONFIG_FILE: &str = "omextree.toml";

/// Add workspace config file to builder.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    if config_path.exists() {
        return Ok(builder.add_source(File::from(config_path.as_path()).required(false)));
    }
    Ok(builder)
}
