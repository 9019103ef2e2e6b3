//! Config loading facade: assembles sources in precedence order.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::TreeConfig;
use crate::error::ApiError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Loads [`TreeConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `omextree.toml`, `OMEXTREE__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<TreeConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = builder.add_source(merge_policy::environment_source());

        let config: TreeConfig = builder.build()?.try_deserialize()?;
        config.ensure_valid()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from an explicit file, skipping global and workspace files
    pub fn load_from_file(path: &Path) -> Result<TreeConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let config: TreeConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .add_source(merge_policy::environment_source())
            .build()?
            .try_deserialize()?;
        config.ensure_valid()?;
        debug!(config_path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }
}
