//! CLI route: single route table and run context. Dispatches to the tree builder and presentation.

use crate::cli::help::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_stats_json, format_stats_text, format_tree_json, format_tree_text,
};
use crate::config::{ConfigLoader, TreeConfig};
use crate::error::ApiError;
use crate::manifest::Manifest;
use crate::tree::{Tree, TreeBuilder};
use crate::views::TreeStats;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info_span};

/// Runtime context for CLI execution: loaded configuration and the builder it configures.
pub struct RunContext {
    config: TreeConfig,
    builder: TreeBuilder,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: TreeConfig) -> Self {
        let builder = TreeBuilder::from_config(&config.builder);
        Self { config, builder }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let span = info_span!("command", name = command_name(command));
        let _guard = span.enter();

        match command {
            Commands::Tree {
                manifest,
                archive_root,
                format,
            } => {
                let tree = self.build_from(manifest)?;
                let nodes = if *archive_root {
                    tree.archive_root()
                } else {
                    tree.nodes()
                };
                match format.as_str() {
                    "json" => format_tree_json(nodes),
                    "text" => Ok(format_tree_text(nodes, self.use_color())),
                    other => Err(unknown_format(other)),
                }
            }
            Commands::Stats { manifest, format } => {
                let stats = TreeStats::collect(&self.build_from(manifest)?);
                match format.as_str() {
                    "json" => format_stats_json(&stats),
                    "text" => Ok(format_stats_text(&stats)),
                    other => Err(unknown_format(other)),
                }
            }
            Commands::Config => self.config.to_toml(),
        }
    }

    fn use_color(&self) -> bool {
        self.config.logging.color && std::io::stdout().is_terminal()
    }

    /// Read, decode and build the manifest at `path`
    pub fn build_from(&self, path: &Path) -> Result<Tree, ApiError> {
        let manifest = read_manifest(path)?;
        debug!(entries = manifest.len(), "Manifest decoded");
        Ok(self.builder.build(manifest.entries())?)
    }
}

/// Read a manifest from a file, or stdin when the path is "-"
pub fn read_manifest(path: &Path) -> Result<Manifest, ApiError> {
    let input = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(Manifest::from_json_str(&input)?)
}

fn unknown_format(format: &str) -> ApiError {
    ApiError::ConfigError(format!(
        "Unknown output format: {} (must be 'text' or 'json')",
        format
    ))
}
