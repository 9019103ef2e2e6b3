//! CLI parse: clap types for omextree. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// omextree - build file-explorer trees from archive manifests
#[derive(Parser)]
#[command(name = "omextree")]
#[command(about = "Build file-explorer trees from COMBINE archive manifests")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace directory searched for omextree.toml
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build and print the tree for a manifest
    Tree {
        /// Manifest JSON file ("-" reads stdin)
        manifest: PathBuf,
        /// Show only the contents of the archive root (the "." entry)
        #[arg(long)]
        archive_root: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Summarize node counts for a manifest
    Stats {
        /// Manifest JSON file ("-" reads stdin)
        manifest: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration
    Config,
}
