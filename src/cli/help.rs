//! CLI help and command-name contract for logging spans.

use crate::cli::parse::Commands;

/// Command name string used in log spans (e.g. "tree", "stats").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Tree { .. } => "tree",
        Commands::Stats { .. } => "stats",
        Commands::Config => "config",
    }
}
