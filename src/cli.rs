//! CLI domain: parse, route, help, output, and presentation only.
//! The tree itself is built by the library; handlers stay thin.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_stats_json, format_stats_text, format_tree_json, format_tree_text,
};
pub use route::RunContext;
