//! CLI presentation: text and json formatters per command family.

mod stats;
mod tree;

pub use stats::{format_stats_json, format_stats_text};
pub use tree::{format_tree_json, format_tree_text};
