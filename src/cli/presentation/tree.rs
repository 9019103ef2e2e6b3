//! Tree presentation: indented text listing and widget json.

use crate::error::ApiError;
use crate::tree::walker::Walker;
use crate::tree::{NodeVariant, TreeNode};
use crate::views::{WidgetNode, WidgetTree};
use owo_colors::OwoColorize;

const INDENT: &str = "  ";

/// Render nodes as an indented listing, one node per line.
///
/// Folders get a trailing `/`, models a `[model]` tag.
pub fn format_tree_text(nodes: &[TreeNode], color: bool) -> String {
    if nodes.is_empty() {
        return "(empty tree)".to_string();
    }

    let lines: Vec<String> = Walker::new(nodes)
        .map(|entry| {
            let indent = INDENT.repeat(entry.depth);
            let label = entry.node.label.as_str();
            let rendered = match (entry.node.variant, color) {
                (NodeVariant::Folder, true) => format!("{}/", label.blue().bold()),
                (NodeVariant::Folder, false) => format!("{}/", label),
                (NodeVariant::Model, true) => format!("{} {}", label.green(), "[model]".dimmed()),
                (NodeVariant::Model, false) => format!("{} [model]", label),
                (NodeVariant::OtherFile, _) => label.to_string(),
            };
            format!("{}{}", indent, rendered)
        })
        .collect();
    lines.join("\n")
}

/// Render nodes as the widget document `{"root": [...]}`.
pub fn format_tree_json(nodes: &[TreeNode]) -> Result<String, ApiError> {
    WidgetTree {
        root: nodes.iter().map(WidgetNode::from).collect(),
    }
    .to_json_pretty()
}
