//! Widget Views
//!
//! Shapes a built tree into the node documents the file-explorer widget
//! renders, and summarizes trees for reporting.

use crate::error::ApiError;
use crate::tree::{NodeVariant, Tree, TreeNode};
use serde::{Deserialize, Serialize};

/// Icon shown next to folder nodes
pub const FOLDER_ICON: &str = "pi pi-folder";

/// Icon shown next to non-model file nodes
pub const FILE_ICON: &str = "pi pi-map";

/// Node type tag understood by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetType {
    #[serde(rename = "sbml")]
    Sbml,
    #[serde(rename = "otherFiles")]
    OtherFiles,
    #[serde(rename = "folder")]
    Folder,
}

impl From<NodeVariant> for WidgetType {
    fn from(variant: NodeVariant) -> Self {
        match variant {
            NodeVariant::Model => WidgetType::Sbml,
            NodeVariant::OtherFile => WidgetType::OtherFiles,
            NodeVariant::Folder => WidgetType::Folder,
        }
    }
}

/// Icon for a node variant; models render with the widget's default icon
pub fn icon_for(variant: NodeVariant) -> Option<&'static str> {
    match variant {
        NodeVariant::Model => None,
        NodeVariant::OtherFile => Some(FILE_ICON),
        NodeVariant::Folder => Some(FOLDER_ICON),
    }
}

/// One node as the widget consumes it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetNode {
    pub key: String,
    pub label: String,
    pub children: Vec<WidgetNode>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon: Option<String>,
    #[serde(rename = "type")]
    pub node_type: WidgetType,
    /// Location the widget dereferences when the node is selected
    pub data: String,
}

impl From<&TreeNode> for WidgetNode {
    fn from(node: &TreeNode) -> Self {
        Self {
            key: node.key.clone(),
            label: node.label.clone(),
            children: node.children().iter().map(WidgetNode::from).collect(),
            icon: icon_for(node.variant).map(str::to_string),
            node_type: node.variant.into(),
            data: node.source_path.clone(),
        }
    }
}

/// Widget document: `{"root": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetTree {
    pub root: Vec<WidgetNode>,
}

impl WidgetTree {
    fn from_nodes(nodes: &[TreeNode]) -> Self {
        Self {
            root: nodes.iter().map(WidgetNode::from).collect(),
        }
    }

    /// Every top-level node of the tree
    pub fn full_view(tree: &Tree) -> Self {
        Self::from_nodes(tree.nodes())
    }

    /// Contents of the archive root (see [`Tree::archive_root`])
    pub fn archive_view(tree: &Tree) -> Self {
        Self::from_nodes(tree.archive_root())
    }

    pub fn to_json_pretty(&self) -> Result<String, ApiError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Node counts and shape of a tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub folders: usize,
    pub models: usize,
    pub other_files: usize,
    /// Number of levels (0 for an empty tree)
    pub depth: usize,
    pub model_filenames: Vec<String>,
}

impl TreeStats {
    pub fn collect(tree: &Tree) -> Self {
        let mut stats = Self {
            model_filenames: tree
                .model_filenames()
                .sorted()
                .into_iter()
                .map(str::to_string)
                .collect(),
            ..Self::default()
        };
        for entry in tree.walk() {
            match entry.node.variant {
                NodeVariant::Folder => stats.folders += 1,
                NodeVariant::Model => stats.models += 1,
                NodeVariant::OtherFile => stats.other_files += 1,
            }
            stats.depth = stats.depth.max(entry.depth + 1);
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.folders + self.models + self.other_files
    }
}
