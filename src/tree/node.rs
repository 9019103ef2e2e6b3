//! Tree node types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Classification tag of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeVariant {
    Folder,
    Model,
    OtherFile,
}

impl NodeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeVariant::Folder => "folder",
            NodeVariant::Model => "model",
            NodeVariant::OtherFile => "other_file",
        }
    }
}

impl fmt::Display for NodeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the archive tree
///
/// Children keep manifest order. A label index sits next to the child list so
/// that a segment seen again under the same parent resolves to the node that
/// already exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub key: String,
    pub label: String,
    pub variant: NodeVariant,
    /// Full location of the manifest entry that created this node
    pub source_path: String,
    children: Vec<TreeNode>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl TreeNode {
    pub fn new(segment: &str, variant: NodeVariant, source_path: &str) -> Self {
        Self {
            key: segment.to_string(),
            label: segment.to_string(),
            variant,
            source_path: source_path.to_string(),
            children: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Synthetic accumulator the builder hangs top-level nodes from
    pub(crate) fn root() -> Self {
        Self::new("", NodeVariant::Folder, "")
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Child with the given label, if any
    pub fn child(&self, label: &str) -> Option<&TreeNode> {
        self.index.get(label).map(|&position| &self.children[position])
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Return the child labelled `label`, creating it with `create` when absent
    pub(crate) fn child_or_insert_with<F>(&mut self, label: &str, create: F) -> &mut TreeNode
    where
        F: FnOnce() -> TreeNode,
    {
        let position = match self.index.get(label) {
            Some(&position) => position,
            None => {
                let position = self.children.len();
                self.children.push(create());
                self.index.insert(label.to_string(), position);
                position
            }
        };
        &mut self.children[position]
    }
}
