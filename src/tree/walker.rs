//! Depth-first traversal over built trees

use crate::tree::node::TreeNode;

/// A node visited during a walk
#[derive(Debug, Clone, Copy)]
pub struct WalkEntry<'a> {
    /// Distance from the top level (top-level nodes have depth 0)
    pub depth: usize,
    pub node: &'a TreeNode,
}

/// Pre-order walker
///
/// Visits a node before its children; siblings come in the order the
/// manifest introduced them.
pub struct Walker<'a> {
    stack: Vec<WalkEntry<'a>>,
}

impl<'a> Walker<'a> {
    /// Walk a slice of sibling nodes and everything beneath them
    pub fn new(nodes: &'a [TreeNode]) -> Self {
        let stack = nodes
            .iter()
            .rev()
            .map(|node| WalkEntry { depth: 0, node })
            .collect();
        Self { stack }
    }
}

impl<'a> Iterator for Walker<'a> {
    type Item = WalkEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        self.stack.extend(entry.node.children().iter().rev().map(|child| WalkEntry {
            depth: entry.depth + 1,
            node: child,
        }));
        Some(entry)
    }
}
