//! Property-based tests for tree shape and classification

use super::strategies::manifest;
use omextree::tree::{build_tree, NodeVariant, TreeNode};
use proptest::prelude::*;
use std::collections::HashSet;

fn assert_unique_labels(nodes: &[TreeNode]) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    for node in nodes {
        prop_assert!(seen.insert(node.label.as_str()), "duplicate label {}", node.label);
        prop_assert_eq!(&node.key, &node.label);
        assert_unique_labels(node.children())?;
    }
    Ok(())
}

proptest! {
    /// No parent has two children with the same label
    #[test]
    fn test_sibling_labels_unique(entries in manifest()) {
        let tree = build_tree(&entries).unwrap();
        assert_unique_labels(tree.nodes())?;
    }

    /// Every entry's segments appear as a chain of nodes
    #[test]
    fn test_every_location_is_covered(entries in manifest()) {
        let tree = build_tree(&entries).unwrap();
        for entry in &entries {
            prop_assert!(tree.find(&entry.location).is_some(), "missing {}", entry.location);
        }
    }

    /// The final segment of every sbml entry is a model node
    #[test]
    fn test_model_entries_are_models(entries in manifest()) {
        let tree = build_tree(&entries).unwrap();
        for entry in entries.iter().filter(|e| e.format.contains("sbml")) {
            let node = tree.find(&entry.location).unwrap();
            prop_assert_eq!(node.variant, NodeVariant::Model);
        }
    }

    /// Non-model nodes are files exactly when their label has a dot
    #[test]
    fn test_leaf_heuristic(entries in manifest()) {
        let tree = build_tree(&entries).unwrap();
        for entry in tree.walk() {
            let node = entry.node;
            let expected = if tree.model_filenames().contains(&node.label) {
                NodeVariant::Model
            } else if node.label.contains('.') {
                NodeVariant::OtherFile
            } else {
                NodeVariant::Folder
            };
            prop_assert_eq!(node.variant, expected);
        }
    }
}
