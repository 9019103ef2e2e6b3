//! Property-based tests for determinism guarantees

use super::strategies::manifest;
use omextree::tree::build_tree;
use omextree::views::WidgetTree;
use proptest::prelude::*;

proptest! {
    /// Building the same manifest twice yields structurally identical trees
    #[test]
    fn test_build_is_idempotent(entries in manifest()) {
        let first = build_tree(&entries).unwrap();
        let second = build_tree(&entries).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(WidgetTree::full_view(&first), WidgetTree::full_view(&second));
    }

    /// Node count never exceeds the total number of segments
    #[test]
    fn test_node_count_bounded_by_segments(entries in manifest()) {
        let tree = build_tree(&entries).unwrap();
        let segments: usize = entries
            .iter()
            .map(|e| e.location.split('/').count())
            .sum();

        prop_assert!(tree.node_count() <= segments);
    }
}
