//! Integration tests for tree structure correctness

use super::test_utils::combine_archive_manifest;
use omextree::error::ManifestError;
use omextree::manifest::ManifestEntry;
use omextree::tree::{build_tree, NodeVariant, TreeNode};

fn labels(nodes: &[TreeNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.label.as_str()).collect()
}

/// A lone model entry becomes a single model leaf
#[test]
fn test_single_model_at_top_level() {
    let tree = build_tree(&[ManifestEntry::new("model.xml", "sbml")]).unwrap();

    assert_eq!(tree.len(), 1);
    let node = &tree.nodes()[0];
    assert_eq!(node.key, "model.xml");
    assert_eq!(node.label, "model.xml");
    assert_eq!(node.variant, NodeVariant::Model);
    assert!(node.children().is_empty());
}

/// A nested non-model file sits under a folder
#[test]
fn test_file_inside_folder() {
    let tree = build_tree(&[ManifestEntry::new("docs/readme.txt", "text")]).unwrap();

    assert_eq!(labels(tree.nodes()), vec!["docs"]);
    let docs = &tree.nodes()[0];
    assert_eq!(docs.variant, NodeVariant::Folder);
    assert_eq!(labels(docs.children()), vec!["readme.txt"]);
    assert_eq!(docs.children()[0].variant, NodeVariant::OtherFile);
}

/// Duplicate entries do not duplicate nodes
#[test]
fn test_duplicate_entries_share_nodes() {
    let tree = build_tree(&[
        ManifestEntry::new("sim/model.xml", "sbml"),
        ManifestEntry::new("sim/model.xml", "sbml"),
    ])
    .unwrap();

    assert_eq!(labels(tree.nodes()), vec!["sim"]);
    let sim = &tree.nodes()[0];
    assert_eq!(labels(sim.children()), vec!["model.xml"]);
    assert_eq!(sim.children()[0].variant, NodeVariant::Model);
    assert_eq!(tree.node_count(), 2);
}

/// Shared ancestors are reused and siblings keep manifest order
#[test]
fn test_shared_ancestor_with_mixed_children() {
    let tree = build_tree(&[
        ManifestEntry::new("a/b/c.txt", "text"),
        ManifestEntry::new("a/x.txt", "text"),
    ])
    .unwrap();

    assert_eq!(labels(tree.nodes()), vec!["a"]);
    let a = &tree.nodes()[0];
    assert_eq!(a.variant, NodeVariant::Folder);
    assert_eq!(labels(a.children()), vec!["b", "x.txt"]);

    let b = &a.children()[0];
    assert_eq!(b.variant, NodeVariant::Folder);
    assert_eq!(labels(b.children()), vec!["c.txt"]);
    assert_eq!(b.children()[0].variant, NodeVariant::OtherFile);
    assert_eq!(a.children()[1].variant, NodeVariant::OtherFile);
}

/// A COMBINE archive hangs everything from its "." entry
#[test]
fn test_combine_archive_root() {
    let tree = build_tree(&combine_archive_manifest()).unwrap();

    assert_eq!(labels(tree.nodes()), vec!["."]);
    assert_eq!(tree.nodes()[0].variant, NodeVariant::OtherFile);

    let root = tree.archive_root();
    assert_eq!(labels(root), vec!["manifest.xml", "e_coli_core.xml", "FROG"]);
    assert_eq!(root[1].variant, NodeVariant::Model);
    assert_eq!(root[2].variant, NodeVariant::Folder);

    let cobrapy = tree.find("./FROG/cobrapy").unwrap();
    assert_eq!(
        labels(cobrapy.children()),
        vec!["01_objective.tsv", "02_fva.tsv", "metadata.json"]
    );
}

/// Name-only matching: a folder named like a model file is a model
#[test]
fn test_folder_matching_model_name_is_model() {
    let tree = build_tree(&[
        ManifestEntry::new("model.xml", "sbml"),
        ManifestEntry::new("archive/model.xml/notes.txt", "text"),
    ])
    .unwrap();

    let nested = tree.find("archive/model.xml").unwrap();
    assert_eq!(nested.variant, NodeVariant::Model);
    assert_eq!(nested.children().len(), 1);
}

/// The first creator's location sticks to every node it created
#[test]
fn test_source_path_from_first_creator() {
    let tree = build_tree(&[
        ManifestEntry::new("sim/run/output.csv", "text/csv"),
        ManifestEntry::new("sim/model.xml", "sbml"),
    ])
    .unwrap();

    assert_eq!(tree.find("sim").unwrap().source_path, "sim/run/output.csv");
    assert_eq!(tree.find("sim/run").unwrap().source_path, "sim/run/output.csv");
    assert_eq!(tree.find("sim/model.xml").unwrap().source_path, "sim/model.xml");
}

/// Model filenames are collected before construction, so they apply to
/// nodes created by earlier entries too
#[test]
fn test_model_set_applies_to_earlier_entries() {
    let tree = build_tree(&[
        ManifestEntry::new("data/readme.txt", "text"),
        ManifestEntry::new("data", "sbml"),
    ])
    .unwrap();

    assert_eq!(tree.find("data").unwrap().variant, NodeVariant::Model);
    assert_eq!(tree.find("data").unwrap().source_path, "data/readme.txt");
}

/// Malformed locations fail the whole build
#[test]
fn test_malformed_locations_rejected() {
    let err = build_tree(&[
        ManifestEntry::new("ok.txt", "text"),
        ManifestEntry::new("", "text"),
    ])
    .unwrap_err();
    assert_eq!(err, ManifestError::EmptyLocation { index: 1 });

    let err = build_tree(&[ManifestEntry::new("a//b.txt", "text")]).unwrap_err();
    assert_eq!(
        err,
        ManifestError::EmptySegment {
            index: 0,
            location: "a//b.txt".to_string()
        }
    );
}
