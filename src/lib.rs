//! omextree: Archive Manifest Trees
//!
//! Reconstructs the directory/file hierarchy described by a flat archive
//! manifest (a list of `location`/`format` entries) as a tree of typed nodes
//! for a navigable file-explorer widget.
//!
//! ```
//! use omextree::manifest::ManifestEntry;
//! use omextree::tree::{build_tree, NodeVariant};
//!
//! let tree = build_tree(&[ManifestEntry::new("sim/model.xml", "sbml")]).unwrap();
//! let model = tree.find("sim/model.xml").unwrap();
//! assert_eq!(model.variant, NodeVariant::Model);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod tree;
pub mod views;
