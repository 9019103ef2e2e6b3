//! Archive Tree
//!
//! Reconstructs the directory/file hierarchy of an archive from its flat
//! manifest, with every node classified as a folder, a model or another file.

pub mod builder;
pub mod classify;
pub mod node;
pub mod path;
pub mod walker;

pub use builder::{build_tree, Tree, TreeBuilder};
pub use classify::{Classifier, ModelFilenameSet};
pub use node::{NodeVariant, TreeNode};
