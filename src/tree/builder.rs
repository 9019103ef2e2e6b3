//! Tree builder for reconstructing archive hierarchies from manifests

use crate::config::BuilderConfig;
use crate::error::ManifestError;
use crate::manifest::ManifestEntry;
use crate::tree::classify::{Classifier, ModelFilenameSet, DEFAULT_MODEL_MARKER};
use crate::tree::node::TreeNode;
use crate::tree::path;
use crate::tree::walker::Walker;
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// Archive tree built from a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    /// Synthetic root; its children are the top-level nodes
    root: TreeNode,
    /// Model filenames collected during the classification pass
    models: ModelFilenameSet,
}

impl Tree {
    /// Top-level nodes in manifest order
    pub fn nodes(&self) -> &[TreeNode] {
        self.root.children()
    }

    pub fn len(&self) -> usize {
        self.root.children().len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Top-level node with the given label
    pub fn get(&self, label: &str) -> Option<&TreeNode> {
        self.root.child(label)
    }

    /// Follow a slash-delimited location from the top level
    ///
    /// Returns None if any segment along the way is missing.
    pub fn find(&self, location: &str) -> Option<&TreeNode> {
        location
            .split(path::SEPARATOR)
            .try_fold(&self.root, |node, segment| node.child(segment))
    }

    /// Children of the first top-level node
    ///
    /// COMBINE manifests address every entry from `.`, so the tree has a
    /// single `.` node and the interesting content sits below it.
    pub fn archive_root(&self) -> &[TreeNode] {
        self.nodes()
            .first()
            .map(TreeNode::children)
            .unwrap_or_default()
    }

    /// Model filenames used to classify this tree
    pub fn model_filenames(&self) -> &ModelFilenameSet {
        &self.models
    }

    /// Pre-order walk over every node
    pub fn walk(&self) -> Walker<'_> {
        Walker::new(self.nodes())
    }

    /// Total number of nodes, excluding the synthetic root
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }
}

/// Tree builder for archive manifests
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    model_marker: String,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Create a builder that treats `sbml` formats as models
    pub fn new() -> Self {
        Self {
            model_marker: DEFAULT_MODEL_MARKER.to_string(),
        }
    }

    /// Create a builder from the `[builder]` configuration section
    pub fn from_config(config: &BuilderConfig) -> Self {
        Self::new().with_model_marker(&config.model_marker)
    }

    /// Override the format substring that marks model entries
    pub fn with_model_marker(mut self, marker: &str) -> Self {
        self.model_marker = marker.to_string();
        self
    }

    pub fn model_marker(&self) -> &str {
        &self.model_marker
    }

    /// Build the archive tree for a manifest
    ///
    /// Runs a classification pass (validating locations and collecting model
    /// filenames) followed by a construction pass that walks each location's
    /// segments from the root, creating a node the first time a segment is
    /// seen under a given parent and reusing it afterwards.
    #[instrument(skip_all, fields(entries = manifest.len(), marker = %self.model_marker))]
    pub fn build(&self, manifest: &[ManifestEntry]) -> Result<Tree, ManifestError> {
        let start = Instant::now();

        // Step 1: Classification pass
        let paths = manifest
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                path::segments(index, &entry.location).map(|segments| (entry.location.as_str(), segments))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let models = ModelFilenameSet::from_entries(manifest, &self.model_marker);
        debug!(model_count = models.len(), "Collected model filenames");

        let classifier = Classifier::new(models);

        // Step 2: Construction pass
        let mut root = TreeNode::root();
        let mut created = 0usize;
        for (location, segments) in &paths {
            let mut current = &mut root;
            for segment in segments {
                current = current.child_or_insert_with(segment, || {
                    let variant = classifier.resolve(segment);
                    trace!(segment, %variant, location, "Created node");
                    created += 1;
                    TreeNode::new(segment, variant, location)
                });
            }
        }

        info!(
            node_count = created,
            top_level = root.children().len(),
            duration_us = start.elapsed().as_micros() as u64,
            "Tree build completed"
        );

        Ok(Tree {
            root,
            models: classifier.into_models(),
        })
    }
}

/// Build a tree with the default builder
pub fn build_tree(manifest: &[ManifestEntry]) -> Result<Tree, ManifestError> {
    TreeBuilder::new().build(manifest)
}
