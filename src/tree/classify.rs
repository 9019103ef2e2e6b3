//! Node classification
//!
//! Matching is by name only: a segment anywhere in the tree whose text equals
//! a known model filename is classified as a model, whatever its depth.

use crate::manifest::ManifestEntry;
use crate::tree::node::NodeVariant;
use crate::tree::path;
use std::collections::HashSet;

/// Format substring marking an entry as a model document
pub const DEFAULT_MODEL_MARKER: &str = "sbml";

/// Character whose presence marks a segment as a filename
pub const FILE_MARKER: char = '.';

/// Final path segments of every model entry in a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelFilenameSet {
    names: HashSet<String>,
}

impl ModelFilenameSet {
    /// Collect model filenames from entries whose format contains `marker`
    pub fn from_entries(entries: &[ManifestEntry], marker: &str) -> Self {
        let mut set = Self::default();
        for entry in entries.iter().filter(|e| e.has_format_marker(marker)) {
            set.insert(path::file_name(&entry.location));
        }
        set
    }

    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Filenames in lexicographic order
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

type Rule = fn(&Classifier, &str) -> bool;

/// Resolution order: the first matching predicate decides the variant,
/// anything unmatched is a folder.
const PRECEDENCE: [(Rule, NodeVariant); 2] = [
    (Classifier::is_model, NodeVariant::Model),
    (Classifier::is_file, NodeVariant::OtherFile),
];

/// Resolves the variant of a path segment
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    models: ModelFilenameSet,
}

impl Classifier {
    pub fn new(models: ModelFilenameSet) -> Self {
        Self { models }
    }

    pub fn into_models(self) -> ModelFilenameSet {
        self.models
    }

    pub fn is_model(&self, segment: &str) -> bool {
        self.models.contains(segment)
    }

    pub fn is_file(&self, segment: &str) -> bool {
        segment.contains(FILE_MARKER)
    }

    pub fn resolve(&self, segment: &str) -> NodeVariant {
        PRECEDENCE
            .iter()
            .find(|(rule, _)| rule(self, segment))
            .map(|(_, variant)| *variant)
            .unwrap_or(NodeVariant::Folder)
    }
}
