//! Archive manifest entries and payload decoding
//!
//! The backend reports an archive as `{"manifest": {"entries": [...]}}`, where
//! each entry carries a `location` inside the archive and a `format`
//! identifier. Decoding is deliberately shallow: only the fields the tree
//! builder reads are checked.

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of an archive manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Slash-delimited path inside the archive
    pub location: String,
    /// Format identifier (e.g. an identifiers.org URI or a media type)
    pub format: String,
    /// Whether the archive marks this entry as its master file
    #[serde(default)]
    pub master: bool,
}

impl ManifestEntry {
    pub fn new(location: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            format: format.into(),
            master: false,
        }
    }

    /// Mark this entry as the archive's master file
    pub fn with_master(mut self, master: bool) -> Self {
        self.master = master;
        self
    }

    /// True when the format identifier contains the given model marker
    pub fn has_format_marker(&self, marker: &str) -> bool {
        self.format.contains(marker)
    }
}

/// Decoded archive manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    /// Decode a manifest from a JSON document
    ///
    /// Accepts the full backend response (`{"manifest": {"entries": [...]}}`),
    /// a bare manifest object (`{"entries": [...]}`) or a bare entry array.
    pub fn from_json_str(input: &str) -> Result<Self, ManifestError> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| ManifestError::InvalidPayload(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Decode a manifest from an already parsed JSON value
    pub fn from_value(value: &Value) -> Result<Self, ManifestError> {
        let entries = locate_entries(value)?
            .iter()
            .enumerate()
            .map(|(index, entry)| decode_entry(index, entry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn locate_entries(value: &Value) -> Result<&Vec<Value>, ManifestError> {
    match value {
        Value::Array(entries) => Ok(entries),
        Value::Object(map) => {
            if let Some(manifest) = map.get("manifest") {
                return locate_entries(manifest);
            }
            match map.get("entries") {
                Some(Value::Array(entries)) => Ok(entries),
                Some(_) => Err(ManifestError::InvalidPayload(
                    "'entries' is not an array".to_string(),
                )),
                None => Err(ManifestError::InvalidPayload(
                    "no 'entries' list found".to_string(),
                )),
            }
        }
        _ => Err(ManifestError::InvalidPayload(
            "expected an object or an array of entries".to_string(),
        )),
    }
}

fn decode_entry(index: usize, value: &Value) -> Result<ManifestEntry, ManifestError> {
    let location = value
        .get("location")
        .and_then(Value::as_str)
        .ok_or(ManifestError::MissingLocation { index })?;
    let format = value
        .get("format")
        .and_then(Value::as_str)
        .ok_or(ManifestError::MissingFormat { index })?;
    let master = value.get("master").and_then(Value::as_bool).unwrap_or(false);

    Ok(ManifestEntry {
        location: location.to_string(),
        format: format.to_string(),
        master,
    })
}
