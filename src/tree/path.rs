//! Manifest location splitting

use crate::error::ManifestError;

/// Hierarchy separator used by manifest locations
pub const SEPARATOR: char = '/';

/// Split a location into its path segments, rejecting empty ones
///
/// `index` is the entry's position in the manifest and is only used for error
/// reporting.
pub fn segments(index: usize, location: &str) -> Result<Vec<&str>, ManifestError> {
    if location.is_empty() {
        return Err(ManifestError::EmptyLocation { index });
    }

    let segments: Vec<&str> = location.split(SEPARATOR).collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(ManifestError::EmptySegment {
            index,
            location: location.to_string(),
        });
    }

    Ok(segments)
}

/// Final segment of a location (the text after the last separator)
pub fn file_name(location: &str) -> &str {
    match location.rfind(SEPARATOR) {
        Some(position) => &location[position + SEPARATOR.len_utf8()..],
        None => location,
    }
}
