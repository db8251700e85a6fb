//! Expert directory loading.
//!
//! The directory is a flat JSON object mapping normalized domain keys to
//! free-text expert descriptions. It is re-read from disk on every query so
//! edits to the file show up without a restart; there is no caching layer.
//!
//! Key order in the file is preserved (serde_json `preserve_order`) because
//! it doubles as the resolver's tie-break order. Duplicate normalized keys
//! are not detected or deduplicated; behavior with duplicates is undefined.

use std::path::Path;
use thiserror::Error;

/// Directory failures. All of them fail closed at the HTTP boundary: the
/// user sees a generic message and the cause only reaches the logs.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read directory file: {0}")]
    Io(#[from] std::io::Error),
    #[error("directory file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("directory file must be a JSON object of string values")]
    InvalidShape,
}

/// In-memory snapshot of the directory at load time.
#[derive(Debug, Clone)]
pub struct ExpertDirectory {
    entries: Vec<(String, String)>,
}

impl ExpertDirectory {
    /// Load the directory from `path`, preserving file order.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a directory from its JSON text.
    pub fn from_json(content: &str) -> Result<Self, DirectoryError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let object = value.as_object().ok_or(DirectoryError::InvalidShape)?;

        let mut entries = Vec::with_capacity(object.len());
        for (key, value) in object {
            let expert = value.as_str().ok_or(DirectoryError::InvalidShape)?;
            entries.push((key.clone(), expert.to_string()));
        }
        Ok(Self { entries })
    }

    /// Lookup keys in file order -- the resolver's candidate set.
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Expert description for an exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "wealth_tech": "Priya Sharma",
        "lending": "Arjun Mehta",
        "bav": "Kiran Rao"
    }"#;

    #[test]
    fn test_keys_preserve_file_order() {
        let dir = ExpertDirectory::from_json(SAMPLE).unwrap();
        assert_eq!(dir.keys(), vec!["wealth_tech", "lending", "bav"]);
    }

    #[test]
    fn test_get_known_key() {
        let dir = ExpertDirectory::from_json(SAMPLE).unwrap();
        assert_eq!(dir.get("lending"), Some("Arjun Mehta"));
        assert_eq!(dir.get("unknown"), None);
    }

    #[test]
    fn test_malformed_json_is_an_error_not_a_panic() {
        assert!(matches!(
            ExpertDirectory::from_json("{ not json"),
            Err(DirectoryError::Parse(_))
        ));
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(matches!(
            ExpertDirectory::from_json("[1, 2, 3]"),
            Err(DirectoryError::InvalidShape)
        ));
    }

    #[test]
    fn test_non_string_value_rejected() {
        assert!(matches!(
            ExpertDirectory::from_json(r#"{"lending": 42}"#),
            Err(DirectoryError::InvalidShape)
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(matches!(
            ExpertDirectory::load("/nonexistent/experts.json"),
            Err(DirectoryError::Io(_))
        ));
    }

    #[test]
    fn test_empty_object_is_valid() {
        let dir = ExpertDirectory::from_json("{}").unwrap();
        assert!(dir.is_empty());
        assert_eq!(dir.len(), 0);
    }
}
