use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::features::zip_codes::models::ZipCodeEntry;

#[derive(Debug, Error)]
pub enum ZipCodeDirectoryError {
    #[error("failed to read ZIP code reference: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse ZIP code reference: {0}")]
    Json(#[from] serde_json::Error),
}

/// In-memory ZIP code reference, loaded once and read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct ZipCodeDirectory {
    entries: HashMap<String, ZipCodeEntry>,
}

impl ZipCodeDirectory {
    /// Build from entries; a ZIP listed several times keeps its last locality
    pub fn from_entries(entries: Vec<ZipCodeEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.zip.clone(), entry))
            .collect();
        Self { entries }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ZipCodeDirectoryError> {
        let entries: Vec<ZipCodeEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ZipCodeDirectoryError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn lookup(&self, zip: &str) -> Option<&ZipCodeEntry> {
        self.entries.get(zip)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"zip": "1000", "city": "Bruxelles", "lat": 50.84, "lng": 4.35},
        {"zip": "9000", "city": "Gent", "lat": 51.05, "lng": 3.72},
        {"zip": "9000", "city": "Gent Centrum", "lat": 51.06, "lng": 3.73}
    ]"#;

    #[test]
    fn test_lookup() {
        let directory = ZipCodeDirectory::from_json_str(SAMPLE).unwrap();
        assert_eq!(directory.lookup("1000").unwrap().city, "Bruxelles");
        assert!(directory.lookup("4000").is_none());
    }

    #[test]
    fn test_duplicate_zip_keeps_last() {
        let directory = ZipCodeDirectory::from_json_str(SAMPLE).unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.lookup("9000").unwrap().city, "Gent Centrum");
    }

    #[test]
    fn test_default_is_empty() {
        let directory = ZipCodeDirectory::default();
        assert!(directory.is_empty());
        assert!(directory.lookup("1000").is_none());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let directory = ZipCodeDirectory::from_json_file(file.path()).unwrap();
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_from_json_str_rejects_malformed_entries() {
        let result = ZipCodeDirectory::from_json_str(r#"[{"zip": "1000"}]"#);
        assert!(matches!(result, Err(ZipCodeDirectoryError::Json(_))));
    }
}
