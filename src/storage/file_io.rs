//! File I/O utilities
//!
//! Read-only JSON helpers. This crate never writes the record collection.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ReportError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, ReportError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| ReportError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| ReportError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Check if a JSON file exists and is valid
pub fn json_file_valid<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if !path.exists() {
        return false;
    }

    if let Ok(file) = File::open(path) {
        let reader = BufReader::new(file);
        serde_json::from_reader::<_, serde_json::Value>(reader).is_ok()
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: TestData = read_json(&path).unwrap();
        assert_eq!(data, TestData::default());
    }

    #[test]
    fn test_read_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        fs::write(&path, r#"{"name": "test", "value": 42}"#).unwrap();

        let data: TestData = read_json(&path).unwrap();
        assert_eq!(data.name, "test");
        assert_eq!(data.value, 42);
    }

    #[test]
    fn test_read_corrupt_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let err = read_json::<TestData, _>(&path).unwrap_err();
        assert!(err.is_storage());
    }

    #[test]
    fn test_json_file_valid() {
        let temp_dir = TempDir::new().unwrap();
        let valid_path = temp_dir.path().join("valid.json");
        let invalid_path = temp_dir.path().join("invalid.json");
        let nonexistent_path = temp_dir.path().join("nonexistent.json");

        fs::write(&valid_path, r#"{"name": "test"}"#).unwrap();
        assert!(json_file_valid(&valid_path));

        fs::write(&invalid_path, "not json at all").unwrap();
        assert!(!json_file_valid(&invalid_path));

        assert!(!json_file_valid(&nonexistent_path));
    }
}
