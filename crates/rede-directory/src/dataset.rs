//! Loading the lab dataset from JSON.

use std::path::Path;

use crate::error::DatasetError;
use crate::record::RawLabRecord;
use crate::store::RecordStore;

/// Parses a JSON array of raw records.
pub fn parse_records(json: &str) -> Result<Vec<RawLabRecord>, DatasetError> {
    let records: Vec<RawLabRecord> = serde_json::from_str(json)?;
    if let Some(index) = records.iter().position(|r| r.name.trim().is_empty()) {
        return Err(DatasetError::EmptyName { index });
    }
    Ok(records)
}

impl RecordStore {
    /// Builds a store from a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Ok(Self::from_raw(parse_records(json)?))
    }

    /// Reads and parses a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), labs = store.len(), "Loaded lab dataset");
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::region::Region;

    const SAMPLE: &str = r#"[
        {"name": "Lab A", "location": "Curitiba, PR", "description": "Sul", "region": "Sul", "latitude": 1.0, "longitude": 1.0},
        {"name": "Lab B", "location": "Rio de Janeiro, RJ", "description": "Sudeste", "region": "Sudeste"}
    ]"#;

    #[test]
    fn test_parse_sample() {
        let store = RecordStore::from_json_str(SAMPLE).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].region, Region::Sul);
        assert!(store.records()[0].has_coordinates());
        assert!(!store.records()[1].has_coordinates());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = parse_records(r#"[{"name": " ", "region": "Sul"}]"#).unwrap_err();
        assert!(matches!(err, DatasetError::EmptyName { index: 0 }));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(
            RecordStore::from_json_str("{not json"),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let store = RecordStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RecordStore::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
