//! Loading drug records from an external snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TrainError, TrainResult};
use crate::record::DrugRecord;

/// Source of drug records for a training run.
///
/// The trainer only ever takes one full snapshot per run, so a store exposes a
/// single blocking load.
pub trait RecordStore {
    fn load(&self) -> TrainResult<Vec<DrugRecord>>;
}

/// Record store backed by a JSON file containing an array of drug records.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonSnapshotStore {
    fn load(&self) -> TrainResult<Vec<DrugRecord>> {
        let bytes = fs::read(&self.path).map_err(|e| TrainError::RecordLoad {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        serde_json::from_slice(&bytes).map_err(|e| TrainError::RecordLoad {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

/// In-memory store, mainly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<DrugRecord>,
}

impl MemoryStore {
    pub fn new(records: Vec<DrugRecord>) -> Self {
        Self { records }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> TrainResult<Vec<DrugRecord>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn json_snapshot_store_reads_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Aspirin", "description": "pain relief"}}]"#
        )
        .unwrap();

        let store = JsonSnapshotStore::new(file.path());
        let records = store.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].display_name(), "Aspirin");
        assert!(records[0].side_effects.is_none());
    }

    #[test]
    fn missing_file_is_a_record_load_error() {
        let store = JsonSnapshotStore::new("does/not/exist.json");
        let err = store.load().unwrap_err();
        assert!(matches!(err, TrainError::RecordLoad { .. }));
    }

    #[test]
    fn malformed_json_is_a_record_load_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let store = JsonSnapshotStore::new(file.path());
        let err = store.load().unwrap_err();
        assert!(matches!(err, TrainError::RecordLoad { .. }));
    }
}
