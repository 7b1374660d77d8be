//! Record store for the loan collection
//!
//! The collection is owned elsewhere; this module only reads it. Reads that
//! fail are logged and degrade to an empty collection so a report can still
//! show its "no data" state.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ReportError;
use crate::models::Record;

use super::file_io::read_json;

/// Supplies the full record collection
pub trait RecordStore {
    /// Read every record in storage order
    fn fetch_all(&self) -> Result<Vec<Record>, ReportError>;

    /// Read every record, degrading to an empty collection on failure
    fn snapshot(&self) -> Vec<Record> {
        match self.fetch_all() {
            Ok(records) => {
                tracing::debug!(count = records.len(), "loaded record snapshot");
                records
            }
            Err(err) => {
                tracing::warn!(error = %err, "record collection unreadable, treating as empty");
                Vec::new()
            }
        }
    }
}

/// On-disk layout of the record collection
///
/// Either a bare array or an object holding the array under `records`
/// (or the legacy key `requests`). Entries are decoded one at a time so a
/// single malformed entry only drops itself.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordFile {
    Bare(Vec<serde_json::Value>),
    Keyed {
        #[serde(alias = "requests")]
        records: Vec<serde_json::Value>,
    },
}

impl Default for RecordFile {
    fn default() -> Self {
        Self::Bare(Vec::new())
    }
}

impl RecordFile {
    fn into_records(self) -> Vec<Record> {
        let entries = match self {
            Self::Bare(entries) | Self::Keyed { records: entries } => entries,
        };
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<Record>(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(index, error = %err, "skipping unreadable record");
                    None
                }
            })
            .collect()
    }
}

/// Record store backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonRecordStore {
    path: PathBuf,
}

impl JsonRecordStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonRecordStore {
    fn fetch_all(&self) -> Result<Vec<Record>, ReportError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "record file not found");
        }
        let file: RecordFile = read_json(&self.path)?;
        Ok(file.into_records())
    }
}

/// Record store holding an in-memory collection
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: Vec<Record>,
}

impl MemoryRecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordStore for MemoryRecordStore {
    fn fetch_all(&self) -> Result<Vec<Record>, ReportError> {
        Ok(self.records.clone())
    }
}
