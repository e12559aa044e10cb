use super::{extract_records, RecordSource};
use crate::error::{Result, TableFilterError};
use crate::model::Record;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Location that reads the payload from stdin.
pub const STDIN_LOCATION: &str = "-";

/// Reads saved API responses from disk.
///
/// Relative locations resolve against `root` when one is set.
#[derive(Debug, Default)]
pub struct FileSource {
    root: Option<PathBuf>,
}

impl FileSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    fn resolve(&self, location: &str) -> PathBuf {
        let path = PathBuf::from(location);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path,
        }
    }

    fn read_payload(&self, location: &str) -> Result<String> {
        if location == STDIN_LOCATION {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }

        let path = self.resolve(location);
        fs::read_to_string(&path).map_err(|e| {
            TableFilterError::Source(format!("cannot read {}: {}", path.display(), e))
        })
    }
}

impl RecordSource for FileSource {
    fn load(&self, location: &str, records_key: Option<&str>) -> Result<Option<Vec<Record>>> {
        let content = self.read_payload(location)?;
        if content.trim().is_empty() {
            tracing::debug!(location, "empty payload, treating as not loaded");
            return Ok(None);
        }

        let payload: Value = serde_json::from_str(&content)?;
        let records = extract_records(payload, records_key)?;
        tracing::debug!(
            location,
            records = records.as_ref().map(Vec::len),
            "loaded records"
        );
        Ok(records)
    }
}
