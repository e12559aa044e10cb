use super::{extract_records, RecordSource};
use crate::error::{Result, TableFilterError};
use crate::model::Record;
use serde_json::Value;
use std::collections::HashMap;

/// In-memory source for testing: canned payloads keyed by location.
#[derive(Debug, Default)]
pub struct InMemorySource {
    payloads: HashMap<String, Value>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(mut self, location: impl Into<String>, payload: Value) -> Self {
        self.payloads.insert(location.into(), payload);
        self
    }
}

impl RecordSource for InMemorySource {
    fn load(&self, location: &str, records_key: Option<&str>) -> Result<Option<Vec<Record>>> {
        let payload = self
            .payloads
            .get(location)
            .cloned()
            .ok_or_else(|| TableFilterError::Source(format!("no payload at {}", location)))?;
        extract_records(payload, records_key)
    }
}
