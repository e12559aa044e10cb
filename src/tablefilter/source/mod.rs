//! # Record sources
//!
//! Records reach a screen from the REST API as JSON. The [`RecordSource`]
//! trait stands in for that fetch so the rest of the crate never knows where
//! rows come from.
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: reads a saved API response from a file, or stdin
//!   for `-`.
//! - [`memory::InMemorySource`]: canned responses for tests.
//!
//! ## Response shapes
//!
//! Both implementations accept the same payloads:
//!
//! ```text
//! [ {...}, {...} ]                      bare array
//! { "<records_key>": [ ... ] }          envelope with the screen's key
//! { "data" | "results" | "items": [ ... ] }
//! null                                  data not available yet
//! ```
//!
//! `null` (or an envelope whose array is `null`) yields `Ok(None)`: the
//! screen has no data yet, which the engine treats as an empty collection.
//! Array entries that are not objects are skipped.

use crate::error::{Result, TableFilterError};
use crate::model::Record;
use serde_json::Value;

pub mod fs;
pub mod memory;

/// Envelope keys tried when the screen names none, or its key is absent.
pub const ENVELOPE_KEYS: &[&str] = &["data", "results", "items"];

pub trait RecordSource {
    /// Loads the records at `location`.
    ///
    /// `records_key` names the array inside an envelope object.
    fn load(&self, location: &str, records_key: Option<&str>) -> Result<Option<Vec<Record>>>;
}

/// Pulls the record array out of a response payload.
pub fn extract_records(payload: Value, records_key: Option<&str>) -> Result<Option<Vec<Record>>> {
    match payload {
        Value::Null => Ok(None),
        Value::Array(items) => Ok(Some(keep_objects(items))),
        Value::Object(mut envelope) => {
            let key = records_key
                .into_iter()
                .chain(ENVELOPE_KEYS.iter().copied())
                .find(|k| envelope.contains_key(*k))
                .map(str::to_string);

            match key.and_then(|k| envelope.remove(&k)) {
                Some(Value::Null) => Ok(None),
                Some(Value::Array(items)) => Ok(Some(keep_objects(items))),
                Some(other) => Err(TableFilterError::Source(format!(
                    "expected an array of records, found {}",
                    kind_of(&other)
                ))),
                None => Err(TableFilterError::Source(format!(
                    "response object has no record array (looked for {})",
                    records_key
                        .into_iter()
                        .chain(ENVELOPE_KEYS.iter().copied())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))),
            }
        }
        other => Err(TableFilterError::Source(format!(
            "expected an array of records, found {}",
            kind_of(&other)
        ))),
    }
}

fn keep_objects(items: Vec<Value>) -> Vec<Record> {
    let total = items.len();
    let records: Vec<Record> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect();

    if records.len() < total {
        tracing::warn!(
            skipped = total - records.len(),
            "skipped array entries that are not objects"
        );
    }
    records
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
