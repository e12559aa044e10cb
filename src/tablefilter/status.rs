//! # Status normalization
//!
//! Backend status fields arrive in more than one representation: modern
//! string states (`"in_progress"`), legacy numeric codes (`5`, `7`, `8`), and
//! sometimes the numeric codes as strings. A [`StatusMap`] folds them into a
//! small closed set of display states before records are shown, counted or
//! filtered.
//!
//! Normalization is total. Unknown codes, nulls, missing fields and
//! non-scalar values all map to the table's fallback state.
//!
//! The code tables are configuration, not engine logic: the built-in ones
//! below are defaults that a screen's config can replace.

use crate::model::{to_match_string, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawStatusMap", into = "RawStatusMap")]
pub struct StatusMap {
    // Keys are stored lowercased.
    codes: BTreeMap<String, String>,
    fallback: String,
}

#[derive(Serialize, Deserialize)]
struct RawStatusMap {
    codes: BTreeMap<String, String>,
    fallback: String,
}

impl From<RawStatusMap> for StatusMap {
    fn from(raw: RawStatusMap) -> Self {
        StatusMap::new(raw.fallback).with_codes(raw.codes)
    }
}

impl From<StatusMap> for RawStatusMap {
    fn from(map: StatusMap) -> Self {
        RawStatusMap {
            codes: map.codes,
            fallback: map.fallback,
        }
    }
}

impl StatusMap {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            codes: BTreeMap::new(),
            fallback: fallback.into(),
        }
    }

    pub fn code(mut self, code: impl AsRef<str>, state: impl Into<String>) -> Self {
        let code = code.as_ref().to_lowercase();
        self.codes.insert(code, state.into());
        self
    }

    pub fn with_codes<K: AsRef<str>, V: Into<String>>(
        self,
        codes: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        codes
            .into_iter()
            .fold(self, |map, (code, state)| map.code(code, state))
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Display states this map can produce, fallback included, deduplicated.
    pub fn states(&self) -> Vec<&str> {
        let mut states: Vec<&str> = self.codes.values().map(String::as_str).collect();
        states.push(&self.fallback);
        states.sort_unstable();
        states.dedup();
        states
    }

    /// Maps a raw status value to its display state.
    pub fn normalize(&self, raw: &Value) -> &str {
        let code = match raw {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => to_match_string(raw),
            _ => None,
        };
        code.and_then(|c| self.codes.get(c.trim().to_lowercase().as_str()))
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// Display state of a record's field; missing fields take the fallback.
    pub fn normalize_field(&self, record: &Record, field: &str) -> &str {
        self.normalize(record.get(field).unwrap_or(&Value::Null))
    }

    /// Writes each record's normalized state into `target_field`.
    ///
    /// `source_field` and `target_field` may be the same, in which case the
    /// raw value is replaced.
    pub fn apply(&self, records: &mut [Record], source_field: &str, target_field: &str) {
        for record in records.iter_mut() {
            let state = self.normalize_field(record, source_field).to_string();
            record.insert(target_field.to_string(), Value::String(state));
        }
    }

    /// Record count per display state. Every state of the map is present,
    /// zero counts included.
    pub fn counts(&self, records: &[Record], source_field: &str) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = self
            .states()
            .into_iter()
            .map(|s| (s.to_string(), 0))
            .collect();
        for record in records {
            let state = self.normalize_field(record, source_field).to_string();
            *counts.entry(state).or_default() += 1;
        }
        counts
    }

    /// Order pipeline: pending → in progress → completed, or rejected.
    pub fn orders() -> Self {
        StatusMap::new("pending").with_codes([
            ("pending", "pending"),
            ("new", "pending"),
            ("in_progress", "in_progress"),
            ("processing", "in_progress"),
            ("accepted", "in_progress"),
            ("submitted", "in_review"),
            ("in_review", "in_review"),
            ("completed", "completed"),
            ("done", "completed"),
            ("rejected", "rejected"),
            ("cancelled", "rejected"),
        ])
    }

    /// Writer tasks, including the legacy numeric codes.
    pub fn tasks() -> Self {
        StatusMap::new("pending").with_codes([
            ("0", "pending"),
            ("1", "pending"),
            ("assigned", "pending"),
            ("5", "in_progress"),
            ("in_progress", "in_progress"),
            ("6", "in_review"),
            ("submitted", "in_review"),
            ("7", "completed"),
            ("completed", "completed"),
            ("approved", "completed"),
            ("8", "rejected"),
            ("rejected", "rejected"),
        ])
    }

    pub fn notifications() -> Self {
        StatusMap::new("unread").with_codes([
            ("true", "read"),
            ("1", "read"),
            ("read", "read"),
            ("false", "unread"),
            ("0", "unread"),
        ])
    }

    pub fn transactions() -> Self {
        StatusMap::new("pending").with_codes([
            ("pending", "pending"),
            ("success", "completed"),
            ("completed", "completed"),
            ("paid", "completed"),
            ("failed", "failed"),
            ("declined", "failed"),
            ("refunded", "refunded"),
        ])
    }
}
