use super::facet::ALL;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current selection state: one option value per facet key.
///
/// A key that is absent, empty or set to [`ALL`] imposes no constraint. Keys
/// without a matching facet are kept as ordinary entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterValues(BTreeMap<String, String>);

impl FilterValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterValues::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Replaces exactly one entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries that actually restrict the view.
    pub fn constraints(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, v)| is_constraint(v))
    }

    /// True when no entry restricts the view.
    pub fn is_unconstrained(&self) -> bool {
        self.constraints().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Whether an option value restricts the view (neither empty nor the sentinel).
pub fn is_constraint(value: &str) -> bool {
    !value.is_empty() && value != ALL
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
