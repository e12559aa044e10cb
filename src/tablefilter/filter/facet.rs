use serde::{Deserialize, Serialize};

/// Option value meaning "impose no constraint for this key".
pub const ALL: &str = "all";

/// One entry of a facet's option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The `{ value: "all", label }` option conventionally listed first.
    pub fn all(label: impl Into<String>) -> Self {
        Self::new(ALL, label)
    }
}

/// Declarative description of one dropdown facet.
///
/// `key` names the record field matched by equality. Options render in the
/// order given; nothing checks that the sentinel comes first or that values
/// are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub options: Vec<FilterOption>,
}

impl FilterSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            options: Vec::new(),
        }
    }

    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(FilterOption::new(value, label));
        self
    }

    pub fn with_all(mut self, label: impl Into<String>) -> Self {
        self.options.push(FilterOption::all(label));
        self
    }

    /// Label of the option carrying `value`, if any.
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}
