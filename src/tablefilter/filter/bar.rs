//! # FilterBar
//!
//! The filter bar has no state of its own. [`FilterBar::project`] turns the
//! current search text, selection and facet list into a [`FilterBarView`]
//! that a UI renders as a search input, one select per facet and a clear
//! control. User actions come back as [`FilterIntent`]s, routed to whoever
//! owns the state through [`FilterBarHandler`].

use super::facet::{FilterSpec, ALL};
use super::values::FilterValues;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three callbacks a filter bar emits.
pub trait FilterBarHandler {
    fn on_search_change(&mut self, value: String);
    fn on_filter_change(&mut self, key: String, value: String);
    fn on_clear_filters(&mut self);
}

/// A user action on the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterIntent {
    SearchChanged(String),
    FilterChanged { key: String, value: String },
    ClearRequested,
}

impl FilterIntent {
    pub fn dispatch<H: FilterBarHandler + ?Sized>(self, handler: &mut H) {
        match self {
            FilterIntent::SearchChanged(value) => handler.on_search_change(value),
            FilterIntent::FilterChanged { key, value } => handler.on_filter_change(key, value),
            FilterIntent::ClearRequested => handler.on_clear_filters(),
        }
    }

    /// Parses the line form used by scripted sessions:
    ///
    /// ```text
    /// search <text>          (text kept verbatim, may be empty)
    /// filter <key> <value>   (value is the rest of the line, may contain spaces)
    /// clear
    /// ```
    pub fn parse(line: &str) -> Result<Self, IntentParseError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let invalid = || IntentParseError(line.to_string());
        let (verb, rest) = match line.trim_start().split_once(' ') {
            Some((verb, rest)) => (verb, Some(rest)),
            None => (line.trim(), None),
        };

        match verb {
            "search" => Ok(FilterIntent::SearchChanged(rest.unwrap_or_default().to_string())),
            "filter" => {
                let (key, value) = rest
                    .map(str::trim_start)
                    .and_then(|rest| rest.split_once(char::is_whitespace))
                    .ok_or_else(invalid)?;
                Ok(FilterIntent::FilterChanged {
                    key: key.to_string(),
                    value: value.trim_start().to_string(),
                })
            }
            "clear" if rest.is_none_or(|rest| rest.trim().is_empty()) => {
                Ok(FilterIntent::ClearRequested)
            }
            _ => Err(invalid()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentParseError(pub String);

impl fmt::Display for IntentParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid intent '{}' (expected 'search <text>', 'filter <key> <value>' or 'clear')",
            self.0
        )
    }
}

impl std::error::Error for IntentParseError {}

/// One option of a rendered select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// One rendered facet select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectView {
    pub key: String,
    pub label: String,
    pub selected: String,
    pub options: Vec<SelectOptionView>,
}

/// Everything a UI needs to draw the bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterBarView {
    pub search: String,
    pub selects: Vec<SelectView>,
    /// Always true: the clear control is never hidden or disabled.
    pub clear_enabled: bool,
}

pub struct FilterBar;

impl FilterBar {
    pub fn project(
        search_query: &str,
        filters: &FilterValues,
        filter_options: &[FilterSpec],
    ) -> FilterBarView {
        let selects = filter_options
            .iter()
            .map(|spec| {
                let selected = filters.get(&spec.key).unwrap_or(ALL).to_string();
                let options = spec
                    .options
                    .iter()
                    .map(|o| SelectOptionView {
                        value: o.value.clone(),
                        label: o.label.clone(),
                        selected: o.value == selected,
                    })
                    .collect();
                SelectView {
                    key: spec.key.clone(),
                    label: spec.label.clone(),
                    selected,
                    options,
                }
            })
            .collect();

        FilterBarView {
            search: search_query.to_string(),
            selects,
            clear_enabled: true,
        }
    }
}

/// Caller-side policy deciding whether a screen shows its bar at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarVisibility {
    #[default]
    Always,
    /// Hidden while there is no data, no search text and filters are at default.
    WhenActive,
}

impl BarVisibility {
    pub fn should_show(
        self,
        data_len: usize,
        search_query: &str,
        filters_at_default: bool,
    ) -> bool {
        match self {
            BarVisibility::Always => true,
            BarVisibility::WhenActive => {
                data_len > 0 || !search_query.is_empty() || !filters_at_default
            }
        }
    }
}

impl fmt::Display for BarVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarVisibility::Always => write!(f, "always"),
            BarVisibility::WhenActive => write!(f, "when-active"),
        }
    }
}

impl std::str::FromStr for BarVisibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(BarVisibility::Always),
            "when-active" => Ok(BarVisibility::WhenActive),
            other => Err(format!(
                "Unknown bar visibility '{}' (expected 'always' or 'when-active')",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_spec() -> FilterSpec {
        FilterSpec::new("status", "Status")
            .with_all("All")
            .option("pending", "Pending")
            .option("done", "Done")
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl FilterBarHandler for Recorder {
        fn on_search_change(&mut self, value: String) {
            self.calls.push(format!("search:{}", value));
        }
        fn on_filter_change(&mut self, key: String, value: String) {
            self.calls.push(format!("filter:{}={}", key, value));
        }
        fn on_clear_filters(&mut self) {
            self.calls.push("clear".into());
        }
    }

    #[test]
    fn absent_key_projects_as_sentinel() {
        let view = FilterBar::project("", &FilterValues::new(), &[status_spec()]);
        let select = &view.selects[0];
        assert_eq!(select.selected, "all");
        assert!(select.options[0].selected);
        assert!(!select.options[1].selected);
        assert!(view.clear_enabled);
    }

    #[test]
    fn projection_follows_state_and_declaration_order() {
        let type_spec = FilterSpec::new("type", "Type").option("guest", "Guest post");
        let filters = FilterValues::new().with("status", "done");
        let view = FilterBar::project("abc", &filters, &[status_spec(), type_spec]);

        assert_eq!(view.search, "abc");
        let keys: Vec<_> = view.selects.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["status", "type"]);
        assert_eq!(view.selects[0].selected, "done");
        assert!(view.selects[0].options[2].selected);
        // No sentinel option declared: nothing is marked selected.
        assert!(view.selects[1].options.iter().all(|o| !o.selected));
    }

    #[test]
    fn filter_values_without_spec_render_nothing() {
        let filters = FilterValues::new().with("hidden", "x");
        let view = FilterBar::project("", &filters, &[]);
        assert!(view.selects.is_empty());
    }

    #[test]
    fn intents_dispatch_to_matching_callback() {
        let mut recorder = Recorder::default();
        FilterIntent::SearchChanged("q".into()).dispatch(&mut recorder);
        FilterIntent::FilterChanged {
            key: "status".into(),
            value: "done".into(),
        }
        .dispatch(&mut recorder);
        FilterIntent::ClearRequested.dispatch(&mut recorder);

        assert_eq!(
            recorder.calls,
            vec!["search:q", "filter:status=done", "clear"]
        );
    }

    #[test]
    fn parses_intent_lines() {
        assert_eq!(
            FilterIntent::parse("search  two words").unwrap(),
            FilterIntent::SearchChanged(" two words".into())
        );
        assert_eq!(
            FilterIntent::parse("search").unwrap(),
            FilterIntent::SearchChanged(String::new())
        );
        assert_eq!(
            FilterIntent::parse("filter status done\n").unwrap(),
            FilterIntent::FilterChanged {
                key: "status".into(),
                value: "done".into(),
            }
        );
        assert_eq!(
            FilterIntent::parse("clear").unwrap(),
            FilterIntent::ClearRequested
        );
        assert!(FilterIntent::parse("filter status").is_err());
        assert!(FilterIntent::parse("clear all").is_err());
        assert!(FilterIntent::parse("sort id").is_err());
    }

    #[test]
    fn filter_value_takes_rest_of_line() {
        assert_eq!(
            FilterIntent::parse("filter category real estate").unwrap(),
            FilterIntent::FilterChanged {
                key: "category".into(),
                value: "real estate".into(),
            }
        );
        assert_eq!(
            FilterIntent::parse("filter  type  ").unwrap(),
            FilterIntent::FilterChanged {
                key: "type".into(),
                value: String::new(),
            }
        );
    }

    #[test]
    fn verbs_tolerate_surrounding_whitespace() {
        assert_eq!(
            FilterIntent::parse("clear ").unwrap(),
            FilterIntent::ClearRequested
        );
        assert_eq!(
            FilterIntent::parse("  clear\r\n").unwrap(),
            FilterIntent::ClearRequested
        );
        assert_eq!(
            FilterIntent::parse(" search x").unwrap(),
            FilterIntent::SearchChanged("x".into())
        );
    }

    #[test]
    fn when_active_hides_idle_bar_only() {
        let policy = BarVisibility::WhenActive;
        assert!(!policy.should_show(0, "", true));
        assert!(policy.should_show(3, "", true));
        assert!(policy.should_show(0, "x", true));
        assert!(policy.should_show(0, "", false));
        assert!(BarVisibility::Always.should_show(0, "", true));
    }

    #[test]
    fn visibility_round_trips_through_text() {
        assert_eq!(
            "when-active".parse::<BarVisibility>(),
            Ok(BarVisibility::WhenActive)
        );
        assert_eq!(BarVisibility::Always.to_string(), "always");
        assert!("sometimes".parse::<BarVisibility>().is_err());
    }
}
