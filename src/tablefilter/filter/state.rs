//! # FilterState
//!
//! Owns the search text and filter selection of one list screen and derives
//! the filtered view of the screen's records.
//!
//! ## Lifecycle
//!
//! A state is created per screen with the screen's records (which may still
//! be `None` while loading) and the screen's default filters. The screen
//! refreshes its records through [`FilterState::set_data`]; the view
//! re-derives on the next read.
//!
//! ## Memoization
//!
//! [`FilterState::filtered_data`] caches the kept positions against the
//! `(data revision, search query, filters)` triple. Setting a value equal to
//! the current one leaves the cache valid. The cache only ever skips work:
//! results are identical with or without it.

use super::bar::FilterBarHandler;
use super::matching::filter_indices;
use super::values::FilterValues;
use crate::model::Searchable;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoKey {
    revision: u64,
    search_query: String,
    filters: FilterValues,
}

#[derive(Debug)]
struct Memo {
    key: MemoKey,
    indices: Vec<usize>,
}

#[derive(Debug)]
pub struct FilterState<R> {
    data: Option<Vec<R>>,
    revision: u64,
    search_query: String,
    filters: FilterValues,
    initial_filters: FilterValues,
    memo: RefCell<Option<Memo>>,
}

impl<R: Searchable> FilterState<R> {
    /// `initial_filters` is copied; the caller's value is never aliased.
    pub fn new(data: Option<Vec<R>>, initial_filters: &FilterValues) -> Self {
        Self {
            data,
            revision: 0,
            search_query: String::new(),
            filters: initial_filters.clone(),
            initial_filters: initial_filters.clone(),
            memo: RefCell::new(None),
        }
    }

    /// The records kept by the current search and filters, in input order.
    pub fn filtered_data(&self) -> Vec<&R> {
        let Some(data) = self.data.as_deref() else {
            return Vec::new();
        };

        let key = self.memo_key();
        let mut memo = self.memo.borrow_mut();
        let fresh = memo.as_ref().is_some_and(|m| m.key == key);
        if !fresh {
            let indices = filter_indices(data, &self.search_query, &self.filters);
            tracing::trace!(
                total = data.len(),
                kept = indices.len(),
                "recomputed filtered view"
            );
            *memo = Some(Memo { key, indices });
        }

        let view = memo
            .as_ref()
            .map(|m| m.indices.iter().map(|&i| &data[i]).collect())
            .unwrap_or_default();
        view
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn filters(&self) -> &FilterValues {
        &self.filters
    }

    /// The backing records, `None` while they are not loaded.
    pub fn data(&self) -> Option<&[R]> {
        self.data.as_deref()
    }

    /// Replaces the search text exactly as typed.
    pub fn set_search_query(&mut self, value: impl Into<String>) {
        self.search_query = value.into();
    }

    /// Replaces one filter entry, leaving the others alone.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filters.set(key, value);
    }

    /// Back to an empty search and the filters given at creation.
    pub fn clear(&mut self) {
        self.search_query.clear();
        self.filters = self.initial_filters.clone();
    }

    /// Swaps in a refreshed record collection.
    pub fn set_data(&mut self, data: Option<Vec<R>>) {
        self.data = data;
        self.revision = self.revision.wrapping_add(1);
    }

    /// True when search and filters are exactly as created.
    pub fn is_default(&self) -> bool {
        self.search_query.is_empty() && self.filters == self.initial_filters
    }

    fn memo_key(&self) -> MemoKey {
        MemoKey {
            revision: self.revision,
            search_query: self.search_query.clone(),
            filters: self.filters.clone(),
        }
    }

    #[cfg(test)]
    fn memo_revision(&self) -> Option<u64> {
        self.memo.borrow().as_ref().map(|m| m.key.revision)
    }
}

impl<R: Searchable> FilterBarHandler for FilterState<R> {
    fn on_search_change(&mut self, value: String) {
        self.set_search_query(value);
    }

    fn on_filter_change(&mut self, key: String, value: String) {
        self.set_filter(key, value);
    }

    fn on_clear_filters(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use serde_json::json;

    fn orders() -> Vec<Record> {
        serde_json::from_value(json!([
            {"id": 1, "status": "pending", "domain": "x.com"},
            {"id": 2, "status": "done", "domain": "y.com"}
        ]))
        .unwrap()
    }

    fn ids(state: &FilterState<Record>) -> Vec<i64> {
        state
            .filtered_data()
            .iter()
            .map(|r| r["id"].as_i64().unwrap())
            .collect()
    }

    #[test]
    fn starts_with_empty_search_and_initial_filters() {
        let initial = FilterValues::new().with("status", "pending");
        let state = FilterState::new(Some(orders()), &initial);

        assert_eq!(state.search_query(), "");
        assert_eq!(state.filters(), &initial);
        assert_eq!(ids(&state), vec![1]);
    }

    #[test]
    fn missing_data_yields_empty_view() {
        let mut state: FilterState<Record> = FilterState::new(None, &FilterValues::new());
        state.set_search_query("anything");
        state.set_filter("status", "done");
        assert!(state.filtered_data().is_empty());
        assert!(state.data().is_none());
    }

    #[test]
    fn clear_restores_initial_filters_not_an_empty_map() {
        let initial = FilterValues::new().with("status", "all");
        let mut state = FilterState::new(Some(orders()), &initial);

        state.set_filter("status", "done");
        state.set_filter("domain", "y.com");
        state.set_search_query("y");
        state.clear();

        assert_eq!(state.search_query(), "");
        assert_eq!(state.filters(), &FilterValues::new().with("status", "all"));
        assert!(state.is_default());
    }

    #[test]
    fn caller_filters_are_not_aliased() {
        let mut initial = FilterValues::new().with("status", "pending");
        let mut state = FilterState::new(Some(orders()), &initial);
        initial.set("status", "done");

        state.set_filter("status", "all");
        state.clear();
        assert_eq!(state.filters().get("status"), Some("pending"));
    }

    #[test]
    fn search_value_is_kept_as_typed() {
        let mut state = FilterState::new(Some(orders()), &FilterValues::new());
        state.set_search_query("  Y.com ");
        assert_eq!(state.search_query(), "  Y.com ");
        assert_eq!(ids(&state), vec![2]);
    }

    #[test]
    fn refreshed_data_rederives_view() {
        let mut state = FilterState::new(Some(orders()), &FilterValues::new());
        state.set_search_query("z.com");
        assert!(state.filtered_data().is_empty());

        let mut refreshed = orders();
        refreshed.push(
            serde_json::from_value(json!({"id": 3, "status": "pending", "domain": "z.com"}))
                .unwrap(),
        );
        state.set_data(Some(refreshed));
        assert_eq!(ids(&state), vec![3]);
    }

    #[test]
    fn memo_is_reused_until_an_input_changes() {
        let mut state = FilterState::new(Some(orders()), &FilterValues::new());
        assert_eq!(state.memo_revision(), None);

        state.filtered_data();
        assert_eq!(state.memo_revision(), Some(0));

        state.set_search_query("x");
        assert_eq!(ids(&state), vec![1]);
        state.set_search_query("x");
        assert_eq!(ids(&state), vec![1]);

        state.set_data(Some(orders()));
        state.filtered_data();
        assert_eq!(state.memo_revision(), Some(1));
    }

    #[test]
    fn handler_callbacks_drive_state() {
        let mut state =
            FilterState::new(Some(orders()), &FilterValues::new().with("status", "all"));
        state.on_filter_change("status".into(), "done".into());
        assert_eq!(ids(&state), vec![2]);

        state.on_search_change("x".into());
        assert!(state.filtered_data().is_empty());

        state.on_clear_filters();
        assert_eq!(ids(&state), vec![1, 2]);
    }
}
