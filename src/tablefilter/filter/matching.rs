//! Pure matching predicates.
//!
//! A record is kept when it passes the search check AND every filter check.
//! Output order is input order; nothing here sorts.

use super::values::FilterValues;
use crate::model::Searchable;

/// Search text as compared at match time: trimmed and lowercased.
///
/// Returns `None` when the query imposes no constraint.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive substring search across every non-null field.
pub fn matches_search<R: Searchable + ?Sized>(record: &R, query: &str) -> bool {
    match normalize_query(query) {
        None => true,
        Some(needle) => matches_normalized_search(record, &needle),
    }
}

fn matches_normalized_search<R: Searchable + ?Sized>(record: &R, needle: &str) -> bool {
    record.any_match_string(&mut |field| field.to_lowercase().contains(needle))
}

/// Exact, case-insensitive equality on every constrained key.
///
/// A missing or null field fails its check, whatever the filter value.
pub fn matches_filters<R: Searchable + ?Sized>(record: &R, filters: &FilterValues) -> bool {
    filters.constraints().all(|(key, wanted)| {
        record
            .field_match_string(key)
            .is_some_and(|actual| actual.to_lowercase() == wanted.to_lowercase())
    })
}

/// Filters `data` by search and filters, preserving order and borrowing
/// every kept element from the input.
pub fn filter_records<'a, R: Searchable>(
    data: &'a [R],
    query: &str,
    filters: &FilterValues,
) -> Vec<&'a R> {
    filter_indices(data, query, filters)
        .into_iter()
        .map(|i| &data[i])
        .collect()
}

/// Positions of the kept elements, ascending.
pub fn filter_indices<R: Searchable>(
    data: &[R],
    query: &str,
    filters: &FilterValues,
) -> Vec<usize> {
    let needle = normalize_query(query);
    data.iter()
        .enumerate()
        .filter(|(_, record)| {
            needle
                .as_deref()
                .is_none_or(|n| matches_normalized_search(*record, n))
                && matches_filters(*record, filters)
        })
        .map(|(i, _)| i)
        .collect()
}
