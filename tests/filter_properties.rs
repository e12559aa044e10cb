use proptest::prelude::*;
use serde_json::{json, Value};
use tablefilter::filter::{
    filter_records, matches_filters, matches_search, FilterState, FilterValues, ALL,
};
use tablefilter::model::Record;

fn record(value: Value) -> Record {
    serde_json::from_value(value).unwrap()
}

fn id_of(record: &Record) -> i64 {
    record["id"].as_i64().unwrap()
}

fn ids(view: &[&Record]) -> Vec<i64> {
    view.iter().map(|r| id_of(r)).collect()
}

fn orders() -> Vec<Record> {
    vec![
        record(json!({"id": 1, "status": "pending", "domain": "x.com"})),
        record(json!({"id": 2, "status": "done", "domain": "y.com"})),
    ]
}

#[test]
fn test_exact_filter_keeps_matching_status() {
    let state = FilterState::new(
        Some(orders()),
        &FilterValues::new().with("status", "pending"),
    );
    assert_eq!(ids(&state.filtered_data()), vec![1]);
}

#[test]
fn test_search_matches_substring_of_any_field() {
    let mut state = FilterState::new(Some(orders()), &FilterValues::new().with("status", ALL));
    state.set_search_query("y");
    assert_eq!(ids(&state.filtered_data()), vec![2]);
}

#[test]
fn test_null_field_never_matches_search() {
    let mut state = FilterState::new(
        Some(vec![record(json!({"id": 1, "note": null}))]),
        &FilterValues::new(),
    );
    state.set_search_query("test");
    assert!(state.filtered_data().is_empty());
}

#[test]
fn test_unloaded_data_is_always_empty() {
    let mut state: FilterState<Record> =
        FilterState::new(None, &FilterValues::new().with("status", "pending"));
    assert!(state.filtered_data().is_empty());
    state.set_search_query("x");
    state.set_filter("status", ALL);
    assert!(state.filtered_data().is_empty());
}

#[test]
fn test_clear_reverts_to_initial_map_not_empty() {
    let initial = FilterValues::new().with("status", ALL);
    let mut state = FilterState::new(Some(orders()), &initial);
    state.set_filter("status", "done");
    state.clear();
    assert_eq!(state.filters(), &initial);
    assert!(!state.filters().is_empty());
}

fn field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (0i64..20).prop_map(|n| json!(n)),
        "[a-cA-C]{0,4}".prop_map(Value::String),
    ]
}

fn records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (field_value(), field_value(), prop::option::of(field_value())),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (status, name, extra))| {
                let mut r = Record::new();
                r.insert("id".into(), json!(100 + i as i64));
                r.insert("status".into(), status);
                r.insert("name".into(), name);
                if let Some(extra) = extra {
                    r.insert("extra".into(), extra);
                }
                r
            })
            .collect::<Vec<_>>()
    })
}

fn filter_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(ALL.to_string()),
        Just("ALL".to_string()),
        "[a-cA-C]{1,3}",
        (0i64..20).prop_map(|n| n.to_string()),
        Just("true".to_string()),
    ]
}

fn filters() -> impl Strategy<Value = FilterValues> {
    prop::collection::vec(
        (prop_oneof![Just("status"), Just("name"), Just("extra")], filter_value()),
        0..3,
    )
    .prop_map(|pairs| pairs.into_iter().collect::<FilterValues>())
}

fn query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        "[ a-cA-C0-9]{0,4}",
    ]
}

proptest! {
    #[test]
    fn prop_view_is_ordered_subset(data in records(), q in query(), f in filters()) {
        let view = filter_records(&data, &q, &f);
        let positions: Vec<usize> = view
            .iter()
            .map(|kept| data.iter().position(|r| std::ptr::eq(r, *kept)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(view.len() <= data.len());
    }

    #[test]
    fn prop_blank_search_and_sentinels_keep_everything(
        data in records(),
        blank in prop_oneof![Just(""), Just("   "), Just("\t")],
        keys in prop::collection::vec(prop_oneof![Just("status"), Just("name")], 0..3),
        sentinel in prop_oneof![Just(""), Just("all")],
    ) {
        let f: FilterValues = keys.into_iter().map(|k| (k, sentinel)).collect();
        prop_assert_eq!(filter_records(&data, blank, &f).len(), data.len());
    }

    #[test]
    fn prop_empty_search_is_filter_only(data in records(), f in filters()) {
        let expected: Vec<i64> = data
            .iter()
            .filter(|r| matches_filters(*r, &f))
            .map(id_of)
            .collect();
        prop_assert_eq!(ids(&filter_records(&data, "", &f)), expected);
    }

    #[test]
    fn prop_sentinel_filters_are_search_only(
        data in records(),
        q in query(),
        entries in prop::collection::vec(
            (
                prop_oneof![Just("status"), Just("name"), Just("extra")],
                prop_oneof![Just(""), Just(ALL)],
            ),
            0..3,
        ),
    ) {
        let f: FilterValues = entries.into_iter().collect();
        let expected: Vec<i64> = data
            .iter()
            .filter(|r| matches_search(*r, &q))
            .map(id_of)
            .collect();
        prop_assert_eq!(ids(&filter_records(&data, &q, &f)), expected);
    }

    #[test]
    fn prop_clear_is_idempotent(
        data in records(),
        initial in filters(),
        q in query(),
        f in filters(),
    ) {
        let mut state = FilterState::new(Some(data), &initial);
        state.set_search_query(q);
        for (key, value) in f.iter() {
            state.set_filter(key, value);
        }

        state.clear();
        let once = (state.search_query().to_string(), state.filters().clone());
        state.clear();

        prop_assert_eq!(state.search_query(), "");
        prop_assert_eq!(state.filters(), &initial);
        let twice = (state.search_query().to_string(), state.filters().clone());
        prop_assert_eq!(twice, once);
        prop_assert!(state.is_default());
    }

    #[test]
    fn prop_memoized_view_matches_fresh_filtering(
        data in records(),
        steps in prop::collection::vec((query(), filters()), 1..5),
    ) {
        let mut state = FilterState::new(Some(data.clone()), &FilterValues::new());
        for (q, f) in steps {
            state.set_search_query(q.clone());
            for (key, value) in f.iter() {
                state.set_filter(key, value);
            }
            let first = ids(&state.filtered_data());
            let again = ids(&state.filtered_data());
            let fresh = ids(&filter_records(&data, &q, state.filters()));
            prop_assert_eq!(&first, &again);
            prop_assert_eq!(first, fresh);
        }
    }

    #[test]
    fn prop_constrained_filter_requires_equal_field(
        data in records(),
        value in "[a-cA-C]{1,3}",
    ) {
        let f = FilterValues::new().with("name", value.clone());
        for kept in filter_records(&data, "", &f) {
            let name = kept.get("name").and_then(Value::as_str).unwrap_or_default();
            prop_assert_eq!(name.to_lowercase(), value.to_lowercase());
        }
    }
}
