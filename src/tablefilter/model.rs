//! # Records and match strings
//!
//! A [`Record`] is one row of list data as it arrives from the REST API: a JSON
//! object with no schema the engine relies on. The only thing the engine ever
//! asks of a field is its *match string*, the display form used for search and
//! filter comparisons.
//!
//! Coercion is explicit rather than implicit:
//!
//! | JSON value | match string                               |
//! |------------|--------------------------------------------|
//! | string     | the string itself                          |
//! | number     | its display form (`42`, `1.5`, `1.0` → `1`) |
//! | bool       | `true` / `false`                           |
//! | null       | none (never matches)                       |
//! | array      | elements joined by `,` (null as `""`)      |
//! | object     | `[object Object]`                          |
//!
//! Integral floats print without a fractional part, so `5` and `5.0` share a
//! match string. Nested arrays flatten the same way. Objects are never searched field by
//! field.

use serde_json::{Map, Number, Value};
use std::borrow::Cow;

/// One row of list data (order, task, transaction, site, notification).
pub type Record = Map<String, Value>;

const OBJECT_MATCH_STRING: &str = "[object Object]";

/// Coerces a field value to the string used for matching.
///
/// Returns `None` for null, which callers treat as a non-match for both search
/// and filter checks.
pub fn to_match_string(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        Value::Number(n) => Some(Cow::Owned(number_match_string(n))),
        Value::Array(items) => Some(Cow::Owned(join_shallow(items))),
        Value::Object(_) => Some(Cow::Borrowed(OBJECT_MATCH_STRING)),
    }
}

fn number_match_string(n: &Number) -> String {
    match n.as_f64() {
        // `+ 0.0` folds -0 into 0.
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => (f + 0.0).to_string(),
        _ => n.to_string(),
    }
}

fn join_shallow(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => Cow::Borrowed(""),
            Value::Array(inner) => Cow::Owned(join_shallow(inner)),
            other => to_match_string(other).unwrap_or(Cow::Borrowed("")),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Anything the filter engine can search and filter.
///
/// The engine never assumes specific fields: it asks for every field's match
/// string (search) and for the match string of a named field (filters).
pub trait Searchable {
    /// Match string of the named field, `None` when missing or null.
    fn field_match_string(&self, key: &str) -> Option<Cow<'_, str>>;

    /// Calls `f` with the match string of every non-null field until it
    /// returns `true`. Returns whether any call did.
    fn any_match_string(&self, f: &mut dyn FnMut(&str) -> bool) -> bool;
}

impl Searchable for Record {
    fn field_match_string(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).and_then(to_match_string)
    }

    fn any_match_string(&self, f: &mut dyn FnMut(&str) -> bool) -> bool {
        self.values().filter_map(to_match_string).any(|s| f(&s))
    }
}

impl Searchable for Value {
    fn field_match_string(&self, key: &str) -> Option<Cow<'_, str>> {
        match self {
            Value::Object(map) => map.field_match_string(key),
            _ => None,
        }
    }

    fn any_match_string(&self, f: &mut dyn FnMut(&str) -> bool) -> bool {
        match self {
            Value::Object(map) => map.any_match_string(f),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn scalars_coerce_to_display_form() {
        assert_eq!(to_match_string(&json!("x.com")).unwrap(), "x.com");
        assert_eq!(to_match_string(&json!(42)).unwrap(), "42");
        assert_eq!(to_match_string(&json!(1.5)).unwrap(), "1.5");
        assert_eq!(to_match_string(&json!(true)).unwrap(), "true");
        assert!(to_match_string(&Value::Null).is_none());
    }

    #[test]
    fn integral_floats_drop_the_fraction() {
        assert_eq!(to_match_string(&json!(1.0)).unwrap(), "1");
        assert_eq!(to_match_string(&json!(5.0)).unwrap(), "5");
        assert_eq!(to_match_string(&json!(-0.0)).unwrap(), "0");
        assert_eq!(to_match_string(&json!(-12.0)).unwrap(), "-12");
        assert_eq!(
            to_match_string(&json!(1e20)).unwrap(),
            "100000000000000000000"
        );
        assert_eq!(to_match_string(&json!(0.25)).unwrap(), "0.25");
        assert_eq!(to_match_string(&json!([1.0, 2.5])).unwrap(), "1,2.5");
    }

    #[test]
    fn containers_coerce_shallowly() {
        assert_eq!(
            to_match_string(&json!(["a", 1, null, true])).unwrap(),
            "a,1,,true"
        );
        assert_eq!(
            to_match_string(&json!([["a", "b"], {"k": 1}])).unwrap(),
            "a,b,[object Object]"
        );
        assert_eq!(
            to_match_string(&json!({"inner": "secret"})).unwrap(),
            "[object Object]"
        );
    }

    #[test]
    fn record_field_lookup_treats_missing_and_null_alike() {
        let r = record(json!({"id": 1, "note": null}));
        assert_eq!(r.field_match_string("id").unwrap(), "1");
        assert!(r.field_match_string("note").is_none());
        assert!(r.field_match_string("absent").is_none());
    }

    #[test]
    fn any_match_string_skips_null_fields() {
        let r = record(json!({"note": null, "domain": "y.com"}));
        let mut seen = Vec::new();
        r.any_match_string(&mut |s| {
            seen.push(s.to_string());
            false
        });
        assert_eq!(seen, vec!["y.com".to_string()]);
    }

    #[test]
    fn non_object_values_have_no_fields() {
        let v = json!("plain");
        assert!(v.field_match_string("anything").is_none());
        assert!(!v.any_match_string(&mut |_| true));
    }
}
