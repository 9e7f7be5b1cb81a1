//! JSON navigation helpers for the ranking API's irregular response shapes.

use serde_json::Value;

/// Follows a chain of object keys, returning `None` if any step is missing.
///
/// A JSON `null` at the end of the path is reported as `None` as well, since
/// the API uses `null` and absence interchangeably for optional data.
pub fn lookup_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let found = path.iter().try_fold(value, |node, key| node.get(*key))?;
    if found.is_null() {
        None
    } else {
        Some(found)
    }
}

/// Normalizes a node the API returns either as a single object or as a list.
///
/// The upstream service collapses one-element lists into a bare object, so
/// every repeated element goes through here before it is iterated:
/// - absent or `null` yields an empty slice
/// - an array yields its elements in order
/// - anything else yields a one-element slice
pub fn one_or_many(value: Option<&Value>) -> &[Value] {
    match value {
        None | Some(Value::Null) => &[],
        Some(Value::Array(items)) => items.as_slice(),
        Some(single) => std::slice::from_ref(single),
    }
}

/// Renders a scalar JSON value as CSV-ready text.
///
/// Strings are returned verbatim, numbers and booleans in their JSON
/// spelling. Arrays, objects and `null` have no scalar text.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Shorthand for `lookup_path` followed by `scalar_text`.
pub fn text_at(value: &Value, path: &[&str]) -> Option<String> {
    lookup_path(value, path).and_then(scalar_text)
}
