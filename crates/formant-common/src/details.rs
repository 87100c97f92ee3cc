//! Caller-supplied answers, keyed by label-like strings.

use indexmap::IndexMap;

/// Known answers for a form, in caller insertion order.
///
/// Iteration order matters: fuzzy matching takes the first key above the
/// similarity threshold, so earlier entries win ties. An order-preserving
/// map keeps that policy deterministic.
pub type Details = IndexMap<String, serde_json::Value>;

/// Coerce a stored value to the string applied to a control.
///
/// An explicit JSON null counts as a match with no value, which callers
/// treat as "matched, leave the type default".
pub fn value_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
