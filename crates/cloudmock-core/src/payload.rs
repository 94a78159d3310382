//! Lenient field extraction from JSON payloads.
//!
//! The mock never rejects a request because an optional field has the
//! wrong type — a non-string `description` is simply treated as absent.
//! These helpers centralize that policy so handlers stay free of ad hoc
//! type tests.

use serde_json::Value;

/// Extract a field as text only when it is present and a JSON string.
///
/// Any other type, JSON null, or absence yields `None`; never an error.
#[must_use]
pub fn optional_string(body: &Value, field: &str) -> Option<String> {
    body.get(field).and_then(Value::as_str).map(ToOwned::to_owned)
}

/// Extract a field coerced to text: strings verbatim, any other non-null
/// value through its JSON rendering. Absent and null both yield `None`.
#[must_use]
pub fn coerce_string(body: &Value, field: &str) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}
