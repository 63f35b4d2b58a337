//! Value classification predicates

use serde_json::Value;

/// Returns `true` if the value is present and not `null`.
pub fn exists(value: Option<&Value>) -> bool {
    matches!(value, Some(v) if !v.is_null())
}

/// Returns `true` if the value is a JSON object.
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// Returns `true` if the value is a JSON array.
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Returns `true` if the value is a JSON string.
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// Returns `true` if the string has content other than whitespace.
pub fn validate_string(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Returns `true` if the value can be turned into a display string without
/// losing structure, i.e. it is a scalar.
pub fn can_be_stringified(value: &Value) -> bool {
    !is_array(value) && !is_object(value)
}

/// Returns the JSON type name of a value, for error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Formats a value for display in a table cell or as a row identity.
///
/// Strings are returned without quotes, `null` becomes the empty string and
/// nested structures are written as compact JSON. Floats without a
/// fractional part print as integers (`1e2` is `100`).
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        nested => nested.to_string(),
    }
}
