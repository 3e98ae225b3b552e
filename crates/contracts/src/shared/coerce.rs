//! Lenient readers for loosely typed API JSON
//!
//! The dashboard API is not strict about types: ids may arrive as numbers or
//! numeric strings, flags as booleans or `"1"`. These helpers normalize that.

use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// Field of a JSON object; missing fields read as null
pub fn field<'a>(obj: &'a Map<String, Value>, name: &str) -> &'a Value {
    obj.get(name).unwrap_or(&NULL)
}

/// Finite number or numeric string (trimmed); anything else is `None`
pub fn to_number_or_null(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    }
}

/// Integral variant of [`to_number_or_null`]; fractional values are rejected
pub fn to_i64_or_null(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    to_number_or_null(value)
        .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
        .map(|f| f as i64)
}

/// Integral 32-bit variant, used for ids and capacities
pub fn to_i32_or_null(value: &Value) -> Option<i32> {
    to_i64_or_null(value).and_then(|i| i32::try_from(i).ok())
}

/// String value, `fallback` for null/missing, text form for other scalars
pub fn to_string_or(value: &Value, fallback: &str) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => fallback.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Trimmed non-empty string; non-strings are `None`
pub fn to_nullable_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => None,
    }
}

/// `true`, non-zero numbers, and `"true"`/`"1"`/`"yes"` (case-insensitive)
pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => {
            let normalized = s.trim().to_lowercase();
            matches!(normalized.as_str(), "true" | "1" | "yes")
        }
        _ => false,
    }
}

/// Boolean when present, `None` for null/missing
pub fn to_boolean_or_null(value: &Value) -> Option<bool> {
    if value.is_null() {
        None
    } else {
        Some(to_boolean(value))
    }
}

/// Array elements as strings; non-arrays are an empty list
pub fn to_string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| items.iter().map(|v| to_string_or(v, "null")).collect())
        .unwrap_or_default()
}
