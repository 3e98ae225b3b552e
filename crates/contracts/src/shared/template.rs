//! Bracket placeholder substitution for localized UI strings
//!
//! Translations carry placeholders like `[count]` or `[name]` which are filled
//! from a key/value map at render time. Unresolved placeholders are kept in the
//! output in brace form (`{key}`) so the UI shows what is missing.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opening marker of a placeholder
pub const PLACEHOLDER_OPEN: char = '[';
/// Closing marker of a placeholder
pub const PLACEHOLDER_CLOSE: char = ']';

/// Value that can be substituted into a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum TemplateValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    /// Unsigned integers beyond `i64::MAX`
    UInt(u64),
    Number(f64),
    Str(String),
}

/// Placeholder key -> value
pub type TemplateValues = HashMap<String, TemplateValue>;

impl TemplateValue {
    pub fn is_null(&self) -> bool {
        matches!(self, TemplateValue::Null)
    }

    /// Canonical text form, `None` for null
    pub fn render(&self) -> Option<String> {
        match self {
            TemplateValue::Null => None,
            TemplateValue::Bool(b) => Some(b.to_string()),
            TemplateValue::Int(n) => Some(n.to_string()),
            TemplateValue::UInt(n) => Some(n.to_string()),
            TemplateValue::Number(n) => Some(format_number(*n)),
            TemplateValue::Str(s) => Some(s.clone()),
        }
    }
}

impl fmt::Display for TemplateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Some(text) => f.write_str(&text),
            None => f.write_str("null"),
        }
    }
}

/// Number formatting as JavaScript prints it: integral values never get a
/// trailing `.0`, magnitudes from 1e21 and below 1e-6 use exponent form
/// (`1e+21`, `1.5e-7`), non-finite values use their JavaScript names.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // covers -0.0
        return "0".to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let exponent_form = format!("{:e}", n);
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => exponent_form,
        };
    }
    // f64 Display is the shortest round-trip form without exponent
    n.to_string()
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        TemplateValue::Str(value.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        TemplateValue::Str(value)
    }
}

impl From<&String> for TemplateValue {
    fn from(value: &String) -> Self {
        TemplateValue::Str(value.clone())
    }
}

impl From<bool> for TemplateValue {
    fn from(value: bool) -> Self {
        TemplateValue::Bool(value)
    }
}

impl From<f64> for TemplateValue {
    fn from(value: f64) -> Self {
        TemplateValue::Number(value)
    }
}

impl From<f32> for TemplateValue {
    fn from(value: f32) -> Self {
        TemplateValue::Number(value as f64)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for TemplateValue {
                fn from(value: $t) -> Self {
                    TemplateValue::Int(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for TemplateValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => TemplateValue::Int(i),
            Err(_) => TemplateValue::UInt(value),
        }
    }
}

impl<T: Into<TemplateValue>> From<Option<T>> for TemplateValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(TemplateValue::Null)
    }
}

impl From<serde_json::Value> for TemplateValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => TemplateValue::Null,
            Value::Bool(b) => TemplateValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    TemplateValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    TemplateValue::UInt(u)
                } else {
                    TemplateValue::Number(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => TemplateValue::Str(s),
            other => TemplateValue::Str(other.to_string()),
        }
    }
}

/// Build a [`TemplateValues`] map from `(key, value)` pairs
pub fn template_values<K, V, I>(pairs: I) -> TemplateValues
where
    K: Into<String>,
    V: Into<TemplateValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Replace `[key]` placeholders in `template` with values from `values`
///
/// Missing keys and null values are rendered as `{key}`. A second `[` inside
/// an open placeholder flushes the partial key as `{partial` and restarts
/// capture. An unterminated placeholder at the end becomes `{partial`.
///
/// # Examples
/// ```
/// use contracts::shared::template::{replace_in_template, template_values};
///
/// let values = template_values([("name", "World")]);
/// assert_eq!(replace_in_template("Hello [name]!", &values), "Hello World!");
/// assert_eq!(replace_in_template("Hello [who]!", &values), "Hello {who}!");
/// ```
pub fn replace_in_template(template: &str, values: &TemplateValues) -> String {
    let mut result = String::with_capacity(template.len());
    let mut key_buffer = String::new();
    let mut inside = false;

    for ch in template.chars() {
        if ch == PLACEHOLDER_OPEN {
            if inside {
                result.push('{');
                result.push_str(&key_buffer);
            }
            inside = true;
            key_buffer.clear();
            continue;
        }

        if ch == PLACEHOLDER_CLOSE && inside {
            inside = false;
            match values.get(key_buffer.as_str()).and_then(TemplateValue::render) {
                Some(text) => result.push_str(&text),
                None => {
                    result.push('{');
                    result.push_str(&key_buffer);
                    result.push('}');
                }
            }
            key_buffer.clear();
            continue;
        }

        if inside {
            key_buffer.push(ch);
        } else {
            result.push(ch);
        }
    }

    if inside {
        result.push('{');
        result.push_str(&key_buffer);
    }

    result
}

/// Same as [`replace_in_template`] with values taken from a JSON object
pub fn replace_in_template_json(
    template: &str,
    values: &serde_json::Map<String, serde_json::Value>,
) -> String {
    let values: TemplateValues = values
        .iter()
        .map(|(k, v)| (k.clone(), TemplateValue::from(v.clone())))
        .collect();
    replace_in_template(template, &values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty() -> TemplateValues {
        TemplateValues::new()
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(replace_in_template("", &empty()), "");
        let values = template_values([("a", "1")]);
        assert_eq!(replace_in_template("", &values), "");
    }

    #[test]
    fn test_passthrough_without_placeholders() {
        let values = template_values([("name", "x")]);
        assert_eq!(replace_in_template("plain text", &values), "plain text");
        assert_eq!(replace_in_template("a ] b } {c}", &values), "a ] b } {c}");
        assert_eq!(replace_in_template("Grüße, Łódź ✓", &values), "Grüße, Łódź ✓");
    }

    #[test]
    fn test_resolved_substitution() {
        let values = template_values([("name", "World")]);
        assert_eq!(replace_in_template("Hello [name]!", &values), "Hello World!");
    }

    #[test]
    fn test_missing_key_fallback() {
        assert_eq!(replace_in_template("Hello [name]!", &empty()), "Hello {name}!");
    }

    #[test]
    fn test_null_value_fallback() {
        let mut values = empty();
        values.insert("x".into(), TemplateValue::Null);
        assert_eq!(replace_in_template("[x]", &values), "{x}");

        let values = template_values([("x", None::<&str>)]);
        assert_eq!(replace_in_template("[x]", &values), "{x}");
    }

    #[test]
    fn test_number_and_bool_coercion() {
        let values = template_values([("n", TemplateValue::from(42)), ("b", TemplateValue::from(true))]);
        assert_eq!(replace_in_template("[n]", &values), "42");
        assert_eq!(replace_in_template("[b]", &values), "true");

        let values = template_values([
            ("f", 42.0_f64),
            ("g", 2.5_f64),
            ("z", -0.0_f64),
            ("inf", f64::INFINITY),
        ]);
        assert_eq!(replace_in_template("[f]|[g]|[z]|[inf]", &values), "42|2.5|0|Infinity");

        let values = template_values([("b", false)]);
        assert_eq!(replace_in_template("[b]", &values), "false");
    }

    #[test]
    fn test_unterminated_placeholder() {
        assert_eq!(replace_in_template("abc [open", &empty()), "abc {open");
        assert_eq!(replace_in_template("abc [", &empty()), "abc {");
        let values = template_values([("open", "x")]);
        assert_eq!(replace_in_template("abc [open", &values), "abc {open");
    }

    #[test]
    fn test_reopen_inside_placeholder() {
        let values = template_values([("b", "X")]);
        assert_eq!(replace_in_template("[a[b]", &values), "{aX");
        assert_eq!(replace_in_template("[[b]", &values), "{X");
        assert_eq!(replace_in_template("[a[c]", &values), "{a{c}");
    }

    #[test]
    fn test_multiple_placeholders() {
        let values = template_values([("a", "1"), ("b", "2")]);
        assert_eq!(replace_in_template("[a]-[b]", &values), "1-2");
        assert_eq!(replace_in_template("[a][a][b]", &values), "112");
    }

    #[test]
    fn test_empty_key_and_case_sensitivity() {
        let values = template_values([("Name", "upper"), ("", "blank")]);
        assert_eq!(replace_in_template("[name]", &values), "{name}");
        assert_eq!(replace_in_template("[Name]", &values), "upper");
        assert_eq!(replace_in_template("[]", &values), "blank");
        assert_eq!(replace_in_template("[]", &empty()), "{}");
    }

    #[test]
    fn test_stray_close_is_literal() {
        let values = template_values([("a", "1")]);
        assert_eq!(replace_in_template("]x[a]]", &values), "]x1]");
    }

    #[test]
    fn test_json_values() {
        let map = json!({
            "count": 3,
            "price": 9.5,
            "open": true,
            "gone": null,
            "name": "Jazz"
        });
        let map = map.as_object().unwrap();
        assert_eq!(
            replace_in_template_json("[name]: [count] x [price] ([open]) [gone]", map),
            "Jazz: 3 x 9.5 (true) {gone}"
        );
    }

    #[test]
    fn test_large_json_integers_keep_exact_digits() {
        let map = json!({"max": 18446744073709551615_u64, "neg": i64::MIN});
        let map = map.as_object().unwrap();
        assert_eq!(
            replace_in_template_json("[max] [neg]", map),
            "18446744073709551615 -9223372036854775808"
        );
        assert_eq!(TemplateValue::from(7_u64), TemplateValue::Int(7));
        assert_eq!(TemplateValue::from(u64::MAX), TemplateValue::UInt(u64::MAX));
    }

    #[test]
    fn test_exponent_form_at_extremes() {
        let values = template_values([
            ("big", 1e21_f64),
            ("below", 1e20_f64),
            ("huge", -2.5e30_f64),
            ("tiny", 1e-7_f64),
            ("small", 1.5e-7_f64),
            ("edge", 0.000001_f64),
        ]);
        assert_eq!(
            replace_in_template("[big]|[below]|[huge]|[tiny]|[small]|[edge]", &values),
            "1e+21|100000000000000000000|-2.5e+30|1e-7|1.5e-7|0.000001"
        );

        let map = json!({"n": 1e21, "m": 1e-7});
        let map = map.as_object().unwrap();
        assert_eq!(replace_in_template_json("[n] [m]", map), "1e+21 1e-7");
    }
}
