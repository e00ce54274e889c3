//! Utility functions for describing and comparing `serde_json::Value`

use serde_json::{Number, Value};
use std::cmp::Ordering;

/// Longest string excerpt quoted in a value description.
const MAX_EXCERPT_CHARS: usize = 32;

/// Get the kind of a Value for error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if is_integer_number(n) => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check if a number represents an integer, including floats with no
/// fractional part such as `5.0`
#[inline]
pub fn is_integer_number(num: &Number) -> bool {
    num.is_i64() || num.is_u64() || num.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

/// Order two numbers by magnitude.
///
/// Integers (and floats with no fractional part) compare exactly, so
/// `u64` values beyond `f64` precision stay distinct. Anything else falls
/// back to `f64` ordering.
pub fn compare_numbers(left: &Number, right: &Number) -> Option<Ordering> {
    match (exact_integer(left), exact_integer(right)) {
        (Some(l), Some(r)) => Some(l.cmp(&r)),
        _ => left.as_f64()?.partial_cmp(&right.as_f64()?),
    }
}

fn exact_integer(num: &Number) -> Option<i128> {
    if let Some(n) = num.as_i64() {
        return Some(n.into());
    }
    if let Some(n) = num.as_u64() {
        return Some(n.into());
    }
    // well inside i128 range, so the cast is exact
    num.as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < 1e30)
        .map(|f| f as i128)
}

/// Compare two values, treating numbers by magnitude (`5 == 5.0`)
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => compare_numbers(l, r) == Some(Ordering::Equal),
        (Value::Array(l), Value::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r).all(|(l, r)| values_equal(l, r))
        }
        (Value::Object(l), Value::Object(r)) => {
            l.len() == r.len()
                && l.iter()
                    .all(|(key, l)| r.get(key).is_some_and(|r| values_equal(l, r)))
        }
        _ => left == right,
    }
}

/// Describe a value for the "provided" half of a failure message.
///
/// With `indefinite_article` the kind is prefixed with `a`/`an`:
/// `an integer (5)`, `a string ("abc")`. `null` never takes an article.
pub fn describe_value(value: &Value, indefinite_article: bool) -> String {
    let kind = value_kind(value);
    let noun = if indefinite_article && !value.is_null() {
        format!("{} {kind}", article_for(kind))
    } else {
        kind.to_owned()
    };

    match value {
        Value::Null => noun,
        Value::Bool(b) => format!("{noun} ({b})"),
        Value::Number(n) => format!("{noun} ({n})"),
        Value::String(s) => format!("{noun} ({})", quoted_excerpt(s)),
        Value::Array(items) => format!("{noun} of length {}", items.len()),
        Value::Object(map) => match map.len() {
            0 => format!("{noun} with no keys"),
            1 => format!("{noun} with 1 key"),
            n => format!("{noun} with {n} keys"),
        },
    }
}

fn article_for(word: &str) -> &'static str {
    match word.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

fn quoted_excerpt(s: &str) -> String {
    if s.chars().count() <= MAX_EXCERPT_CHARS {
        return format!("{s:?}");
    }
    let head: String = s.chars().take(MAX_EXCERPT_CHARS).collect();
    format!("{:?}...", head)
}

/// Render a value compactly for expectation text (`5`, `"abc"`, `[1,2]`)
pub fn render_value(value: &Value) -> String {
    value.to_string()
}

/// Length of a string (in characters), array or object
pub fn value_length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => Some(map.len()),
        _ => None,
    }
}
