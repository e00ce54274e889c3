//! Presence checks
//!
//! An absent value is JSON `null`.

use crate::foundation::Check;
use serde_json::Value;

/// Passes when the value is absent (`null`).
///
/// The default instruction is this check negated: `{ "absent": false }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Absent;

impl Check for Absent {
    fn evaluate(&self, value: &Value, _args: &[Value]) -> bool {
        value.is_null()
    }

    fn describe(&self, negate: bool, _args: &[Value]) -> String {
        if negate {
            "a present value".to_owned()
        } else {
            "an absent value".to_owned()
        }
    }
}

crate::check! {
    /// Passes for `null`, `""`, `[]` and `{}`.
    pub Empty;
    evaluate(value) {
        match value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
    describe { "empty" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent() {
        assert!(Absent.evaluate(&Value::Null, &[]));
        assert!(!Absent.evaluate(&json!(0), &[]));
        assert!(!Absent.evaluate(&json!(""), &[]));
        assert_eq!(Absent.describe(true, &[]), "a present value");
        assert_eq!(Absent.describe(false, &[]), "an absent value");
    }

    #[test]
    fn test_empty() {
        for value in [json!(null), json!(""), json!([]), json!({})] {
            assert!(Empty.evaluate(&value, &[]), "{value} should be empty");
        }
        for value in [json!(0), json!(false), json!(" "), json!([null]), json!({"a": 1})] {
            assert!(!Empty.evaluate(&value, &[]), "{value} should not be empty");
        }
        assert_eq!(Empty.describe(true, &[]), "not empty");
    }
}
