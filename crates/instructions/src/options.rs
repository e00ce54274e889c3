//! Cross-cutting validation options
//!
//! Options live at the root of a loose instruction next to its checks:
//!
//! ```json
//! { "isInteger": true, "throw_on_failure": false, "default_value": 0 }
//! ```
//!
//! They are read without touching the caller's instruction. Keys are only
//! honored in the forms below; anything else is ignored:
//!
//! | key                  | effective when        | default |
//! |----------------------|-----------------------|---------|
//! | `throw_on_failure`   | exactly `false`       | `true`  |
//! | `allow_absent`       | exactly `true`        | `false` |
//! | `default_value`      | present (any value)   | none    |
//! | `return_full_result` | a boolean             | `false` |
//! | `debug`              | exactly `true`        | `false` |
//!
//! A default value always disables throwing.

use crate::error::{BoxError, Result, ValidationError};
use crate::evaluator::Validator;
use crate::instruction::{LooseBody, LooseInstruction};
use crate::report::ValidationReport;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

const THROW_ON_FAILURE: &str = "throw_on_failure";
const ALLOW_ABSENT: &str = "allow_absent";
const DEFAULT_VALUE: &str = "default_value";
const RETURN_FULL_RESULT: &str = "return_full_result";
const DEBUG: &str = "debug";

const OPTION_KEYS: [&str; 5] = [THROW_ON_FAILURE, ALLOW_ABSENT, DEFAULT_VALUE, RETURN_FULL_RESULT, DEBUG];

/// Provider of a computed default value.
pub type DefaultFn = Arc<dyn Fn(&ValidationReport, &Validator) -> Result<Value, BoxError> + Send + Sync>;

// ============================================================================
// DEFAULT VALUE
// ============================================================================

/// Value returned in place of a failed validation.
#[derive(Clone)]
pub enum DefaultValue {
    /// Returned verbatim.
    Value(Value),
    /// Computed from the failure report.
    Computed(DefaultFn),
}

impl DefaultValue {
    /// Produces the default for a failed validation.
    ///
    /// # Errors
    ///
    /// Errors of a computed default are returned as
    /// [`ValidationError::DefaultValue`], unchanged.
    pub fn resolve(&self, report: &ValidationReport, validator: &Validator) -> Result<Value> {
        match self {
            Self::Value(value) => Ok(value.clone()),
            Self::Computed(provider) => provider(report, validator).map_err(ValidationError::DefaultValue),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl Serialize for DefaultValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Computed(_) => serializer.serialize_str("<computed>"),
        }
    }
}

// ============================================================================
// RESOLVED OPTIONS
// ============================================================================

/// Options in effect for one validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationOptions {
    /// Fail with [`ValidationError::Failed`] instead of returning a default.
    pub throw_on_failure: bool,
    /// An absent (`null`) value passes without running any check.
    pub allow_absent: bool,
    /// Returned when validation fails and `throw_on_failure` is off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
    /// Return the full [`ValidationReport`] instead of the final value.
    pub return_full_result: bool,
    /// Log the outcome at `debug` level.
    pub debug: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            throw_on_failure: true,
            allow_absent: false,
            default_value: None,
            return_full_result: false,
            debug: false,
        }
    }
}

// ============================================================================
// EXTRACTED OPTIONS
// ============================================================================

/// Options as written, before defaults are applied.
///
/// `None` means "not specified", which lets [`merge`](crate::merge) combine
/// the options of several instructions before resolving them.
#[derive(Debug, Clone, Default)]
pub struct ExtractedOptions {
    /// `Some(false)` when throwing was turned off.
    pub throw_on_failure: Option<bool>,
    /// `Some(true)` when absent values are allowed.
    pub allow_absent: Option<bool>,
    /// The default value, if any was given.
    pub default_value: Option<DefaultValue>,
    /// Whether the full report was requested.
    pub return_full_result: Option<bool>,
    /// `Some(true)` when debug logging was requested.
    pub debug: Option<bool>,
}

impl ExtractedOptions {
    /// Reads the option keys of an instruction object.
    pub fn from_object(map: &Map<String, Value>) -> Self {
        Self {
            throw_on_failure: map
                .get(THROW_ON_FAILURE)
                .filter(|value| **value == Value::Bool(false))
                .map(|_| false),
            allow_absent: map.get(ALLOW_ABSENT).filter(|value| **value == Value::Bool(true)).map(|_| true),
            default_value: map.get(DEFAULT_VALUE).cloned().map(DefaultValue::Value),
            return_full_result: map.get(RETURN_FULL_RESULT).and_then(Value::as_bool),
            debug: map.get(DEBUG).filter(|value| **value == Value::Bool(true)).map(|_| true),
        }
    }

    /// Reads the options of a loose instruction. Builder overrides win over
    /// keys found in the JSON body.
    pub fn from_loose(loose: &LooseInstruction) -> Self {
        match &loose.body {
            LooseBody::Json(Value::Object(map)) => loose.overrides.clone().or(Self::from_object(map)),
            _ => loose.overrides.clone(),
        }
    }

    /// Fills fields left unspecified here from `later`.
    #[must_use]
    pub fn or(self, later: Self) -> Self {
        Self {
            throw_on_failure: self.throw_on_failure.or(later.throw_on_failure),
            allow_absent: self.allow_absent.or(later.allow_absent),
            default_value: self.default_value.or(later.default_value),
            return_full_result: self.return_full_result.or(later.return_full_result),
            debug: self.debug.or(later.debug),
        }
    }

    /// Returns true when no option was specified.
    pub fn is_empty(&self) -> bool {
        self.throw_on_failure.is_none()
            && self.allow_absent.is_none()
            && self.default_value.is_none()
            && self.return_full_result.is_none()
            && self.debug.is_none()
    }

    /// Applies defaults.
    pub fn resolve(self) -> ValidationOptions {
        let defaults = ValidationOptions::default();
        ValidationOptions {
            throw_on_failure: self.default_value.is_none()
                && self.throw_on_failure.unwrap_or(defaults.throw_on_failure),
            allow_absent: self.allow_absent.unwrap_or(defaults.allow_absent),
            default_value: self.default_value,
            return_full_result: self.return_full_result.unwrap_or(defaults.return_full_result),
            debug: self.debug.unwrap_or(defaults.debug),
        }
    }
}

/// Splits a loose instruction into its unresolved options and a copy of it
/// without option keys. The input is left untouched.
pub fn extract(loose: &LooseInstruction) -> (ExtractedOptions, LooseInstruction) {
    let options = ExtractedOptions::from_loose(loose);
    let body = match &loose.body {
        LooseBody::Json(Value::Object(map)) => LooseBody::Json(Value::Object(
            map.iter()
                .filter(|(key, _)| !OPTION_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )),
        other => other.clone(),
    };
    (options, LooseInstruction::from_body(body))
}

/// Resolved options of a loose instruction.
pub fn extract_options(loose: &LooseInstruction) -> ValidationOptions {
    ExtractedOptions::from_loose(loose).resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn options_of(value: Value) -> ValidationOptions {
        extract_options(&LooseInstruction::from(value))
    }

    #[test]
    fn test_defaults() {
        let options = options_of(json!({ "isString": true }));
        assert!(options.throw_on_failure);
        assert!(!options.allow_absent);
        assert!(options.default_value.is_none());
        assert!(!options.return_full_result);
        assert!(!options.debug);
    }

    #[test]
    fn test_only_exact_values_take_effect() {
        let options = options_of(json!({
            "throw_on_failure": "no",
            "allow_absent": 1,
            "debug": "yes",
        }));
        assert!(options.throw_on_failure);
        assert!(!options.allow_absent);
        assert!(!options.debug);

        let options = options_of(json!({ "throw_on_failure": false, "allow_absent": true, "debug": true }));
        assert!(!options.throw_on_failure);
        assert!(options.allow_absent);
        assert!(options.debug);
    }

    #[test]
    fn test_default_value_disables_throwing() {
        let options = options_of(json!({ "default_value": null, "throw_on_failure": true }));
        assert!(!options.throw_on_failure);
        assert!(matches!(options.default_value, Some(DefaultValue::Value(Value::Null))));

        let options = extract_options(&LooseInstruction::from("isString").default_value(json!(0)));
        assert!(!options.throw_on_failure);
    }

    #[test]
    fn test_overrides_win_over_json_keys() {
        let loose = LooseInstruction::from(json!({ "return_full_result": true })).return_full_result(false);
        assert!(!extract_options(&loose).return_full_result);
    }

    #[test]
    fn test_earlier_options_win() {
        let first = ExtractedOptions {
            debug: Some(true),
            ..ExtractedOptions::default()
        };
        let second = ExtractedOptions {
            debug: Some(false),
            allow_absent: Some(true),
            ..ExtractedOptions::default()
        };
        let combined = first.or(second);
        assert_eq!(combined.debug, Some(true));
        assert_eq!(combined.allow_absent, Some(true));
        assert!(ExtractedOptions::default().is_empty());
        assert!(!combined.is_empty());
    }

    #[test]
    fn test_extract_copies_instead_of_mutating() {
        let input = json!({ "isInteger": true, "throw_on_failure": false, "mixin": "x" });
        let loose = LooseInstruction::from(&input);

        let (options, stripped) = extract(&loose);

        assert_eq!(options.throw_on_failure, Some(false));
        assert_eq!(stripped.as_json(), Some(&json!({ "isInteger": true, "mixin": "x" })));
        assert_eq!(loose.as_json(), Some(&input));
    }

    #[test]
    fn test_serialize_options() {
        let options = options_of(json!({ "default_value": 0 }));
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "throw_on_failure": false,
                "allow_absent": false,
                "default_value": 0,
                "return_full_result": false,
                "debug": false,
            })
        );
    }
}
