//! Loose instruction input
//!
//! The accepted input shapes, before normalization:
//!
//! - a JSON primitive: `"isString"`, `5`, `true`
//! - a JSON list: `["isInteger", "isString"]` (any of)
//! - a JSON object: a check shorthand `{ "check": "min", "args": [3] }`,
//!   collection keywords `{ "all": [...], "or": [...] }`, or implicit checks
//!   `{ "isString": true, "minLength": 3 }`
//! - an already normalized tree
//! - the conjunction produced by [`merge`](crate::merge)
//!
//! Options that JSON cannot express (a computed default) or that should not
//! be spliced into the JSON are set with the builder methods and take
//! precedence over option keys found in the JSON root.

use super::NormalizedInstruction;
use crate::error::BoxError;
use crate::evaluator::Validator;
use crate::options::{DefaultValue, ExtractedOptions};
use crate::report::ValidationReport;
use serde_json::Value;
use std::sync::Arc;

/// Body of a loose instruction.
#[derive(Debug, Clone)]
pub(crate) enum LooseBody {
    /// Loose JSON syntax. `null` is the absent instruction.
    Json(Value),
    /// Already canonical.
    Normalized(NormalizedInstruction),
    /// `{ "and": [...] }` over bodies that may not be JSON.
    Conjunction(Vec<LooseBody>),
}

/// Instruction input accepted by `validate`, `describe` and friends.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_instructions::{LooseInstruction, validate};
/// use serde_json::json;
///
/// let instructions = LooseInstruction::from(json!({ "isInteger": true }))
///     .default_with(|report, _validator| Ok(json!(report.initial_value.to_string().len())));
/// ```
#[derive(Debug, Clone)]
pub struct LooseInstruction {
    pub(crate) body: LooseBody,
    pub(crate) overrides: ExtractedOptions,
}

impl LooseInstruction {
    /// The absent instruction; validation falls back to "value is not absent".
    pub fn absent() -> Self {
        Self::from_body(LooseBody::Json(Value::Null))
    }

    pub(crate) fn from_body(body: LooseBody) -> Self {
        Self {
            body,
            overrides: ExtractedOptions::default(),
        }
    }

    /// Returns true for the absent instruction.
    pub fn is_absent(&self) -> bool {
        matches!(self.body, LooseBody::Json(Value::Null))
    }

    /// Returns the JSON body, if this instruction is plain loose JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match &self.body {
            LooseBody::Json(value) => Some(value),
            LooseBody::Normalized(_) | LooseBody::Conjunction(_) => None,
        }
    }

    /// Sets `throw_on_failure`. A default value still disables throwing.
    #[must_use = "builder methods must be chained or built"]
    pub fn throw_on_failure(mut self, throw: bool) -> Self {
        self.overrides.throw_on_failure = Some(throw);
        self
    }

    /// Sets `allow_absent`.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_absent(mut self, allow: bool) -> Self {
        self.overrides.allow_absent = Some(allow);
        self
    }

    /// Returns `value` instead of failing.
    #[must_use = "builder methods must be chained or built"]
    pub fn default_value(mut self, value: Value) -> Self {
        self.overrides.default_value = Some(DefaultValue::Value(value));
        self
    }

    /// Computes the value returned instead of failing. The provider receives
    /// the failure report and the validator; its errors propagate unchanged.
    #[must_use = "builder methods must be chained or built"]
    pub fn default_with<F>(mut self, provider: F) -> Self
    where
        F: Fn(&ValidationReport, &Validator) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.overrides.default_value = Some(DefaultValue::Computed(Arc::new(provider)));
        self
    }

    /// Sets `return_full_result`.
    #[must_use = "builder methods must be chained or built"]
    pub fn return_full_result(mut self, full: bool) -> Self {
        self.overrides.return_full_result = Some(full);
        self
    }

    /// Sets `debug`.
    #[must_use = "builder methods must be chained or built"]
    pub fn debug(mut self, debug: bool) -> Self {
        self.overrides.debug = Some(debug);
        self
    }
}

impl Default for LooseInstruction {
    fn default() -> Self {
        Self::absent()
    }
}

impl From<Value> for LooseInstruction {
    fn from(value: Value) -> Self {
        Self::from_body(LooseBody::Json(value))
    }
}

impl From<&Value> for LooseInstruction {
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

impl From<&str> for LooseInstruction {
    fn from(name: &str) -> Self {
        Self::from(Value::String(name.to_owned()))
    }
}

impl From<String> for LooseInstruction {
    fn from(name: String) -> Self {
        Self::from(Value::String(name))
    }
}

impl From<NormalizedInstruction> for LooseInstruction {
    fn from(instruction: NormalizedInstruction) -> Self {
        Self::from_body(LooseBody::Normalized(instruction))
    }
}

impl From<&NormalizedInstruction> for LooseInstruction {
    fn from(instruction: &NormalizedInstruction) -> Self {
        Self::from(instruction.clone())
    }
}

impl<T: Into<LooseInstruction>> From<Option<T>> for LooseInstruction {
    fn from(instruction: Option<T>) -> Self {
        instruction.map_or_else(Self::absent, Into::into)
    }
}
