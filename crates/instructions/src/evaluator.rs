//! Evaluation of canonical trees against JSON values
//!
//! [`Validator`] binds a [`CheckRegistry`] and drives a whole validation:
//! options, normalization, evaluation, failure description and defaults.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_instructions::{CheckRegistry, Validator};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let validator = Validator::new(Arc::new(CheckRegistry::new()));
//! let value = validator.validate(&json!(5), json!({ "isInteger": true }))?;
//! assert_eq!(value.into_value(), json!(5));
//! ```

use crate::error::{Result, ValidationError};
use crate::foundation::{CheckRegistry, describe_value};
use crate::instruction::{CheckNode, Instruction, LooseInstruction, NormalizedInstruction, ROOT_DEPTH, enter, normalize};
use crate::options::extract_options;
use crate::report::{Failure, Mismatch, Validated, ValidationReport};
use serde_json::Value;
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace};

/// Used for absent and check-free instructions: "the value is not absent".
static DEFAULT_INSTRUCTION: LazyLock<NormalizedInstruction> = LazyLock::new(|| {
    NormalizedInstruction::new(Instruction::All(vec![
        CheckNode::new("absent", Vec::new()).negated().into(),
    ]))
});

/// The instruction applied when none (or one without checks) is given,
/// equivalent to `{ "absent": false }`.
pub fn default_instruction() -> &'static NormalizedInstruction {
    &DEFAULT_INSTRUCTION
}

/// Validates values against instructions using one check registry.
#[derive(Debug, Clone)]
pub struct Validator {
    registry: Arc<CheckRegistry>,
}

impl Validator {
    /// Creates a validator over `registry`.
    pub fn new(registry: Arc<CheckRegistry>) -> Self {
        Self { registry }
    }

    /// The registry checks are looked up in.
    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Validates `value` against a loose instruction.
    ///
    /// On success the value is returned unchanged. On failure the outcome
    /// depends on the instruction's options: an error carrying the report
    /// (the default), the default value, or `null`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::Failed`] when the value fails and
    ///   `throw_on_failure` is in effect
    /// - structural errors from normalization
    /// - [`ValidationError::UnknownCheck`] for an unregistered check
    /// - [`ValidationError::DefaultValue`] from a computed default
    pub fn validate(&self, value: &Value, instructions: impl Into<LooseInstruction>) -> Result<Validated> {
        self.validate_loose(value, &instructions.into())
    }

    /// Same as [`validate`](Self::validate), borrowing the instruction.
    pub fn validate_loose(&self, value: &Value, loose: &LooseInstruction) -> Result<Validated> {
        let options = extract_options(loose);

        if options.allow_absent && value.is_null() {
            trace!("Absent value allowed, skipping checks");
            return Ok(self.finish(ValidationReport {
                success: true,
                options,
                instructions: None,
                initial_value: Value::Null,
                failure: Some(Failure::Bypassed),
                final_value: Value::Null,
            }));
        }

        let mut instructions = normalize(loose)?;
        if !instructions.has_checks() {
            instructions = default_instruction().clone();
        }

        if self.evaluate(&instructions, value)? {
            return Ok(self.finish(ValidationReport {
                success: true,
                options,
                instructions: Some(instructions),
                initial_value: value.clone(),
                failure: None,
                final_value: value.clone(),
            }));
        }

        let mismatch = Mismatch::new(self.describe_instruction(&instructions)?, describe_value(value, true));
        debug!(failure = %mismatch.message, "Validation failed");

        let mut report = ValidationReport {
            success: false,
            options,
            instructions: Some(instructions),
            initial_value: value.clone(),
            failure: Some(Failure::Mismatch(mismatch)),
            final_value: Value::Null,
        };

        if report.options.throw_on_failure {
            log_outcome(&report);
            return Err(ValidationError::failed(report));
        }

        if let Some(default) = &report.options.default_value {
            report.final_value = default.resolve(&report, self)?;
        }
        Ok(self.finish(report))
    }

    /// Evaluates a canonical tree.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownCheck`] when an evaluated check is
    /// not registered. Checks skipped by short-circuiting are not looked up.
    /// Trees nested past [`MAX_DEPTH`](crate::MAX_DEPTH) fail with
    /// [`ValidationError::TooDeep`].
    pub fn evaluate(&self, instructions: &NormalizedInstruction, value: &Value) -> Result<bool> {
        self.evaluate_node(instructions.root(), value)
    }

    /// Evaluates one node: `All` stops at the first failing child and is true
    /// when empty, `Any` stops at the first passing child and is false when
    /// empty.
    pub fn evaluate_node(&self, node: &Instruction, value: &Value) -> Result<bool> {
        self.evaluate_at(node, value, ROOT_DEPTH)
    }

    fn evaluate_at(&self, node: &Instruction, value: &Value, depth: usize) -> Result<bool> {
        enter(depth)?;
        match node {
            Instruction::Check(check) => {
                let passed = self.registry.get(&check.name)?.evaluate(value, &check.args) != check.negate;
                trace!(check = %check.name, negate = check.negate, passed, "Evaluated check");
                Ok(passed)
            }
            Instruction::All(children) => {
                for child in children {
                    if !self.evaluate_at(child, value, depth + 1)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Instruction::Any(children) => {
                for child in children {
                    if self.evaluate_at(child, value, depth + 1)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }

    fn finish(&self, report: ValidationReport) -> Validated {
        log_outcome(&report);
        if report.options.return_full_result {
            Validated::Report(Box::new(report))
        } else {
            Validated::Value(report.final_value)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(Arc::new(CheckRegistry::new()))
    }
}

fn log_outcome(report: &ValidationReport) {
    if !report.options.debug {
        return;
    }
    debug!(
        success = report.success,
        bypassed = report.is_bypassed(),
        initial_value = %report.initial_value,
        final_value = %report.final_value,
        failure = report.message().unwrap_or_default(),
        "Validation outcome"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn check(name: &str) -> Instruction {
        CheckNode::new(name, Vec::new()).into()
    }

    #[test]
    fn test_vacuous_truth_and_falsity() {
        let validator = Validator::default();
        assert!(validator.evaluate_node(&Instruction::All(Vec::new()), &json!(1)).unwrap());
        assert!(!validator.evaluate_node(&Instruction::Any(Vec::new()), &json!(1)).unwrap());
    }

    #[test]
    fn test_short_circuit_skips_unknown_checks() {
        let validator = Validator::default();
        let any = Instruction::Any(vec![check("isInteger"), check("noSuchCheck")]);
        assert!(validator.evaluate_node(&any, &json!(5)).unwrap());

        let all = Instruction::All(vec![check("isString"), check("noSuchCheck")]);
        assert!(!validator.evaluate_node(&all, &json!(5)).unwrap());

        let err = validator.evaluate_node(&all, &json!("x")).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownCheck(ref name) if name == "noSuchCheck"));
    }

    #[test]
    fn test_negate_flips_verdict() {
        let validator = Validator::default();
        let node = Instruction::Check(CheckNode::new("isString", Vec::new()).negated());
        assert!(validator.evaluate_node(&node, &json!(5)).unwrap());
        assert!(!validator.evaluate_node(&node, &json!("x")).unwrap());
    }

    #[test]
    fn test_hand_built_trees_past_max_depth() {
        let validator = Validator::default();
        let nest = |levels: usize| {
            let tree = (1..levels).fold(check("isInteger"), |inner, _| Instruction::All(vec![inner]));
            NormalizedInstruction::new(tree)
        };

        assert!(validator.evaluate(&nest(crate::MAX_DEPTH), &json!(5)).unwrap());
        assert!(!validator.describe_instruction(&nest(crate::MAX_DEPTH)).unwrap().is_empty());

        let deep = nest(crate::MAX_DEPTH + 1);
        assert!(matches!(validator.evaluate(&deep, &json!(5)), Err(ValidationError::TooDeep { .. })));
        assert!(validator.describe_instruction(&deep).unwrap_err().is_structural());
    }

    #[test]
    fn test_default_instruction() {
        let instruction = default_instruction();
        assert!(instruction.is_all());
        assert_eq!(instruction.count_checks(), 1);

        let validator = Validator::default();
        assert!(validator.evaluate(instruction, &json!(0)).unwrap());
        assert!(!validator.evaluate(instruction, &Value::Null).unwrap());
    }

    #[test]
    fn test_validate_returns_value_unchanged() {
        let validator = Validator::default();
        let value = validator.validate(&json!(5.0), json!({ "isInteger": true })).unwrap();
        assert_eq!(value.into_value(), json!(5.0));
    }

    #[test]
    fn test_failed_report_is_complete() {
        let validator = Validator::default();
        let err = validator.validate(&json!("x"), json!({ "isInteger": true })).unwrap_err();
        let report = err.into_report().unwrap();

        assert!(!report.success);
        assert_eq!(report.initial_value, json!("x"));
        assert_eq!(report.final_value, Value::Null);
        let mismatch = report.mismatch().unwrap();
        assert_eq!(mismatch.expected_text, "an integer");
        assert_eq!(mismatch.provided_text, r#"a string ("x")"#);
    }
}
