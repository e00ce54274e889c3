//! # nebula-instructions
//!
//! Declarative validation instructions for JSON values: a loose, hand-written
//! description of constraints is normalized into a canonical boolean tree,
//! evaluated against a value, and turned into a readable failure message.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nebula_instructions::validate;
//! use serde_json::json;
//!
//! // An integer, or a string that is not empty
//! let instructions = json!(["isInteger", { "isString": true, "notEmpty": true }]);
//!
//! assert_eq!(validate(&json!(5), instructions.clone())?.into_value(), json!(5));
//!
//! let err = validate(&json!(""), instructions).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     r#"expected an integer or (a string && not empty) but a string ("") was provided."#
//! );
//! ```
//!
//! ## Instruction Syntax
//!
//! - `"isString"`, `"!isString"`, `"notEmpty"`: a check, optionally negated
//! - `5`, `true`: equal to that literal
//! - `[a, b]`: any of
//! - `{ "check": "min", "args": [3] }`: one check with arguments
//! - `{ "isString": true, "minLength": 3 }`: all of the implicit checks
//! - `{ "all": [...], "any": [...], "and": [...], "or": [...] }`: collections
//!
//! Options sit next to the checks at the root (`throw_on_failure`,
//! `allow_absent`, `default_value`, `return_full_result`, `debug`); see
//! [`options`].
//!
//! ## Custom Checks
//!
//! Declare a check with the [`check!`] macro or implement
//! [`Check`](foundation::Check), register it in a
//! [`CheckRegistry`](foundation::CheckRegistry) and validate through a
//! [`Validator`] bound to that registry. The free functions use the built-in
//! registry.

pub mod checks;
mod describe;
pub mod error;
pub mod evaluator;
pub mod foundation;
pub mod instruction;
mod macros;
mod merge;
pub mod options;
pub mod prelude;
pub mod report;

pub use serde_json::Value;

pub use error::{BoxError, Result, ValidationError};
pub use evaluator::{Validator, default_instruction};
pub use foundation::{Check, CheckRegistry};
pub use instruction::{CheckNode, Combinator, Instruction, LooseInstruction, MAX_DEPTH, NormalizedInstruction};
pub use merge::merge;
pub use options::{DefaultValue, ValidationOptions};
pub use report::{Failure, Mismatch, Validated, ValidationReport};

use std::sync::LazyLock;

/// Validator over the built-in checks, used by the free functions.
static DEFAULT_VALIDATOR: LazyLock<Validator> = LazyLock::new(Validator::default);

/// The validator behind the free functions.
pub fn default_validator() -> &'static Validator {
    &DEFAULT_VALIDATOR
}

/// Validates `value` with the built-in checks. See [`Validator::validate`].
///
/// # Errors
///
/// [`ValidationError::Failed`] when the value fails and throwing is in
/// effect, or any structural, lookup or default value error.
pub fn validate(value: &Value, instructions: impl Into<LooseInstruction>) -> Result<Validated> {
    DEFAULT_VALIDATOR.validate(value, instructions)
}

/// Describes what an instruction expects, e.g. `an integer or a string`.
///
/// # Errors
///
/// Structural errors, or [`ValidationError::UnknownCheck`].
pub fn describe(instructions: impl Into<LooseInstruction>) -> Result<String> {
    DEFAULT_VALIDATOR.describe(instructions)
}

/// Normalizes an instruction into its canonical tree.
///
/// # Errors
///
/// Returns a structural error for malformed instructions.
pub fn normalize(instructions: impl Into<LooseInstruction>) -> Result<NormalizedInstruction> {
    instruction::normalize(&instructions.into())
}

/// Returns true when the instruction holds at least one check.
///
/// # Errors
///
/// Returns a structural error for malformed instructions.
pub fn has_checks(instructions: impl Into<LooseInstruction>) -> Result<bool> {
    normalize(instructions).map(|tree| tree.has_checks())
}

/// Counts the checks of an instruction, through all nesting.
///
/// # Errors
///
/// Returns a structural error for malformed instructions.
pub fn count_checks(instructions: impl Into<LooseInstruction>) -> Result<usize> {
    normalize(instructions).map(|tree| tree.count_checks())
}
