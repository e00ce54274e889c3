//! The contract every named check implements.

use serde_json::Value;
use std::fmt;

// ============================================================================
// CORE CHECK TRAIT
// ============================================================================

/// A named predicate over a JSON value.
///
/// Checks are looked up by name through a
/// [`CheckRegistry`](crate::foundation::CheckRegistry). The arguments come from
/// the instruction (`{ "min": 3 }` calls `min` with `[3]`); negation is handled
/// by the evaluator, so `evaluate` always answers for the positive form.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_instructions::foundation::Check;
/// use serde_json::Value;
///
/// #[derive(Debug)]
/// struct IsEven;
///
/// impl Check for IsEven {
///     fn evaluate(&self, value: &Value, _args: &[Value]) -> bool {
///         value.as_i64().is_some_and(|n| n % 2 == 0)
///     }
///
///     fn describe(&self, negate: bool, _args: &[Value]) -> String {
///         negated("an even integer", negate)
///     }
/// }
/// ```
pub trait Check: fmt::Debug + Send + Sync {
    /// Returns true when `value` satisfies the positive form of the check.
    fn evaluate(&self, value: &Value, args: &[Value]) -> bool;

    /// Describes what the check expects, e.g. `"an integer"` or, negated,
    /// `"not an integer"`. The text is spliced into failure messages of the
    /// form `expected {text} but ... was provided.`
    fn describe(&self, negate: bool, args: &[Value]) -> String;
}

/// Prefixes `text` with `not ` when `negate` is set.
#[must_use]
pub fn negated(text: &str, negate: bool) -> String {
    if negate {
        format!("not {text}")
    } else {
        text.to_owned()
    }
}
