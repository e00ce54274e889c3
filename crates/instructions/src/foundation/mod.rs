//! Core building blocks shared by the normalizer, evaluator and describer
//!
//! - **Check contract**: [`Check`], implemented by every named predicate
//! - **Registry**: [`CheckRegistry`], the name → check lookup
//! - **Values**: [`describe_value`] and friends, used to render the
//!   "provided" half of failure messages
//!
//! # Architecture
//!
//! Checks answer a single question about a JSON value and know how to put
//! their expectation into words. Everything else (negation, conjunction,
//! disjunction, defaults) lives in the canonical instruction tree, so a
//! check never needs to know where it sits in that tree:
//!
//! ```rust,ignore
//! use nebula_instructions::foundation::{Check, CheckRegistry};
//! use serde_json::json;
//!
//! let registry = CheckRegistry::new();
//! let is_integer = registry.get("isInteger")?;
//! assert!(is_integer.evaluate(&json!(5), &[]));
//! assert_eq!(is_integer.describe(true, &[]), "not an integer");
//! ```

pub mod check;
pub mod registry;
pub mod value;

pub use check::{Check, negated};
pub use registry::CheckRegistry;
pub use value::{
    compare_numbers, describe_value, is_integer_number, render_value, value_kind, value_length, values_equal,
};
