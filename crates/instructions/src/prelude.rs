//! Prelude module for convenient imports.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_instructions::prelude::*;
//! use serde_json::json;
//!
//! let merged = merge([json!("isString"), json!({ "minLength": 3 })]);
//! assert!(validate(&json!("abc"), merged).is_ok());
//! ```

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub use crate::{count_checks, describe, has_checks, merge, normalize, validate};

// ============================================================================
// TYPES
// ============================================================================

pub use crate::error::{Result, ValidationError};
pub use crate::evaluator::Validator;
pub use crate::instruction::{CheckNode, Instruction, LooseInstruction, NormalizedInstruction};
pub use crate::options::ValidationOptions;
pub use crate::report::{Failure, Mismatch, Validated, ValidationReport};

// ============================================================================
// EXTENDING
// ============================================================================

pub use crate::check;
pub use crate::foundation::{Check, CheckRegistry, negated};
