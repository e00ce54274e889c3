//! Error types for instruction handling and failed validations
//!
//! Three families of failure share one enum:
//!
//! - **Structural**: the loose instruction cannot be normalized
//!   ([`ValidationError::NotAList`], [`ValidationError::MissingCheckName`],
//!   [`ValidationError::TooDeep`]).
//! - **Lookup**: a check name is not registered ([`ValidationError::UnknownCheck`]).
//!   This is a programmer error and is never retried.
//! - **Validation**: the value did not satisfy the instruction and
//!   `throw_on_failure` was set ([`ValidationError::Failed`]). The full
//!   [`ValidationReport`] travels with the error.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_instructions::{ValidationError, validate};
//! use serde_json::json;
//!
//! let err = validate(&json!("x"), json!({ "isInteger": true })).unwrap_err();
//! assert!(err.is_failure());
//! assert_eq!(err.to_string(), r#"expected an integer but a string ("x") was provided."#);
//! ```

use crate::report::ValidationReport;

/// Boxed error returned by caller-supplied default value providers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate.
pub type Result<T, E = ValidationError> = std::result::Result<T, E>;

/// Error raised by normalization, lookup or a failed validation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A collection keyword (`all`, `any`, `and`, `or`) did not hold a list.
    #[error("`{key}` must be a list of instructions, got {found}")]
    NotAList {
        /// The offending keyword.
        key: &'static str,
        /// JSON kind that was found instead.
        found: &'static str,
    },

    /// A check shorthand carried `args` but no check name.
    #[error("check shorthand has no check name")]
    MissingCheckName,

    /// The instruction nests deeper than
    /// [`MAX_DEPTH`](crate::instruction::MAX_DEPTH) levels.
    #[error("instruction nesting exceeds {max} levels")]
    TooDeep {
        /// The limit that was exceeded.
        max: usize,
    },

    /// The registry has no check under this name.
    #[error("unknown check `{0}`")]
    UnknownCheck(String),

    /// The value failed validation and `throw_on_failure` was set.
    #[error("{}", failure_message(.0))]
    Failed(Box<ValidationReport>),

    /// A caller-supplied default value provider failed.
    #[error(transparent)]
    DefaultValue(BoxError),
}

fn failure_message(report: &ValidationReport) -> &str {
    report.message().unwrap_or("validation failed")
}

// ============================================================================
// CONSTRUCTOR HELPERS
// ============================================================================

impl ValidationError {
    /// Creates a structural error for a collection keyword holding a non-list.
    pub fn not_a_list(key: &'static str, found: &serde_json::Value) -> Self {
        Self::NotAList {
            key,
            found: crate::foundation::value_kind(found),
        }
    }

    /// Creates a lookup error for an unregistered check.
    pub fn unknown_check(name: impl Into<String>) -> Self {
        Self::UnknownCheck(name.into())
    }

    /// Creates a validation failure carrying the full report.
    pub fn failed(report: ValidationReport) -> Self {
        Self::Failed(Box::new(report))
    }

    /// Returns true for malformed instruction errors.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::NotAList { .. } | Self::MissingCheckName | Self::TooDeep { .. })
    }

    /// Returns true for failed validations.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the report attached to a failed validation.
    #[must_use]
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Failed(report) => Some(report),
            _ => None,
        }
    }

    /// Consumes the error and returns the attached report, if any.
    #[must_use]
    pub fn into_report(self) -> Option<ValidationReport> {
        match self {
            Self::Failed(report) => Some(*report),
            _ => None,
        }
    }
}
