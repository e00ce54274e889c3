//! Macros for declaring checks with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`check!`]: create a unit check (struct + [`Check`](crate::foundation::Check) impl)
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_instructions::check;
//!
//! // Check without arguments
//! check! {
//!     /// Passes for even integers.
//!     pub IsEven;
//!     evaluate(value) { value.as_i64().is_some_and(|n| n % 2 == 0) }
//!     describe { "an even integer" }
//! }
//!
//! // Check reading its instruction arguments
//! check! {
//!     pub DivisibleBy;
//!     evaluate(value, args) {
//!         match (value.as_i64(), args.first().and_then(|d| d.as_i64())) {
//!             (Some(n), Some(d)) if d != 0 => n % d == 0,
//!             _ => false,
//!         }
//!     }
//!     describe(args) { format!("divisible by {}", args[0]) }
//! }
//! ```

// ============================================================================
// CHECK MACRO
// ============================================================================

/// Creates a unit check: struct definition and `Check` implementation.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]` is always
/// applied. The `describe` body yields the positive expectation text; the
/// negated form is produced with [`negated`](crate::foundation::negated).
///
/// # Variants
///
/// **Without arguments**:
/// ```rust,ignore
/// check! {
///     pub IsString;
///     evaluate(value) { value.is_string() }
///     describe { "a string" }
/// }
/// ```
///
/// **With arguments** (`args` is `&[Value]`):
/// ```rust,ignore
/// check! {
///     pub Min;
///     evaluate(value, args) { ... }
///     describe(args) { format!("at least {}", args[0]) }
/// }
/// ```
#[macro_export]
macro_rules! check {
    // ── Variant 1: check ignoring its arguments ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        evaluate($value:ident) $rule:block
        describe $text:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Check for $name {
            fn evaluate(&self, $value: &$crate::Value, _args: &[$crate::Value]) -> bool {
                $rule
            }

            fn describe(&self, negate: bool, _args: &[$crate::Value]) -> String {
                let text = $text;
                $crate::foundation::negated(::std::convert::AsRef::<str>::as_ref(&text), negate)
            }
        }
    };

    // ── Variant 2: check reading its arguments ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        evaluate($value:ident, $args:ident) $rule:block
        describe($dargs:ident) $text:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Check for $name {
            #[allow(unused_variables)]
            fn evaluate(&self, $value: &$crate::Value, $args: &[$crate::Value]) -> bool {
                $rule
            }

            fn describe(&self, negate: bool, $dargs: &[$crate::Value]) -> String {
                let text = $text;
                $crate::foundation::negated(::std::convert::AsRef::<str>::as_ref(&text), negate)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::Check;
    use serde_json::json;

    crate::check! {
        /// Test check without arguments.
        IsEven;
        evaluate(value) { value.as_i64().is_some_and(|n| n % 2 == 0) }
        describe { "an even integer" }
    }

    crate::check! {
        DivisibleBy;
        evaluate(value, args) {
            match (value.as_i64(), args.first().and_then(serde_json::Value::as_i64)) {
                (Some(n), Some(d)) if d != 0 => n % d == 0,
                _ => false,
            }
        }
        describe(args) { format!("divisible by {}", args[0]) }
    }

    #[test]
    fn test_unit_check() {
        assert!(IsEven.evaluate(&json!(4), &[]));
        assert!(!IsEven.evaluate(&json!("4"), &[]));
        assert_eq!(IsEven.describe(false, &[]), "an even integer");
        assert_eq!(IsEven.describe(true, &[]), "not an even integer");
    }

    #[test]
    fn test_check_with_args() {
        let args = [json!(3)];
        assert!(DivisibleBy.evaluate(&json!(9), &args));
        assert!(!DivisibleBy.evaluate(&json!(10), &args));
        assert!(!DivisibleBy.evaluate(&json!(9), &[json!(0)]));
        assert_eq!(DivisibleBy.describe(true, &args), "not divisible by 3");
    }
}
