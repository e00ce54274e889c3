//! Comparison checks
//!
//! The first argument is the reference value: `{ "equals": 5 }` and
//! `{ "min": 0 }` each carry exactly one argument.

use crate::foundation::{compare_numbers, render_value, values_equal};
use serde_json::Value;
use std::cmp::Ordering;

crate::check! {
    /// Passes when the value equals the first argument (numbers by magnitude).
    ///
    /// A missing argument compares against `null`.
    pub Equals;
    evaluate(value, args) { values_equal(value, args.first().unwrap_or(&Value::Null)) }
    describe(args) {
        format!("equal to {}", render_value(args.first().unwrap_or(&Value::Null)))
    }
}

crate::check! {
    /// Passes when the value equals one of the candidates.
    ///
    /// Candidates are either a single list argument (`{ "oneOf": [1, 2] }`)
    /// or the arguments themselves (`{ "check": "oneOf", "args": [1, 2] }`).
    pub OneOf;
    evaluate(value, args) { candidates(args).iter().any(|candidate| values_equal(value, candidate)) }
    describe(args) {
        let rendered: Vec<String> = candidates(args).iter().map(render_value).collect();
        format!("one of [{}]", rendered.join(", "))
    }
}

crate::check! {
    /// Passes for numbers greater than or equal to the first argument.
    pub Min;
    evaluate(value, args) {
        order_against_bound(value, args).is_some_and(Ordering::is_ge)
    }
    describe(args) { format!("a number of at least {}", render_bound(args)) }
}

crate::check! {
    /// Passes for numbers less than or equal to the first argument.
    pub Max;
    evaluate(value, args) {
        order_against_bound(value, args).is_some_and(Ordering::is_le)
    }
    describe(args) { format!("a number of at most {}", render_bound(args)) }
}

fn candidates(args: &[Value]) -> &[Value] {
    match args {
        [Value::Array(items)] => items.as_slice(),
        _ => args,
    }
}

fn order_against_bound(value: &Value, args: &[Value]) -> Option<Ordering> {
    compare_numbers(value.as_number()?, args.first()?.as_number()?)
}

fn render_bound(args: &[Value]) -> String {
    args.first().map_or_else(|| "null".to_owned(), render_value)
}
