//! JSON type checks

use crate::foundation::is_integer_number;

crate::check! {
    /// Passes for JSON strings.
    pub IsString;
    evaluate(value) { value.is_string() }
    describe { "a string" }
}

crate::check! {
    /// Passes for JSON numbers, integral or not.
    pub IsNumber;
    evaluate(value) { value.is_number() }
    describe { "a number" }
}

crate::check! {
    /// Passes for numbers without a fractional part (`5` and `5.0`).
    pub IsInteger;
    evaluate(value) { value.as_number().is_some_and(is_integer_number) }
    describe { "an integer" }
}

crate::check! {
    /// Passes for numbers with a finite `f64` representation.
    pub IsFinite;
    evaluate(value) { value.as_f64().is_some_and(f64::is_finite) }
    describe { "a finite number" }
}

crate::check! {
    /// Passes for `true` and `false`.
    pub IsBoolean;
    evaluate(value) { value.is_boolean() }
    describe { "a boolean" }
}

crate::check! {
    /// Passes for JSON arrays.
    pub IsArray;
    evaluate(value) { value.is_array() }
    describe { "an array" }
}

crate::check! {
    /// Passes for JSON objects.
    pub IsObject;
    evaluate(value) { value.is_object() }
    describe { "an object" }
}
