//! Validating JSON values with loose instructions.
//!
//! Run with `cargo run -p nebula-instructions --example basic_usage`.

use nebula_instructions::prelude::*;
use serde_json::json;
use std::sync::Arc;

nebula_instructions::check! {
    /// Passes for even integers.
    IsEven;
    evaluate(value) { value.as_i64().is_some_and(|n| n % 2 == 0) }
    describe { "an even integer" }
}

fn main() -> Result<(), ValidationError> {
    // An integer, or a string that is not empty
    let id_rule = json!(["isInteger", { "isString": true, "notEmpty": true }]);

    println!("rule: {}", describe(&id_rule)?);
    println!("42 -> {}", validate(&json!(42), &id_rule)?.value());

    match validate(&json!(""), &id_rule) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("\"\" -> {err}"),
    }

    // Fall back to a default instead of failing
    let port = LooseInstruction::from(json!({ "isInteger": true, "min": 1, "max": 65535 }))
        .default_value(json!(8080));
    println!("\"http\" -> {}", validate(&json!("http"), port)?.value());

    // Combine rules; earlier options win
    let merged = merge([
        json!({ "isString": true, "allow_absent": true }),
        json!({ "maxLength": 8 }),
    ]);
    println!("null -> {}", validate(&json!(null), merged.clone())?.value());

    let report = validate(&json!("a very long name"), LooseInstruction::from(merged).return_full_result(true));
    if let Err(err) = report
        && let Some(report) = err.report()
    {
        println!("report: {}", report.to_json_value().unwrap_or_default());
    }

    // Custom checks through a dedicated registry
    let mut registry = CheckRegistry::new();
    registry.register("isEven", IsEven);
    let validator = Validator::new(Arc::new(registry));
    println!("7 even? {}", validator.validate(&json!(7), "isEven").is_ok());

    Ok(())
}
