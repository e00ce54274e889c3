//! Conjunction of several instructions

use crate::instruction::{LooseBody, LooseInstruction};
use crate::options::{ExtractedOptions, extract};

/// Merges instructions into one that requires all of them.
///
/// The result behaves like `{ "and": [a, b, ...] }`. Options are taken from
/// every input, with earlier inputs winning conflicts; absent inputs add no
/// checks. Inputs are copied, never modified.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_instructions::{merge, validate};
/// use serde_json::json;
///
/// let merged = merge([
///     json!({ "isString": true, "default_value": "" }),
///     json!({ "minLength": 3, "default_value": "n/a" }),
/// ]);
/// assert_eq!(validate(&json!("ab"), merged)?.into_value(), json!(""));
/// ```
pub fn merge<I>(instructions: I) -> LooseInstruction
where
    I: IntoIterator,
    I::Item: Into<LooseInstruction>,
{
    let mut overrides = ExtractedOptions::default();
    let mut bodies = Vec::new();

    for instruction in instructions {
        let (options, stripped) = extract(&instruction.into());
        overrides = overrides.or(options);
        if !stripped.is_absent() {
            bodies.push(stripped.body);
        }
    }

    LooseInstruction {
        body: LooseBody::Conjunction(bodies),
        overrides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::{CheckNode, Instruction, normalize};
    use crate::options::extract_options;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[test]
    fn test_merge_is_conjunction() {
        let merged = merge([json!("isString"), json!({ "minLength": 3 })]);
        assert_eq!(
            normalize(&merged).unwrap().into_root(),
            Instruction::All(vec![
                CheckNode::new("isString", Vec::new()).into(),
                CheckNode::new("minLength", vec![json!(3)]).into(),
            ])
        );
    }

    #[test]
    fn test_earlier_options_win() {
        let merged = merge([
            json!({ "isString": true, "return_full_result": false }),
            json!({ "minLength": 3, "return_full_result": true, "allow_absent": true }),
        ]);
        let options = extract_options(&merged);
        assert!(!options.return_full_result);
        assert!(options.allow_absent);
    }

    #[test]
    fn test_absent_inputs_add_nothing() {
        let merged = merge([Value::Null, json!("isString"), Value::Null]);
        assert_eq!(normalize(&merged).unwrap().count_checks(), 1);

        let nothing = merge(Vec::<Value>::new());
        assert!(!normalize(&nothing).unwrap().has_checks());
    }

    #[test]
    fn test_merge_embeds_normalized_trees() {
        let tree = normalize(&LooseInstruction::from(json!(["isInteger", "isString"]))).unwrap();
        let merged = merge([LooseInstruction::from(&tree), LooseInstruction::from("notEmpty")]);
        assert_eq!(
            normalize(&merged).unwrap().into_root(),
            Instruction::All(vec![
                tree.into_root(),
                CheckNode::new("Empty", Vec::new()).negated().into(),
            ])
        );
    }
}
