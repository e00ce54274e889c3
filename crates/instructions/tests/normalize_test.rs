use nebula_instructions::{
    CheckNode, Instruction, LooseInstruction, MAX_DEPTH, ValidationError, count_checks, describe, has_checks,
    normalize, validate,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn only_check(instructions: Value) -> CheckNode {
    let tree = normalize(instructions).unwrap();
    match tree.children() {
        [Instruction::Check(check)] => check.clone(),
        other => panic!("expected a single check, got {other:?}"),
    }
}

#[rstest]
#[case(json!({ "isString": true }), false)]
#[case(json!({ "isString": false }), true)]
#[case(json!({ "notEmpty": true }), true)]
#[case(json!({ "notEmpty": false }), false)]
#[case(json!("!!isString"), false)]
fn test_negation_shorthand(#[case] instructions: Value, #[case] negate: bool) {
    assert_eq!(only_check(instructions).negate, negate);
}

#[test]
fn test_prefix_strip_is_literal() {
    // both prefixes strip exactly three characters
    assert_eq!(only_check(json!("nonEmpty")).name, "Empty");
    assert_eq!(only_check(json!("nothing")).name, "hing");
}

#[rstest]
#[case(json!("isString"))]
#[case(json!(5))]
#[case(json!(true))]
#[case(json!({ "check": "min", "args": [1] }))]
#[case(json!(["isString"]))]
#[case(json!({ "and": ["isString"] }))]
#[case(json!({}))]
#[case(Value::Null)]
fn test_root_is_never_a_bare_check(#[case] instructions: Value) {
    let tree = normalize(instructions).unwrap();
    assert!(!tree.root().is_check());
    assert!(tree.is_all() || tree.is_any());
}

#[test]
fn test_single_item_list_root_keeps_any() {
    let tree = normalize(json!(["isString"])).unwrap();
    assert!(tree.is_any());
    assert_eq!(tree.count_checks(), 1);
}

#[test]
fn test_shorthand_without_name() {
    let err = normalize(json!({ "args": [1, 2] })).unwrap_err();
    assert!(matches!(err, ValidationError::MissingCheckName));
    assert!(err.is_structural());
}

#[rstest]
#[case(json!({ "all": 1 }))]
#[case(json!({ "any": {} }))]
#[case(json!({ "and": "isString" }))]
#[case(json!({ "or": true }))]
#[case(json!({ "all": [{ "or": "isString" }] }))]
fn test_collections_must_be_lists(#[case] instructions: Value) {
    let err = normalize(instructions).unwrap_err();
    assert!(matches!(err, ValidationError::NotAList { .. }));
}

fn in_list(inner: Value) -> Value {
    json!([inner])
}

fn in_all(inner: Value) -> Value {
    json!({ "all": [inner] })
}

fn in_or(inner: Value) -> Value {
    json!({ "or": ["isString", inner] })
}

#[rstest]
#[case(in_list)]
#[case(in_all)]
#[case(in_or)]
fn test_deep_nesting_is_rejected(#[case] wrap: fn(Value) -> Value) {
    let instructions = (0..1_000).fold(json!("isInteger"), |inner, _| wrap(inner));

    let err = validate(&json!(5), instructions.clone()).unwrap_err();
    assert!(err.is_structural());
    assert!(matches!(err, ValidationError::TooDeep { max: MAX_DEPTH }));
    assert!(describe(instructions).unwrap_err().is_structural());
}

#[test]
fn test_synonyms_append_after_collections() {
    let tree = normalize(json!({
        "or": ["isBoolean"],
        "any": ["isInteger"],
        "and": ["notEmpty"],
        "all": ["isString"],
    }))
    .unwrap();

    assert_eq!(
        tree.into_root(),
        Instruction::All(vec![
            CheckNode::new("isString", Vec::new()).into(),
            CheckNode::new("Empty", Vec::new()).negated().into(),
            Instruction::Any(vec![
                CheckNode::new("isInteger", Vec::new()).into(),
                CheckNode::new("isBoolean", Vec::new()).into(),
            ]),
        ])
    );
}

#[test]
fn test_option_keys_are_not_checks() {
    let tree = normalize(json!({
        "isInteger": true,
        "throw_on_failure": false,
        "allow_absent": true,
        "default_value": 0,
        "return_full_result": true,
        "debug": true,
        "mixin": "anything",
    }))
    .unwrap();
    assert_eq!(tree.count_checks(), 1);
}

#[test]
fn test_normalize_is_idempotent_for_trees() {
    let once = normalize(json!({ "isString": true, "or": ["empty", { "minLength": 3 }] })).unwrap();
    let twice = normalize(&once).unwrap();
    assert_eq!(twice, once);
    assert_eq!(normalize(LooseInstruction::from(once.clone())).unwrap(), once);
}

#[test]
fn test_count_and_has_checks() {
    assert_eq!(count_checks(json!({ "isString": true, "or": ["a", "b", ["c", "d"]] })).unwrap(), 5);
    assert_eq!(count_checks(json!({ "all": [], "any": [] })).unwrap(), 0);
    assert!(has_checks("isString").unwrap());
    assert!(!has_checks(json!({ "all": [{ "any": [] }] })).unwrap());
    assert!(has_checks(json!({ "and": 1 })).is_err());
}

#[test]
fn test_tree_serializes_to_json() {
    let tree = normalize(json!({ "isString": false })).unwrap();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({ "all": [{ "check": { "name": "isString", "args": [], "negate": true } }] })
    );
}
