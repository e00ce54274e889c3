//! Loose instruction normalization
//!
//! Rules, applied top-down:
//!
//! 1. an already normalized tree is returned as is
//! 2. text names a check (`"notEmpty"`); numbers, booleans (`false` too) and nested `null`
//!    become `equals` checks
//! 3. a list is a disjunction: `[a, b]` reads as `{ "any": [a, b] }`
//! 4. an object with a `check` or `args` key is a single check shorthand
//! 5. any other object is split into `all` (`all`, then `and`, then implicit
//!    checks from the remaining keys) and `any` (`any`, then `or`)
//!
//! Children are normalized one level deeper, combined and then flattened.

use super::{CheckNode, Instruction, LooseBody, LooseInstruction, NormalizedInstruction, ROOT_DEPTH, enter, flatten};
use crate::error::{Result, ValidationError};
use serde_json::{Map, Value};
use tracing::trace;

/// Keys that never become implicit checks.
const RESERVED_KEYS: [&str; 11] = [
    "mixin",
    "and",
    "or",
    "all",
    "any",
    "args",
    "throw_on_failure",
    "allow_absent",
    "default_value",
    "return_full_result",
    "debug",
];

const CHECK_KEY: &str = "check";
const ARGS_KEY: &str = "args";
const NEGATE_KEY: &str = "negate";

/// Check used for primitive literals.
const EQUALS_CHECK: &str = "equals";

/// Normalizes a loose instruction into its canonical tree.
///
/// The absent instruction normalizes to the vacuous `All([])`. Option keys at
/// the root are ignored here; see [`extract`](crate::options::extract).
///
/// # Errors
///
/// - [`ValidationError::NotAList`] when `all`, `any`, `and` or `or` holds
///   anything but a list
/// - [`ValidationError::MissingCheckName`] for a shorthand without a name
/// - [`ValidationError::TooDeep`] when nesting passes
///   [`MAX_DEPTH`](super::MAX_DEPTH)
pub fn normalize(loose: &LooseInstruction) -> Result<NormalizedInstruction> {
    if let LooseBody::Normalized(normalized) = &loose.body {
        return Ok(normalized.clone());
    }

    let root = normalize_body(&loose.body, ROOT_DEPTH)?;
    trace!(checks = root.count_checks(), "Normalized instruction");
    Ok(NormalizedInstruction::new(root))
}

/// Builds a check node, resolving negation prefixes and the boolean
/// argument shorthand.
///
/// A single boolean argument is consumed: `true` asserts the check, `false`
/// negates it. Leading `!`, `not` and `non` prefixes each flip the negation
/// and are stripped until none remain, so `"!notEmpty"` is plain `Empty`.
///
/// # Errors
///
/// Returns [`ValidationError::MissingCheckName`] when `name` is `None`.
pub fn normalize_check(name: Option<&str>, mut args: Vec<Value>, mut negate: bool) -> Result<CheckNode> {
    if let [Value::Bool(flag)] = args.as_slice() {
        negate = !*flag;
        args.clear();
    }

    let mut name = name.ok_or(ValidationError::MissingCheckName)?;
    loop {
        if let Some(rest) = name.strip_prefix('!') {
            name = rest;
        } else if let Some(rest) = name.strip_prefix("not").or_else(|| name.strip_prefix("non")) {
            name = rest;
        } else {
            break;
        }
        negate = !negate;
    }

    Ok(CheckNode {
        name: name.to_owned(),
        args,
        negate,
    })
}

fn normalize_body(body: &LooseBody, depth: usize) -> Result<Instruction> {
    enter(depth)?;
    match body {
        LooseBody::Json(value) => normalize_value(value, depth),
        LooseBody::Normalized(normalized) => Ok(flatten(normalized.root().clone(), depth)),
        LooseBody::Conjunction(bodies) => {
            let children = bodies
                .iter()
                .map(|body| normalize_body(body, depth + 1))
                .collect::<Result<Vec<_>>>()?;
            Ok(flatten(Instruction::All(children), depth))
        }
    }
}

fn normalize_value(value: &Value, depth: usize) -> Result<Instruction> {
    enter(depth)?;
    match value {
        Value::Null if depth == ROOT_DEPTH => Ok(Instruction::All(Vec::new())),
        Value::String(name) => Ok(normalize_check(Some(name), Vec::new(), false)?.into()),
        Value::Null | Value::Bool(_) | Value::Number(_) => {
            Ok(CheckNode::new(EQUALS_CHECK, vec![value.clone()]).into())
        }
        Value::Array(items) => {
            normalize_collections(Vec::new(), items.iter().map(Pending::Loose).collect(), depth)
        }
        Value::Object(map) if is_shorthand(map) => Ok(shorthand(map)?.into()),
        Value::Object(map) => normalize_object(map, depth),
    }
}

/// An `all`/`any` entry waiting to be normalized.
enum Pending<'a> {
    /// A nested loose instruction.
    Loose(&'a Value),
    /// A non-reserved key: `{ name: arg }`.
    Implicit { name: &'a str, arg: &'a Value },
}

impl Pending<'_> {
    fn normalize(&self, depth: usize) -> Result<Instruction> {
        match *self {
            Self::Loose(value) => normalize_value(value, depth),
            Self::Implicit { name, arg } => Ok(normalize_check(Some(name), vec![arg.clone()], false)?.into()),
        }
    }
}

fn normalize_object(map: &Map<String, Value>, depth: usize) -> Result<Instruction> {
    let mut all: Vec<Pending<'_>> = list_items(map, "all")?.iter().map(Pending::Loose).collect();
    let mut any: Vec<Pending<'_>> = list_items(map, "any")?.iter().map(Pending::Loose).collect();
    all.extend(list_items(map, "and")?.iter().map(Pending::Loose));
    any.extend(list_items(map, "or")?.iter().map(Pending::Loose));

    all.extend(
        map.iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .map(|(name, arg)| Pending::Implicit { name: name.as_str(), arg }),
    );

    normalize_collections(all, any, depth)
}

fn normalize_collections(all: Vec<Pending<'_>>, any: Vec<Pending<'_>>, depth: usize) -> Result<Instruction> {
    let all = all
        .iter()
        .map(|pending| pending.normalize(depth + 1))
        .collect::<Result<Vec<_>>>()?;
    let any = any
        .iter()
        .map(|pending| pending.normalize(depth + 1))
        .collect::<Result<Vec<_>>>()?;

    trace!(depth, all = all.len(), any = any.len(), "Combining collections");
    Ok(flatten(combine(all, any), depth))
}

fn combine(mut all: Vec<Instruction>, any: Vec<Instruction>) -> Instruction {
    match (all.is_empty(), any.is_empty()) {
        (_, true) => Instruction::All(all),
        (true, false) => Instruction::Any(any),
        (false, false) => {
            all.push(Instruction::Any(any));
            Instruction::All(all)
        }
    }
}

fn list_items<'a>(map: &'a Map<String, Value>, key: &'static str) -> Result<&'a [Value]> {
    match map.get(key) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(ValidationError::not_a_list(key, other)),
    }
}

fn is_shorthand(map: &Map<String, Value>) -> bool {
    map.contains_key(CHECK_KEY) || map.contains_key(ARGS_KEY)
}

fn shorthand(map: &Map<String, Value>) -> Result<CheckNode> {
    let name = map.get(CHECK_KEY).and_then(Value::as_str);
    let args = match map.get(ARGS_KEY) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(single) => vec![single.clone()],
    };
    let negate = map.get(NEGATE_KEY).and_then(Value::as_bool).unwrap_or(false);

    normalize_check(name, args, negate)
}
