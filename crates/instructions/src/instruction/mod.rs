//! Canonical instruction tree
//!
//! Every accepted input shape normalizes into one tree of three node kinds:
//!
//! - [`Instruction::Check`]: a single named check, possibly negated
//! - [`Instruction::All`]: conjunction over children (empty is true)
//! - [`Instruction::Any`]: disjunction over children (empty is false)
//!
//! The evaluator and describer only ever see this form and match on it
//! exhaustively. A root is wrapped in [`NormalizedInstruction`], which is
//! always `All` or `Any` and doubles as the "already normalized" marker:
//! normalizing a `NormalizedInstruction` again returns it unchanged.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_instructions::{Instruction, normalize};
//! use serde_json::json;
//!
//! let tree = normalize(json!({ "isString": true, "notEmpty": true }))?;
//! assert!(tree.is_all());
//! assert_eq!(tree.count_checks(), 2);
//! ```

mod flatten;
mod loose;
mod normalize;

pub use loose::LooseInstruction;
pub use normalize::{normalize, normalize_check};

pub(crate) use flatten::flatten;
pub(crate) use loose::LooseBody;

use crate::error::{Result, ValidationError};
use serde::Serialize;
use serde_json::Value;

/// Depth of a root instruction. Several normalization and description rules
/// only apply at the root.
pub(crate) const ROOT_DEPTH: usize = 1;

/// Deepest nesting accepted when normalizing, evaluating or describing an
/// instruction, counting the root as level 1.
///
/// Matches the nesting limit `serde_json` applies when parsing text, so any
/// instruction read from a JSON document fits.
pub const MAX_DEPTH: usize = 128;

/// Fails with [`ValidationError::TooDeep`] once `depth` passes [`MAX_DEPTH`].
pub(crate) fn enter(depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(ValidationError::TooDeep { max: MAX_DEPTH });
    }
    Ok(())
}

// ============================================================================
// NODES
// ============================================================================

/// A single check invocation: `name(args)`, optionally negated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckNode {
    /// Registry name of the check.
    pub name: String,
    /// Arguments passed to the check, in order.
    pub args: Vec<Value>,
    /// Invert the check's verdict.
    pub negate: bool,
}

impl CheckNode {
    /// Creates a positive check.
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            args,
            negate: false,
        }
    }

    /// Flips the negation flag.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.negate = !self.negate;
        self
    }
}

/// Boolean combinator of a collection node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Logical AND.
    All,
    /// Logical OR.
    Any,
}

impl Combinator {
    /// Builds a collection node of this kind.
    pub fn build(self, children: Vec<Instruction>) -> Instruction {
        match self {
            Self::All => Instruction::All(children),
            Self::Any => Instruction::Any(children),
        }
    }
}

/// A node of the canonical instruction tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Instruction {
    /// Leaf check.
    Check(CheckNode),
    /// Every child must pass.
    All(Vec<Instruction>),
    /// At least one child must pass.
    Any(Vec<Instruction>),
}

impl Instruction {
    /// Returns the combinator of a collection node, `None` for checks.
    pub fn combinator(&self) -> Option<Combinator> {
        match self {
            Self::Check(_) => None,
            Self::All(_) => Some(Combinator::All),
            Self::Any(_) => Some(Combinator::Any),
        }
    }

    /// Returns the children of a collection node; a check has none.
    pub fn children(&self) -> &[Instruction] {
        match self {
            Self::Check(_) => &[],
            Self::All(children) | Self::Any(children) => children.as_slice(),
        }
    }

    /// Returns true for leaf checks.
    pub fn is_check(&self) -> bool {
        matches!(self, Self::Check(_))
    }

    /// Counts check leaves recursively.
    pub fn count_checks(&self) -> usize {
        match self {
            Self::Check(_) => 1,
            Self::All(children) | Self::Any(children) => {
                children.iter().map(Instruction::count_checks).sum()
            }
        }
    }
}

impl From<CheckNode> for Instruction {
    fn from(check: CheckNode) -> Self {
        Self::Check(check)
    }
}

// ============================================================================
// NORMALIZED ROOT
// ============================================================================

/// A root-level canonical instruction.
///
/// The root is always `All` or `Any`, never a bare check, so callers can rely
/// on its shape. Values of this type are only produced by normalization (or
/// by [`NormalizedInstruction::new`], which enforces the same root shape).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedInstruction {
    root: Instruction,
}

impl NormalizedInstruction {
    /// Wraps a canonical tree as a root; a bare check is wrapped in `All`.
    pub fn new(root: Instruction) -> Self {
        let root = match root {
            Instruction::Check(_) => Instruction::All(vec![root]),
            collection => collection,
        };
        Self { root }
    }

    /// The root node, `All` or `Any`.
    pub fn root(&self) -> &Instruction {
        &self.root
    }

    /// Children of the root node.
    pub fn children(&self) -> &[Instruction] {
        self.root.children()
    }

    /// Combinator of the root node.
    pub fn combinator(&self) -> Combinator {
        match self.root {
            Instruction::Any(_) => Combinator::Any,
            Instruction::All(_) | Instruction::Check(_) => Combinator::All,
        }
    }

    /// Returns true when the root is a conjunction.
    pub fn is_all(&self) -> bool {
        self.combinator() == Combinator::All
    }

    /// Returns true when the root is a disjunction.
    pub fn is_any(&self) -> bool {
        self.combinator() == Combinator::Any
    }

    /// Counts check leaves in the whole tree.
    pub fn count_checks(&self) -> usize {
        self.root.count_checks()
    }

    /// Returns true when the tree holds at least one check.
    pub fn has_checks(&self) -> bool {
        self.count_checks() > 0
    }

    /// Extracts the root node.
    pub fn into_root(self) -> Instruction {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(name: &str) -> Instruction {
        CheckNode::new(name, Vec::new()).into()
    }

    #[test]
    fn test_count_checks_is_recursive() {
        let tree = Instruction::All(vec![
            check("isString"),
            Instruction::Any(vec![check("empty"), Instruction::All(vec![check("absent")])]),
            Instruction::Any(Vec::new()),
        ]);
        assert_eq!(tree.count_checks(), 3);
        assert_eq!(Instruction::All(Vec::new()).count_checks(), 0);
    }

    #[test]
    fn test_normalized_root_never_bare_check() {
        let root = NormalizedInstruction::new(check("isString"));
        assert!(root.is_all());
        assert_eq!(root.children(), &[check("isString")]);
    }

    #[test]
    fn test_negated_flips() {
        let node = CheckNode::new("absent", Vec::new()).negated();
        assert!(node.negate);
        assert!(!node.negated().negate);
    }

    #[test]
    fn test_serialize_tree() {
        let root = NormalizedInstruction::new(Instruction::Any(vec![
            CheckNode::new("equals", vec![json!(1)]).into(),
            check("isString"),
        ]));
        let value = serde_json::to_value(&root).unwrap();
        assert_eq!(
            value,
            json!({ "any": [
                { "check": { "name": "equals", "args": [1], "negate": false } },
                { "check": { "name": "isString", "args": [], "negate": false } },
            ]})
        );
    }
}
