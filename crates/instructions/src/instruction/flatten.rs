//! Simplification of freshly combined collections

use super::{Combinator, Instruction, ROOT_DEPTH};

/// Flattens one collection node whose children are already flat.
///
/// Below the root a collection with a single child is replaced by that child.
/// Otherwise children of the same kind as `node` are dissolved into it: the
/// result lists the kept children first, followed by the grandchildren taken
/// from the dissolved children, in order. Checks pass through untouched.
pub(crate) fn flatten(node: Instruction, depth: usize) -> Instruction {
    let (kind, mut children) = match node {
        Instruction::Check(check) => return Instruction::Check(check),
        Instruction::All(children) => (Combinator::All, children),
        Instruction::Any(children) => (Combinator::Any, children),
    };

    if depth > ROOT_DEPTH
        && children.len() == 1
        && let Some(only) = children.pop()
    {
        return only;
    }

    let mut kept = Vec::with_capacity(children.len());
    let mut spliced = Vec::new();
    for child in children {
        match child {
            Instruction::All(grandchildren) if kind == Combinator::All => spliced.extend(grandchildren),
            Instruction::Any(grandchildren) if kind == Combinator::Any => spliced.extend(grandchildren),
            other => kept.push(other),
        }
    }
    kept.append(&mut spliced);

    kind.build(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::CheckNode;
    use pretty_assertions::assert_eq;

    fn check(name: &str) -> Instruction {
        CheckNode::new(name, Vec::new()).into()
    }

    #[test]
    fn test_single_child_collapses_below_root() {
        let node = Instruction::Any(vec![check("a")]);
        assert_eq!(flatten(node.clone(), 2), check("a"));
        assert_eq!(flatten(node.clone(), ROOT_DEPTH), node);
    }

    #[test]
    fn test_same_kind_children_are_spliced_after_kept() {
        let node = Instruction::All(vec![
            check("a"),
            Instruction::All(vec![check("b"), check("c")]),
            check("d"),
            Instruction::Any(vec![check("e"), check("f")]),
        ]);

        assert_eq!(
            flatten(node, ROOT_DEPTH),
            Instruction::All(vec![
                check("a"),
                check("d"),
                Instruction::Any(vec![check("e"), check("f")]),
                check("b"),
                check("c"),
            ])
        );
    }

    #[test]
    fn test_empty_collections_are_spliced_away() {
        let node = Instruction::Any(vec![Instruction::Any(Vec::new()), check("a"), Instruction::All(Vec::new())]);
        assert_eq!(
            flatten(node, ROOT_DEPTH),
            Instruction::Any(vec![check("a"), Instruction::All(Vec::new())])
        );
    }

    #[test]
    fn test_check_passes_through() {
        assert_eq!(flatten(check("a"), 3), check("a"));
    }
}
