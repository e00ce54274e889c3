//! Natural-language descriptions of instructions
//!
//! Descriptions read as the expected half of a failure message:
//!
//! | tree                               | description                         |
//! |------------------------------------|-------------------------------------|
//! | `All[isString]`                    | `a string`                          |
//! | `All[isString, notEmpty]`          | `(a string && not empty)`           |
//! | `Any[isInteger, isString]`         | `an integer or a string`            |
//! | `Any[a, b, c]`                     | `a, b, or c`                        |
//! | `All[isString, Any[a, b, c]]`      | `(a string && (a \|\| b \|\| c))`   |

use crate::error::Result;
use crate::evaluator::Validator;
use crate::instruction::{Instruction, LooseInstruction, NormalizedInstruction, ROOT_DEPTH, enter, normalize};

impl Validator {
    /// Describes what a loose instruction expects.
    ///
    /// # Errors
    ///
    /// Structural errors from normalization, or
    /// [`ValidationError::UnknownCheck`](crate::ValidationError::UnknownCheck)
    /// for an unregistered check.
    pub fn describe(&self, instructions: impl Into<LooseInstruction>) -> Result<String> {
        let normalized = normalize(&instructions.into())?;
        self.describe_instruction(&normalized)
    }

    /// Describes a canonical tree.
    pub fn describe_instruction(&self, instructions: &NormalizedInstruction) -> Result<String> {
        self.describe_node(instructions.root(), ROOT_DEPTH)
    }

    fn describe_node(&self, node: &Instruction, depth: usize) -> Result<String> {
        enter(depth)?;
        match node {
            Instruction::Check(check) => Ok(self.registry().get(&check.name)?.describe(check.negate, &check.args)),
            Instruction::Any(children) => {
                let parts = self.describe_children(children, depth)?;
                let text = match parts.as_slice() {
                    [] => return Ok(String::new()),
                    [only] => return Ok(only.clone()),
                    [first, second] => format!("{first} or {second}"),
                    [init @ .., last] if depth == ROOT_DEPTH => format!("{}, or {last}", init.join(", ")),
                    _ => parts.join(" || "),
                };
                Ok(if depth == ROOT_DEPTH { text } else { parenthesized(&text) })
            }
            Instruction::All(children) => {
                let parts = self.describe_children(children, depth)?;
                if parts.is_empty() {
                    return Ok(String::new());
                }
                let text = parts.join(" && ");
                Ok(if depth > ROOT_DEPTH || parts.len() > 1 {
                    parenthesized(&text)
                } else {
                    text
                })
            }
        }
    }

    fn describe_children(&self, children: &[Instruction], depth: usize) -> Result<Vec<String>> {
        children
            .iter()
            .map(|child| self.describe_node(child, depth + 1))
            .collect()
    }
}

fn parenthesized(text: &str) -> String {
    format!("({text})")
}
