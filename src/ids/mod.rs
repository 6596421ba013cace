//! Ideographic Description Sequence terms.
//!
//! An IDS is either a single character or one of the twelve composition
//! operators applied to its operands. Operand count is part of the type:
//! binary operators carry exactly two operands, ternary ones exactly three,
//! so an ill-formed node cannot be constructed.

mod operator;
pub mod parser;
pub mod transform;

#[cfg(test)]
mod tests;

use std::fmt;

pub use operator::{BinaryOperator, Operator, TernaryOperator};
pub use parser::parse;
pub use transform::{transform, Leaves};

use crate::error::ArityError;

/// A composition term.
///
/// Operand order is spatial (left to right, top to bottom, outer to inner)
/// and no operation in this crate reorders it.
#[derive(Clone, Debug, Eq)]
pub enum Ids {
    Leaf(char),
    Binary(BinaryOperator, Box<[Ids; 2]>),
    Ternary(TernaryOperator, Box<[Ids; 3]>),
}

impl Ids {
    pub fn leaf(ch: char) -> Ids {
        Ids::Leaf(ch)
    }

    pub fn binary(op: BinaryOperator, first: Ids, second: Ids) -> Ids {
        Ids::Binary(op, Box::new([first, second]))
    }

    pub fn ternary(op: TernaryOperator, first: Ids, second: Ids, third: Ids) -> Ids {
        Ids::Ternary(op, Box::new([first, second, third]))
    }

    /// Build a node from an operator and a dynamically sized operand list.
    pub fn from_operands(op: Operator, operands: Vec<Ids>) -> Result<Ids, ArityError> {
        let found = operands.len();
        let arity_error = || ArityError {
            operator: op,
            expected: op.arity(),
            found,
        };
        match op {
            Operator::Binary(op) => {
                let pair: [Ids; 2] = operands.try_into().map_err(|_| arity_error())?;
                Ok(Ids::Binary(op, Box::new(pair)))
            }
            Operator::Ternary(op) => {
                let triple: [Ids; 3] = operands.try_into().map_err(|_| arity_error())?;
                Ok(Ids::Ternary(op, Box::new(triple)))
            }
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Ids::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<char> {
        match self {
            Ids::Leaf(ch) => Some(*ch),
            _ => None,
        }
    }

    /// The node's operator, or `None` for a leaf.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Ids::Leaf(_) => None,
            Ids::Binary(op, _) => Some(Operator::Binary(*op)),
            Ids::Ternary(op, _) => Some(Operator::Ternary(*op)),
        }
    }

    /// The node's operands in order; empty for a leaf.
    pub fn operands(&self) -> &[Ids] {
        match self {
            Ids::Leaf(_) => &[],
            Ids::Binary(_, operands) => &operands[..],
            Ids::Ternary(_, operands) => &operands[..],
        }
    }

    /// Serialized form; identical to `to_string()`.
    pub fn to_ids_string(&self) -> String {
        self.to_string()
    }

    /// Operator nesting depth; 0 for a leaf.
    pub fn depth(&self) -> usize {
        self.operands()
            .iter()
            .map(|operand| operand.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Structural equality: same shape, same operators, same leaves in the same
/// positions. Visually similar but differently spelled compositions differ.
pub fn equal(a: &Ids, b: &Ids) -> bool {
    match (a, b) {
        (Ids::Leaf(x), Ids::Leaf(y)) => x == y,
        (Ids::Binary(op_a, xs), Ids::Binary(op_b, ys)) => {
            op_a == op_b && xs.iter().zip(ys.iter()).all(|(x, y)| equal(x, y))
        }
        (Ids::Ternary(op_a, xs), Ids::Ternary(op_b, ys)) => {
            op_a == op_b && xs.iter().zip(ys.iter()).all(|(x, y)| equal(x, y))
        }
        _ => false,
    }
}

impl PartialEq for Ids {
    fn eq(&self, other: &Self) -> bool {
        equal(self, other)
    }
}

/// The printer: operator symbol followed by each operand, no separators.
impl fmt::Display for Ids {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ids::Leaf(ch) => write!(f, "{}", ch),
            node => {
                if let Some(op) = node.operator() {
                    write!(f, "{}", op.symbol())?;
                }
                for operand in node.operands() {
                    write!(f, "{}", operand)?;
                }
                Ok(())
            }
        }
    }
}

impl std::str::FromStr for Ids {
    type Err = crate::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl From<char> for Ids {
    fn from(ch: char) -> Self {
        Ids::Leaf(ch)
    }
}
