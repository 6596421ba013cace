use super::{Ids, Operator};
use crate::error::ParseError;

const MAX_NESTING_DEPTH: usize = 256;

/// Parse one IDS string into a term, consuming all of it.
pub fn parse(text: &str) -> Result<Ids, ParseError> {
    Parser::new(text).parse_ids()
}

/// Recursive-descent parser over the code points of one IDS string.
///
/// `pos` is the single read position shared by every nested operand.
pub(crate) struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            depth: 0,
        }
    }

    pub(crate) fn parse_ids(mut self) -> Result<Ids, ParseError> {
        if self.chars.is_empty() {
            return Err(ParseError::Empty);
        }
        let ids = self.parse_term()?;
        if self.pos < self.chars.len() {
            return Err(ParseError::TrailingData {
                offset: self.pos,
                rest: self.chars[self.pos..].iter().collect(),
            });
        }
        Ok(ids)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(ch)
    }

    /// Read one term. The caller guarantees at least one character remains.
    fn parse_term(&mut self) -> Result<Ids, ParseError> {
        let offset = self.pos;
        let Some(ch) = self.advance() else {
            return Err(ParseError::Empty);
        };
        let Some(op) = Operator::from_char(ch) else {
            return Ok(Ids::Leaf(ch));
        };

        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeep {
                max: MAX_NESTING_DEPTH,
            });
        }
        let node = match op {
            Operator::Binary(binary) => {
                let first = self.parse_operand(op, offset)?;
                let second = self.parse_operand(op, offset)?;
                Ids::binary(binary, first, second)
            }
            Operator::Ternary(ternary) => {
                let first = self.parse_operand(op, offset)?;
                let second = self.parse_operand(op, offset)?;
                let third = self.parse_operand(op, offset)?;
                Ids::ternary(ternary, first, second, third)
            }
        };
        self.depth -= 1;
        Ok(node)
    }

    fn parse_operand(&mut self, op: Operator, op_offset: usize) -> Result<Ids, ParseError> {
        if self.pos >= self.chars.len() {
            return Err(ParseError::Incomplete {
                operator: op,
                offset: op_offset,
            });
        }
        self.parse_term()
    }
}
