//! Error types for tangut-ids.

use thiserror::Error;

use crate::ids::Operator;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Failure to read one IDS string as exactly one composition term.
///
/// Offsets count characters (code points) from the start of the IDS string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing to parse.
    #[error("empty IDS")]
    Empty,

    /// Input ended while `operator` still had operand slots to fill.
    #[error("incomplete IDS: operator {} at offset {offset} needs {} operands", .operator.symbol(), .operator.arity())]
    Incomplete { operator: Operator, offset: usize },

    /// A complete term was read but characters remain after it.
    #[error("did not consume entire IDS string: {rest:?} remains at offset {offset}")]
    TrailingData { offset: usize, rest: String },

    /// Operators nested deeper than the parser allows.
    #[error("IDS nesting depth exceeded (maximum {max} levels)")]
    TooDeep { max: usize },
}

impl ParseError {
    /// Character offset the error points at, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::Empty | ParseError::TooDeep { .. } => None,
            ParseError::Incomplete { offset, .. } | ParseError::TrailingData { offset, .. } => {
                Some(*offset)
            }
        }
    }

    /// Byte range within `ids` to highlight for this error.
    pub fn byte_range(&self, ids: &str) -> std::ops::Range<usize> {
        let byte_at = |chars: usize| {
            ids.char_indices()
                .nth(chars)
                .map(|(byte, _)| byte)
                .unwrap_or(ids.len())
        };
        match self {
            ParseError::Empty | ParseError::TooDeep { .. } => 0..ids.len(),
            ParseError::Incomplete { offset, .. } => byte_at(*offset)..ids.len(),
            ParseError::TrailingData { offset, .. } => byte_at(*offset)..ids.len(),
        }
    }
}

/// A node was built with an operand count its operator does not take.
///
/// Unreachable for anything the parser produced; only `Ids::from_operands`
/// can report it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("operator {} takes {expected} operands, got {found}", .operator.symbol())]
pub struct ArityError {
    pub operator: Operator,
    pub expected: usize,
    pub found: usize,
}

/// Record-level problems in a tab-separated IDS table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("character field {0:?} is not exactly one code point")]
    BadKey(String),

    #[error("cannot parse IDS {ids:?} for character {code_point} {character}: {source}")]
    BadIds {
        character: char,
        code_point: String,
        ids: String,
        #[source]
        source: ParseError,
    },
}

/// Problems loading a code-point range configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("line {line}: invalid range {text:?} (expected HEX-HEX or HEX)")]
    BadRange { line: usize, text: String },

    #[error("line {line}: range {text:?} starts after it ends")]
    InvertedRange { line: usize, text: String },

    #[error("missing '{0}' in [ranges]")]
    MissingKey(&'static str),

    #[error("character range {character} overlaps component range {component}")]
    Overlap { character: String, component: String },
}

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Arity(#[from] ArityError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::Read {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn write(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::Write {
            path: path.display().to_string(),
            source,
        }
    }
}
