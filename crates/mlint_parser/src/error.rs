//! Parser and tree-shape error types.

use mlint_ast::{NodeType, Position, TokenId};
use thiserror::Error;

/// Errors a dialect parser reports.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum ParseError {
    /// The source text could not be parsed.
    #[error("Invalid source: {message}")]
    #[diagnostic(code(mlint::parse::invalid_source))]
    InvalidSource {
        /// Error message.
        message: String,
        /// Offset (UTF-16 code units) where the error was detected.
        offset: Option<u32>,
    },

    /// The source uses a construct this dialect does not support.
    #[error("Unsupported syntax: {0}")]
    #[diagnostic(code(mlint::parse::unsupported))]
    Unsupported(String),

    /// The parser hit a state it should never reach.
    #[error("Internal parser error: {0}")]
    #[diagnostic(code(mlint::parse::internal))]
    Internal(String),

    /// The produced tree broke the AST contract.
    #[error("Malformed tree: {0}")]
    #[diagnostic(code(mlint::parse::malformed_tree))]
    Malformed(#[from] ConformanceError),
}

impl ParseError {
    /// Creates a new invalid source error.
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Self::InvalidSource {
            message: message.into(),
            offset: None,
        }
    }

    /// Creates a new invalid source error at `offset`.
    pub fn invalid_source_at(message: impl Into<String>, offset: u32) -> Self {
        Self::InvalidSource {
            message: message.into(),
            offset: Some(offset),
        }
    }

    /// Creates a new unsupported syntax error.
    pub fn unsupported(construct: impl Into<String>) -> Self {
        Self::Unsupported(construct.into())
    }

    /// Creates a new internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the offset the error points at, if any.
    pub fn offset(&self) -> Option<u32> {
        match self {
            Self::InvalidSource { offset, .. } => *offset,
            Self::Unsupported(_) | Self::Internal(_) => None,
            Self::Malformed(err) => Some(err.offset()),
        }
    }
}

/// A violation of the token/node invariants found in a parser's output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConformanceError {
    /// `end_offset - start_offset` differs from the length of `raw`.
    #[error("token {id} spans {start}..{end} but its raw text is {len} units long")]
    OffsetLength {
        id: TokenId,
        start: u32,
        end: u32,
        len: u32,
    },

    /// `raw` is not the source text between the token's offsets.
    #[error("token {id} at {start}..{end} holds {raw:?} but the source has {expected:?}")]
    RawMismatch {
        id: TokenId,
        start: u32,
        end: u32,
        raw: String,
        expected: String,
    },

    /// A line/column pair disagrees with the token's offset.
    #[error("token {id} {edge} position is {actual} but offset {offset} is at {expected}")]
    Position {
        id: TokenId,
        edge: &'static str,
        offset: u32,
        actual: Position,
        expected: Position,
    },

    /// A pear node that is not an end tag.
    #[error("pear node of <{owner}> at {offset} is a {pear_type}, expected an end tag")]
    PearNotEndTag {
        owner: String,
        offset: u32,
        pear_type: NodeType,
    },

    /// The same token id appears twice in one tree.
    #[error("token {id} at {offset} appears more than once in the tree")]
    DuplicateToken { id: TokenId, offset: u32 },
}

impl ConformanceError {
    /// The source offset the violation was found at.
    pub fn offset(&self) -> u32 {
        match self {
            Self::OffsetLength { start, .. } | Self::RawMismatch { start, .. } => *start,
            Self::Position { offset, .. }
            | Self::PearNotEndTag { offset, .. }
            | Self::DuplicateToken { offset, .. } => *offset,
        }
    }
}
