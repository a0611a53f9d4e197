//! Positioned tokens.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::position::{Position, utf16_len};
use crate::tokenizer::Tokenizer;

static NEXT_TOKEN_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a token.
///
/// Ids are only guaranteed to be distinct, not ordered by creation. Treat
/// the value as opaque; it is suitable as a map key or correlation id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TokenId(u64);

impl TokenId {
    /// Allocates a fresh id. Safe to call from any thread.
    #[inline]
    pub fn next() -> Self {
        Self(NEXT_TOKEN_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tok-{:x}", self.0)
    }
}

/// A slice of source text together with where it sits in the source.
///
/// Tokens are created once by a [`Tokenizer`] and never mutated. `raw` may
/// be empty, which marks a zero-width token such as a missing closing quote.
///
/// # Example
///
/// ```rust
/// use mlint_ast::Token;
///
/// let token = Token::new(Some("ab\ncd"), 1, 1, 10);
/// assert_eq!((token.start_offset, token.end_offset), (10, 15));
/// assert_eq!((token.end_line, token.end_col), (2, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token<'a> {
    /// Identity of this token.
    pub id: TokenId,
    /// The exact source text covered.
    pub raw: &'a str,
    /// Start offset (inclusive).
    pub start_offset: u32,
    /// End offset (exclusive).
    pub end_offset: u32,
    /// Start line (1-indexed).
    pub start_line: u32,
    /// End line (1-indexed).
    pub end_line: u32,
    /// Start column (1-indexed).
    pub start_col: u32,
    /// End column (1-indexed, exclusive).
    pub end_col: u32,
}

impl<'a> Token<'a> {
    /// Creates a token using the baseline markup position rules.
    ///
    /// An absent `raw` is treated as the empty string.
    #[inline]
    pub fn new(raw: Option<&'a str>, line: u32, col: u32, start_offset: u32) -> Self {
        Tokenizer::markup().token(raw, line, col, start_offset)
    }

    /// Length of the token in UTF-16 code units.
    ///
    /// # Panics
    ///
    /// Panics if `end_offset` is before `start_offset`.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end_offset.checked_sub(self.start_offset).unwrap_or_else(|| {
            panic!(
                "token {} length overflows: end offset {} is before start offset {}",
                self.id, self.end_offset, self.start_offset
            )
        })
    }

    /// Returns true for a zero-width token.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }

    /// Start line/column.
    #[inline]
    pub const fn start(&self) -> Position {
        Position::new(self.start_line, self.start_col)
    }

    /// End line/column.
    #[inline]
    pub const fn end(&self) -> Position {
        Position::new(self.end_line, self.end_col)
    }

    /// Returns true if `offset` falls inside this token.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        self.start_offset <= offset && offset < self.end_offset
    }

    /// Returns true if the offsets agree with the length of `raw`.
    pub fn is_well_formed(&self) -> bool {
        self.end_offset >= self.start_offset
            && self.end_offset - self.start_offset == utf16_len(self.raw)
    }
}
