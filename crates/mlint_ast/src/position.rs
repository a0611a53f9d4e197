//! Offset and line/column arithmetic.
//!
//! Every offset, length and column in this crate is counted in UTF-16 code
//! units, which is what editors and language servers report. Lines and
//! columns are 1-indexed. Only `\n` terminates a line, so a `\r\n` pair
//! counts as a single break and a lone `\r` is ordinary text.

use serde::{Deserialize, Serialize};

/// A 1-indexed line/column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed, UTF-16 code units).
    pub col: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Returns the length of `s` in UTF-16 code units.
#[inline]
pub fn utf16_len(s: &str) -> u32 {
    s.chars().map(|ch| ch.len_utf16() as u32).sum()
}

/// Converts a UTF-16 offset into a byte index into `source`.
///
/// Offsets past the end clamp to `source.len()`. An offset that splits a
/// surrogate pair resolves to the end of that character.
fn byte_index(source: &str, offset: u32) -> usize {
    let mut units = 0u32;
    for (idx, ch) in source.char_indices() {
        if units >= offset {
            return idx;
        }
        units += ch.len_utf16() as u32;
    }
    source.len()
}

/// Slices `source` between two UTF-16 offsets.
///
/// # Panics
///
/// Panics if `start > end`; callers must never produce reversed spans.
pub fn utf16_slice(source: &str, start: u32, end: u32) -> &str {
    assert!(
        start <= end,
        "reversed span: start offset {start} is past end offset {end}"
    );
    &source[byte_index(source, start)..byte_index(source, end)]
}

/// Returns the 1-based line containing `offset`.
pub fn line_at(source: &str, offset: u32) -> u32 {
    let before = &source[..byte_index(source, offset)];
    before.bytes().filter(|b| *b == b'\n').count() as u32 + 1
}

/// Returns the 1-based column of `offset` within its line.
pub fn col_at(source: &str, offset: u32) -> u32 {
    let before = &source[..byte_index(source, offset)];
    let current_line = match before.rfind('\n') {
        Some(idx) => &before[idx + 1..],
        None => before,
    };
    utf16_len(current_line) + 1
}

/// Returns the offset at which the line containing `offset` begins.
pub fn line_start(source: &str, offset: u32) -> u32 {
    let before = &source[..byte_index(source, offset)];
    match before.rfind('\n') {
        Some(idx) => utf16_len(&before[..=idx]),
        None => 0,
    }
}

/// Returns the line on which `raw` ends when it starts on `start_line`.
///
/// # Panics
///
/// Panics if the end line would not fit in a `u32`.
pub fn end_line(raw: &str, start_line: u32) -> u32 {
    let breaks = raw.bytes().filter(|b| *b == b'\n').count() as u32;
    start_line
        .checked_add(breaks)
        .unwrap_or_else(|| panic!("end line overflows u32 (start line {start_line})"))
}

/// Returns the column just past the end of `raw` when it starts at `start_col`.
///
/// Multi-line text ends relative to its last line; single-line text ends
/// relative to where it started.
///
/// # Panics
///
/// Panics if the end column would not fit in a `u32`.
pub fn end_col(raw: &str, start_col: u32) -> u32 {
    let (base, tail) = match raw.rfind('\n') {
        Some(idx) => (1, &raw[idx + 1..]),
        None => (start_col, raw),
    };
    base.checked_add(utf16_len(tail))
        .unwrap_or_else(|| panic!("end column overflows u32 (start column {start_col})"))
}

/// Position arithmetic used by a tokenizer.
///
/// Each markup dialect hands its tokenizer one of these. The provided
/// methods implement the baseline rules above; a dialect with different
/// line-break conventions overrides them.
pub trait PositionMath {
    /// See [`line_at`].
    fn line_at(&self, source: &str, offset: u32) -> u32 {
        line_at(source, offset)
    }

    /// See [`col_at`].
    fn col_at(&self, source: &str, offset: u32) -> u32 {
        col_at(source, offset)
    }

    /// See [`end_line`].
    fn end_line(&self, raw: &str, start_line: u32) -> u32 {
        end_line(raw, start_line)
    }

    /// See [`end_col`].
    fn end_col(&self, raw: &str, start_col: u32) -> u32 {
        end_col(raw, start_col)
    }
}

/// Position rules for plain markup documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkupPositions;

impl PositionMath for MarkupPositions {}

/// Position rules for template-dialect sources such as single-file
/// component templates.
///
/// Template bodies are sliced out of a host file, so a template parser
/// computes end positions through its own strategy. The line-break rules
/// currently match [`MarkupPositions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplatePositions;

impl PositionMath for TemplatePositions {}
