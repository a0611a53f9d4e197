//! Token factory.
//!
//! Parsers build every [`Token`] they report through a [`Tokenizer`]. The
//! tokenizer is generic over a [`PositionMath`] strategy so dialect parsers
//! share one output shape while choosing their own line-break rules.

use crate::position::{MarkupPositions, PositionMath, TemplatePositions, utf16_len, utf16_slice};
use crate::token::{Token, TokenId};

/// Builds positioned tokens with a fixed [`PositionMath`] strategy.
///
/// # Example
///
/// ```rust
/// use mlint_ast::Tokenizer;
///
/// let tokenizer = Tokenizer::template();
/// let token = tokenizer.token(Some("{{ msg }}"), 3, 5, 42);
/// assert_eq!(token.end_col, 14);
/// assert_eq!(token.end_offset, 51);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer<M = MarkupPositions> {
    math: M,
}

impl Tokenizer<MarkupPositions> {
    /// Tokenizer for plain markup.
    #[inline]
    pub const fn markup() -> Self {
        Self {
            math: MarkupPositions,
        }
    }
}

impl Tokenizer<TemplatePositions> {
    /// Tokenizer for template-dialect sources.
    #[inline]
    pub const fn template() -> Self {
        Self {
            math: TemplatePositions,
        }
    }
}

impl<M: PositionMath> Tokenizer<M> {
    /// Creates a tokenizer around a custom strategy.
    #[inline]
    pub const fn new(math: M) -> Self {
        Self { math }
    }

    /// Returns the position strategy in use.
    #[inline]
    pub const fn math(&self) -> &M {
        &self.math
    }

    /// Creates a token for `raw` starting at the given line, column and offset.
    ///
    /// An absent `raw` produces a zero-width token.
    ///
    /// # Panics
    ///
    /// Panics if the end offset would not fit in a `u32`.
    pub fn token<'a>(
        &self,
        raw: Option<&'a str>,
        line: u32,
        col: u32,
        start_offset: u32,
    ) -> Token<'a> {
        let raw = raw.unwrap_or_default();
        let end_offset = start_offset
            .checked_add(utf16_len(raw))
            .unwrap_or_else(|| panic!("token end offset overflows u32 (start {start_offset})"));

        Token {
            id: TokenId::next(),
            raw,
            start_offset,
            end_offset,
            start_line: line,
            end_line: self.math.end_line(raw, line),
            start_col: col,
            end_col: self.math.end_col(raw, col),
        }
    }

    /// Creates a token for `source[start, end)`, deriving both ends of the
    /// line/column span from `source` itself.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn slice_fragment<'a>(&self, source: &'a str, start: u32, end: u32) -> Token<'a> {
        let raw = utf16_slice(source, start, end);
        let end = start + utf16_len(raw);

        Token {
            id: TokenId::next(),
            raw,
            start_offset: start,
            end_offset: end,
            start_line: self.math.line_at(source, start),
            end_line: self.math.line_at(source, end),
            start_col: self.math.col_at(source, start),
            end_col: self.math.col_at(source, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_matches_concrete_scenario() {
        let token = Tokenizer::markup().token(Some("ab\ncd"), 1, 1, 10);

        assert_eq!(
            (
                token.start_line,
                token.start_col,
                token.start_offset,
                token.end_offset,
                token.end_line,
                token.end_col,
            ),
            (1, 1, 10, 15, 2, 3)
        );
    }

    #[test]
    fn test_dialects_produce_identical_spans() {
        let raw = Some("<template>\r\n  <p>");
        let markup = Tokenizer::markup().token(raw, 2, 4, 20);
        let template = Tokenizer::template().token(raw, 2, 4, 20);

        assert_eq!(markup.start(), template.start());
        assert_eq!(markup.end(), template.end());
        assert_eq!(markup.end_offset, template.end_offset);
        assert_ne!(markup.id, template.id);
    }

    #[test]
    fn test_custom_strategy_is_used() {
        struct EveryCrBreaks;

        impl PositionMath for EveryCrBreaks {
            fn end_line(&self, raw: &str, start_line: u32) -> u32 {
                start_line + raw.matches(['\r', '\n']).count() as u32
            }
        }

        let token = Tokenizer::new(EveryCrBreaks).token(Some("a\rb"), 1, 1, 0);
        assert_eq!(token.end_line, 2);
        // Columns still come from the provided baseline method.
        assert_eq!(token.end_col, 4);
    }

    #[test]
    fn test_offset_delta_equals_raw_length() {
        let tokenizer = Tokenizer::markup();
        for raw in ["", "a", "\n", "\u{1F389}", "x\r\ny\tz"] {
            let token = tokenizer.token(Some(raw), 1, 1, 3);
            assert_eq!(token.end_offset - token.start_offset, utf16_len(raw));
        }
    }

    #[test]
    fn test_slice_fragment() {
        let source = "<div>\n  <p>hi</p>\n</div>";
        let fragment = Tokenizer::markup().slice_fragment(source, 8, 17);

        assert_eq!(fragment.raw, "<p>hi</p>");
        assert_eq!(fragment.start(), crate::Position::new(2, 3));
        assert_eq!(fragment.end(), crate::Position::new(2, 12));
        assert_eq!((fragment.start_offset, fragment.end_offset), (8, 17));
    }

    #[test]
    fn test_slice_fragment_agrees_with_token() {
        let source = "a\nbc\r\nd";
        let tokenizer = Tokenizer::markup();
        let fragment = tokenizer.slice_fragment(source, 1, 7);
        let token = tokenizer.token(Some(fragment.raw), 1, 2, 1);

        assert_eq!(fragment.start(), token.start());
        assert_eq!(fragment.end(), token.end());
        assert_eq!(fragment.end_offset, token.end_offset);
    }

    #[test]
    fn test_slice_fragment_clamps_past_end() {
        let fragment = Tokenizer::markup().slice_fragment("abc", 1, 10);
        assert_eq!(fragment.raw, "bc");
        assert_eq!(fragment.end_offset, 3);
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_offset_overflow_panics() {
        Tokenizer::markup().token(Some("ab"), 1, 1, u32::MAX - 1);
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_column_overflow_panics() {
        Tokenizer::markup().token(Some("ab"), 1, u32::MAX - 1, 0);
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_line_overflow_panics() {
        Tokenizer::template().token(Some("a\nb"), u32::MAX, 1, 0);
    }

    #[test]
    fn test_math_returns_strategy() {
        assert_eq!(Tokenizer::markup().math(), &MarkupPositions);
        assert_eq!(Tokenizer::template().math(), &TemplatePositions);
        assert_eq!(Tokenizer::template().math().end_col("ab\ncd", 9), 3);
    }
}
