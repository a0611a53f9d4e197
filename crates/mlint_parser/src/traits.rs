//! Parser trait definition.

use mlint_ast::{AstArena, Document};

use crate::ParseError;

/// Trait implemented by every markup dialect parser.
///
/// A parser turns source text into a [`Document`] whose nodes are
/// allocated in `arena`. Every span it reports must come from a
/// [`Tokenizer`](mlint_ast::Tokenizer) (or agree with one), which
/// [`check_document`](crate::check_document) verifies in parser tests.
///
/// # Example
///
/// ```rust,ignore
/// use mlint_ast::{AstArena, Document};
/// use mlint_parser::{ParseError, Parser};
///
/// struct VueParser;
///
/// impl Parser for VueParser {
///     fn name(&self) -> &str {
///         "vue"
///     }
///
///     fn extensions(&self) -> &[&str] {
///         &["vue"]
///     }
///
///     fn parse<'a>(
///         &self,
///         arena: &'a AstArena,
///         source: &'a str,
///     ) -> Result<Document<'a>, ParseError> {
///         // Tokenize with `Tokenizer::template()`
///         todo!()
///     }
/// }
/// ```
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles, without the dot.
    fn extensions(&self) -> &[&str];

    /// Parses `source` into a document.
    ///
    /// Tokens borrow their text from `source`, so the document lives as
    /// long as both the arena and the source.
    fn parse<'a>(&self, arena: &'a AstArena, source: &'a str)
    -> Result<Document<'a>, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
